//! Core types and configuration for RustACS.
//!
//! This crate holds the pieces every other RustACS crate shares: the client
//! configuration and its validation, the access key pair, the region
//! identifier, and the resolution of the Container Service endpoint.

mod config;
mod endpoint;
mod error;
mod types;

pub use config::{ClientConfig, ResolvedConfig};
pub use endpoint::{CS_DOMAIN, Endpoint, resolve_endpoint};
pub use error::{ConfigError, ConfigResult};
pub use types::{Credentials, RegionId};
