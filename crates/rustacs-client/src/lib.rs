//! Signed HTTP client for the ACS Container Service API.
//!
//! [`CsClient`] turns a verb, a resource path, and an optional JSON body into
//! a request signed the way the service expects, hands it to a
//! [`Transport`], and maps the reply to either a [`CsResponse`] or a
//! [`CsError`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use rustacs_client::CsClient;
//! use rustacs_core::ClientConfig;
//!
//! # async fn run() -> Result<(), rustacs_client::CsError> {
//! let client = CsClient::new(
//!     ClientConfig::new("accessKeyId", "accessKeySecret", "cn-hangzhou").with_secure(true),
//! )?;
//! let clusters = client.list_clusters().await?;
//! println!("{}", clusters.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Request dispatch and the `get`/`put`/`post`/`delete` primitives
//! - [`cluster`] - Cluster endpoint operations
//! - [`error`] - Client error types
//! - [`headers`] - Outgoing header assembly, clock, and nonce sources
//! - [`model`] - Typed request bodies
//! - [`response`] - Response parsing and classification
//! - [`transport`] - The transport seam and its `reqwest` implementation

pub mod client;
pub mod cluster;
pub mod error;
pub mod headers;
pub mod model;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{CsClient, RequestOptions};
pub use error::{ApiError, CsError, CsResult, TransportError};
pub use headers::{Clock, FixedClock, FixedNonce, HeaderAssembler, NonceSource, RandomNonce, SystemClock};
pub use model::{AttachInstancesRequest, Password, ResetInstanceRequest, ScaleClusterRequest};
pub use response::CsResponse;
pub use transport::{ReqwestTransport, Transport, TransportFuture};
