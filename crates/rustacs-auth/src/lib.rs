//! ACS request signing for RustACS.
//!
//! The Container Service API authenticates every request with an
//! HMAC-SHA1 signature carried in the `Authorization` header:
//!
//! ```text
//! acs <AccessKeyId>:<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA1(AccessKeySecret, StringToSign))` and:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Accept + "\n" +
//!                Content-MD5 + "\n" +
//!                Content-Type + "\n" +
//!                Date + "\n" +
//!                CanonicalizedHeaders +
//!                CanonicalizedResource
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Prefix-filtered, sorted header serialization
//! - [`digest`] - The `content-md5` body digest
//! - [`signer`] - String-to-sign construction and HMAC-SHA1 signing

pub mod canonical;
pub mod digest;
pub mod signer;

pub use canonical::canonicalize_headers;
pub use digest::content_md5;
pub use signer::{ACS_HEADER_PREFIX, HeaderSet, SIGNATURE_METHOD, sign, string_to_sign};
