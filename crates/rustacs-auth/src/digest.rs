//! Request body digest for the `content-md5` header.
//!
//! The service expects the *hex string* of the MD5 digest to be base64
//! encoded, not the raw 16 digest bytes:
//!
//! ```text
//! Content-MD5 = Base64(Hex(MD5(body)))
//! ```
//!
//! This must be reproduced exactly or the signature will not match.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use digest::Digest;

/// Compute the `content-md5` header value for a request body.
///
/// # Examples
///
/// ```
/// use rustacs_auth::digest::content_md5;
///
/// // base64("900150983cd24fb0d6963f7d28e17f72")
/// assert_eq!(content_md5(b"abc"), "OTAwMTUwOTgzY2QyNGZiMGQ2OTYzZjdkMjhlMTdmNzI=");
/// ```
#[must_use]
pub fn content_md5(body: &[u8]) -> String {
    let hex_digest = hex::encode(md5::Md5::digest(body));
    BASE64.encode(hex_digest.as_bytes())
}
