//! ACS HMAC-SHA1 request signing.
//!
//! The signer is a pure function of its inputs: it never reads the clock or
//! generates randomness. The `date` and nonce it signs over are whatever the
//! caller placed in the header set.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use crate::canonical::canonicalize_headers;

type HmacSha1 = Hmac<Sha1>;

/// Outgoing header set, keyed by header name as given (case preserved).
pub type HeaderSet = BTreeMap<String, String>;

/// Prefix of the ACS headers that take part in the signature.
pub const ACS_HEADER_PREFIX: &str = "x-acs-";

/// Value of the `x-acs-signature-method` header.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Build the string to sign.
///
/// ```text
/// HTTP-Verb + "\n" +
/// Accept + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedHeaders +
/// CanonicalizedResource
/// ```
///
/// Absent `accept`, `content-md5`, `content-type` and `date` headers each
/// contribute an empty line.
#[must_use]
pub fn string_to_sign(verb: &str, headers: &HeaderSet, resource: &str) -> String {
    let accept = header_value(headers, "accept");
    let content_md5 = header_value(headers, "content-md5");
    let content_type = header_value(headers, "content-type");
    let date = header_value(headers, "date");
    let canonical_headers = canonicalize_headers(headers, ACS_HEADER_PREFIX);

    format!("{verb}\n{accept}\n{content_md5}\n{content_type}\n{date}\n{canonical_headers}{resource}")
}

/// Sign a request: `Base64(HMAC-SHA1(secret, string_to_sign))`.
///
/// The secret is used as raw UTF-8 bytes for the HMAC key.
#[must_use]
pub fn sign(verb: &str, headers: &HeaderSet, resource: &str, secret: &str) -> String {
    let string_to_sign = string_to_sign(verb, headers, resource);
    debug!(string_to_sign = ?string_to_sign, "Built ACS string to sign");
    compute_signature(secret, &string_to_sign)
}

fn compute_signature(secret: &str, string_to_sign: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can accept any key length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

fn header_value<'a>(headers: &'a HeaderSet, name: &str) -> &'a str {
    headers.get(name).map_or("", String::as_str)
}
