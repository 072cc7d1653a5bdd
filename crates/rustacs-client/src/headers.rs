//! Outgoing header assembly.
//!
//! [`HeaderAssembler`] produces the complete header set of a request,
//! including the `authorization` header. The current time and the signature
//! nonce come from injected [`Clock`] and [`NonceSource`] implementations so
//! that signatures are reproducible under test.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use http::Method;
use rustacs_auth::{HeaderSet, SIGNATURE_METHOD, content_md5, sign};
use rustacs_core::{Credentials, RegionId, ResolvedConfig};

/// API version sent in `x-acs-version`.
pub const API_VERSION: &str = "2015-12-15";

/// Content type of request and response bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Exclusive upper bound of the signature nonce.
pub const NONCE_RANGE: u32 = 1000;

/// Source of the request `date`.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of the per-request `x-acs-signature-nonce`.
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// A fresh nonce value.
    fn nonce(&self) -> String;
}

/// Non-cryptographic random integer in `[0, NONCE_RANGE)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn nonce(&self) -> String {
        (rand::random::<u32>() % NONCE_RANGE).to_string()
    }
}

/// Always returns the same nonce.
#[derive(Debug, Clone)]
pub struct FixedNonce(pub String);

impl NonceSource for FixedNonce {
    fn nonce(&self) -> String {
        self.0.clone()
    }
}

/// Format an instant as an HTTP-date (RFC 7231 IMF-fixdate).
#[must_use]
pub fn http_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Builds signed header sets for one client identity.
#[derive(Debug, Clone)]
pub struct HeaderAssembler {
    credentials: Credentials,
    region: RegionId,
    host: String,
    clock: Arc<dyn Clock>,
    nonce: Arc<dyn NonceSource>,
}

impl HeaderAssembler {
    /// Create an assembler using the system clock and random nonces.
    #[must_use]
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            credentials: config.credentials.clone(),
            region: config.region.clone(),
            host: config.endpoint.domain.clone(),
            clock: Arc::new(SystemClock),
            nonce: Arc::new(RandomNonce),
        }
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the nonce source.
    #[must_use]
    pub fn with_nonce_source(mut self, nonce: Arc<dyn NonceSource>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Build the full header set for a request.
    ///
    /// Defaults are populated first. For methods other than `GET` and `HEAD`
    /// that carry a body, `content-length`, `content-type` and `content-md5`
    /// are added. `extra` is merged next and overrides any default with the
    /// same name. The signature is computed over the merged set and attached
    /// as `authorization`.
    #[must_use]
    pub fn build(
        &self,
        method: &Method,
        body: Option<&[u8]>,
        resource: &str,
        extra: &HeaderSet,
    ) -> HeaderSet {
        let mut headers = HeaderSet::new();
        headers.insert("date".to_owned(), http_date(self.clock.now()));
        headers.insert("accept".to_owned(), JSON_CONTENT_TYPE.to_owned());
        headers.insert("host".to_owned(), self.host.clone());
        headers.insert("x-acs-version".to_owned(), API_VERSION.to_owned());
        headers.insert("x-acs-region-id".to_owned(), self.region.to_string());
        headers.insert("x-acs-signature-nonce".to_owned(), self.nonce.nonce());
        headers.insert(
            "x-acs-signature-method".to_owned(),
            SIGNATURE_METHOD.to_owned(),
        );

        if let Some(body) = body.filter(|_| carries_body(method)) {
            headers.insert("content-length".to_owned(), body.len().to_string());
            headers.insert("content-type".to_owned(), JSON_CONTENT_TYPE.to_owned());
            headers.insert("content-md5".to_owned(), content_md5(body));
        }

        headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        let signature = sign(
            method.as_str(),
            &headers,
            resource,
            self.credentials.access_key_secret(),
        );
        headers.insert(
            "authorization".to_owned(),
            format!("acs {}:{signature}", self.credentials.access_key_id()),
        );

        headers
    }
}

fn carries_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::HEAD
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use chrono::TimeZone;
    use rustacs_core::ClientConfig;

    use super::*;

    fn fixed_assembler() -> HeaderAssembler {
        let config = ClientConfig::new("accessKeyId", "accessKeySecret", "cn-hangzhou")
            .resolve()
            .unwrap();
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        HeaderAssembler::new(&config)
            .with_clock(Arc::new(FixedClock(instant)))
            .with_nonce_source(Arc::new(FixedNonce("42".to_owned())))
    }

    #[test]
    fn test_should_format_http_date() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(http_date(instant), "Thu, 01 Jan 2026 00:00:00 GMT");
    }

    #[test]
    fn test_should_populate_default_headers() {
        let headers = fixed_assembler().build(&Method::GET, None, "/clusters", &HeaderSet::new());
        assert_eq!(headers["date"], "Thu, 01 Jan 2026 00:00:00 GMT");
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers["host"], "cs.aliyuncs.com");
        assert_eq!(headers["x-acs-version"], "2015-12-15");
        assert_eq!(headers["x-acs-region-id"], "cn-hangzhou");
        assert_eq!(headers["x-acs-signature-nonce"], "42");
        assert_eq!(headers["x-acs-signature-method"], "HMAC-SHA1");
    }

    #[test]
    fn test_should_produce_known_authorization_for_get() {
        let headers = fixed_assembler().build(&Method::GET, None, "/clusters", &HeaderSet::new());
        assert_eq!(
            headers["authorization"],
            "acs accessKeyId:NU8lE0OiRlTw8b1LJKWhBUDF+tI="
        );
    }

    #[test]
    fn test_should_omit_content_headers_for_get() {
        let headers =
            fixed_assembler().build(&Method::GET, Some(b"{}"), "/clusters", &HeaderSet::new());
        assert!(!headers.contains_key("content-length"));
        assert!(!headers.contains_key("content-type"));
        assert!(!headers.contains_key("content-md5"));
    }

    #[test]
    fn test_should_omit_content_headers_for_head() {
        let headers =
            fixed_assembler().build(&Method::HEAD, Some(b"x"), "/clusters", &HeaderSet::new());
        assert!(!headers.contains_key("content-length"));
        assert!(!headers.contains_key("content-type"));
        assert!(!headers.contains_key("content-md5"));
    }

    #[test]
    fn test_should_omit_content_headers_without_body() {
        let headers =
            fixed_assembler().build(&Method::DELETE, None, "/clusters/c1", &HeaderSet::new());
        assert!(!headers.contains_key("content-length"));
        assert!(!headers.contains_key("content-md5"));
    }

    #[test]
    fn test_should_add_content_headers_for_post_body() {
        let headers =
            fixed_assembler().build(&Method::POST, Some(b"abc"), "/clusters", &HeaderSet::new());
        assert_eq!(headers["content-length"], "3");
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(
            headers["content-md5"],
            BASE64.encode("900150983cd24fb0d6963f7d28e17f72")
        );
    }

    #[test]
    fn test_should_count_content_length_in_bytes() {
        let body = "集群".as_bytes();
        let headers = fixed_assembler().build(&Method::PUT, Some(body), "/c", &HeaderSet::new());
        assert_eq!(headers["content-length"], "6");
    }

    #[test]
    fn test_should_let_extra_headers_override_defaults() {
        let extra: HeaderSet = [("accept".to_owned(), "text/plain".to_owned())]
            .into_iter()
            .collect();
        let assembler = fixed_assembler();
        let overridden = assembler.build(&Method::GET, None, "/clusters", &extra);
        let default = assembler.build(&Method::GET, None, "/clusters", &HeaderSet::new());

        assert_eq!(overridden["accept"], "text/plain");
        // The override is signed, so the signature changes with it.
        assert_ne!(overridden["authorization"], default["authorization"]);
    }

    #[test]
    fn test_should_sign_extra_acs_headers() {
        let extra: HeaderSet = [("x-acs-extra".to_owned(), "1".to_owned())]
            .into_iter()
            .collect();
        let assembler = fixed_assembler();
        let with_extra = assembler.build(&Method::GET, None, "/clusters", &extra);
        let expected = sign(
            "GET",
            &with_extra
                .iter()
                .filter(|(k, _)| k.as_str() != "authorization")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            "/clusters",
            "accessKeySecret",
        );
        assert_eq!(
            with_extra["authorization"],
            format!("acs accessKeyId:{expected}")
        );
    }

    #[test]
    fn test_should_draw_nonce_in_range() {
        for _ in 0..200 {
            let nonce: u32 = RandomNonce.nonce().parse().unwrap();
            assert!(nonce < NONCE_RANGE);
        }
    }
}
