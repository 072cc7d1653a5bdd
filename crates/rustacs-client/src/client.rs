//! Request dispatch.
//!
//! [`CsClient::request`] is the single path every call takes: build the URL,
//! assemble and sign the headers, send through the transport, then classify
//! the response. The verb-specific primitives are thin wrappers over it.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::Method;
use rustacs_auth::HeaderSet;
use rustacs_core::{ClientConfig, Endpoint, RegionId, ResolvedConfig};
use tracing::debug;

use crate::error::{CsError, CsResult};
use crate::headers::{Clock, HeaderAssembler, NonceSource};
use crate::response::{CsResponse, classify};
use crate::transport::{ReqwestTransport, Transport};

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers, merged over the computed defaults before signing.
    pub headers: HeaderSet,
    /// Timeout passed through to the transport.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Options with no extra headers and no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the transport timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the ACS Container Service API.
///
/// Credentials and endpoint are fixed at construction. The client holds no
/// per-request state, so a shared reference can drive any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct CsClient<T = ReqwestTransport> {
    config: Arc<ResolvedConfig>,
    assembler: HeaderAssembler,
    transport: T,
}

impl CsClient<ReqwestTransport> {
    /// Create a client that sends requests with `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`CsError::Config`] if the access key id, access key secret,
    /// or region is missing (checked in that order).
    pub fn new(config: ClientConfig) -> CsResult<Self> {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> CsClient<T> {
    /// Create a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns [`CsError::Config`] if the configuration is incomplete.
    pub fn with_transport(config: ClientConfig, transport: T) -> CsResult<Self> {
        let config = config.resolve()?;
        let assembler = HeaderAssembler::new(&config);
        Ok(Self {
            config: Arc::new(config),
            assembler,
            transport,
        })
    }

    /// Replace the clock used for the `date` header.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.assembler = self.assembler.with_clock(clock);
        self
    }

    /// Replace the source of `x-acs-signature-nonce` values.
    #[must_use]
    pub fn with_nonce_source(mut self, nonce: Arc<dyn NonceSource>) -> Self {
        self.assembler = self.assembler.with_nonce_source(nonce);
        self
    }

    /// The resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.config.endpoint
    }

    /// The configured region.
    #[must_use]
    pub fn region(&self) -> &RegionId {
        &self.config.region
    }

    /// The access key id requests are signed with.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        self.config.credentials.access_key_id()
    }

    /// Send a signed request to `resource` and classify the response.
    ///
    /// `resource` is appended verbatim to the base URL and signed verbatim,
    /// including any query string.
    ///
    /// # Errors
    ///
    /// - [`CsError::Transport`] if the transport fails.
    /// - [`CsError::Api`] for any status other than 200.
    /// - [`CsError::ResponseFormat`] if the body is not JSON.
    /// - [`CsError::InvalidRequest`] if a header or the URL is not valid HTTP.
    pub async fn request(
        &self,
        method: Method,
        resource: &str,
        body: Option<Bytes>,
        options: RequestOptions,
    ) -> CsResult<CsResponse> {
        let url = format!("{}{resource}", self.config.endpoint.base_url);
        debug!(url = %url, method = %method, "sending ACS request");

        let headers = self
            .assembler
            .build(&method, body.as_deref(), resource, &options.headers);
        debug!(
            headers = ?headers.keys().collect::<Vec<_>>(),
            body_len = body.as_ref().map_or(0, Bytes::len),
            "assembled ACS request"
        );

        let request = build_http_request(method, &url, &headers, body)?;
        let response = self.transport.send(request, options.timeout).await?;

        debug!(
            status = response.status().as_u16(),
            headers = ?response.headers(),
            body_len = response.body().len(),
            "received ACS response"
        );

        classify(response)
    }

    /// `GET resource`.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn get(&self, resource: &str, options: RequestOptions) -> CsResult<CsResponse> {
        self.request(Method::GET, resource, None, options).await
    }

    /// `PUT resource` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn put(
        &self,
        resource: &str,
        body: impl Into<Bytes>,
        options: RequestOptions,
    ) -> CsResult<CsResponse> {
        self.request(Method::PUT, resource, Some(body.into()), options)
            .await
    }

    /// `POST resource` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn post(&self, resource: &str, body: impl Into<Bytes>) -> CsResult<CsResponse> {
        self.request(
            Method::POST,
            resource,
            Some(body.into()),
            RequestOptions::default(),
        )
        .await
    }

    /// `DELETE resource`.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn delete(&self, resource: &str) -> CsResult<CsResponse> {
        self.request(Method::DELETE, resource, None, RequestOptions::default())
            .await
    }
}

fn build_http_request(
    method: Method,
    url: &str,
    headers: &HeaderSet,
    body: Option<Bytes>,
) -> CsResult<http::Request<Option<Bytes>>> {
    let mut builder = http::Request::builder().method(method).uri(url);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .body(body)
        .map_err(|e| CsError::InvalidRequest(e.to_string()))
}
