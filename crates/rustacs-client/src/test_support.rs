//! In-process transport and client fixtures for unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use rustacs_core::ClientConfig;

use crate::client::CsClient;
use crate::error::TransportError;
use crate::headers::{FixedClock, FixedNonce};
use crate::transport::{Transport, TransportFuture};

/// A request as seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: http::Method,
    pub uri: String,
    pub headers: http::HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

/// Replies with a canned status and body and records every request.
#[derive(Debug, Clone)]
pub(crate) struct RecordingTransport {
    status: u16,
    body: &'static str,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingTransport {
    pub(crate) fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            recorded: Arc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn send(
        &self,
        request: http::Request<Option<Bytes>>,
        timeout: Option<Duration>,
    ) -> TransportFuture<'_> {
        let (parts, body) = request.into_parts();
        self.recorded.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
            timeout,
        });

        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .header("x-acs-request-id", "req-1")
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap();
        Box::pin(async move { Ok(response) })
    }
}

/// Always fails with a connection error.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingTransport;

impl Transport for FailingTransport {
    fn send(
        &self,
        _request: http::Request<Option<Bytes>>,
        _timeout: Option<Duration>,
    ) -> TransportFuture<'_> {
        Box::pin(async move {
            Err(TransportError::Connect(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused").into(),
            ))
        })
    }
}

/// A client over `transport` with a frozen clock and nonce.
pub(crate) fn test_client<T: Transport>(transport: T) -> CsClient<T> {
    let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    CsClient::with_transport(
        ClientConfig::new("accessKeyId", "accessKeySecret", "cn-hangzhou"),
        transport,
    )
    .unwrap()
    .with_clock(Arc::new(FixedClock(instant)))
    .with_nonce_source(Arc::new(FixedNonce("42".to_owned())))
}
