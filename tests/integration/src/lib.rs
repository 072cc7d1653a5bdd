//! Live integration tests for RustACS.
//!
//! These tests talk to the real Container Service endpoint. They are marked
//! `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! ACCESS_KEY_ID=... ACCESS_KEY_SECRET=... REGION=cn-hangzhou \
//!     cargo test -p rustacs-integration -- --ignored
//! ```

use std::sync::Once;

use rustacs_client::CsClient;
use rustacs_core::ClientConfig;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Read a variable, falling back to a placeholder value.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Create a client from the environment, using placeholder credentials for
/// anything unset.
#[must_use]
pub fn cs_client() -> CsClient {
    init_tracing();

    let config = ClientConfig::new(
        env_or("ACCESS_KEY_ID", "accessKeyId"),
        env_or("ACCESS_KEY_SECRET", "accessKeySecret"),
        env_or("REGION", "region"),
    )
    .with_secure(true);

    CsClient::new(config).unwrap_or_else(|e| panic!("failed to build client: {e}"))
}

/// Create a client whose access key id the service does not know.
#[must_use]
pub fn unknown_key_client() -> CsClient {
    init_tracing();

    let config = ClientConfig::new("accessKeyId", "accessKeySecret", "cn-hangzhou")
        .with_secure(true);
    CsClient::new(config).unwrap_or_else(|e| panic!("failed to build client: {e}"))
}

/// Whether real credentials were supplied.
#[must_use]
pub fn has_credentials() -> bool {
    std::env::var("ACCESS_KEY_ID").is_ok() && std::env::var("ACCESS_KEY_SECRET").is_ok()
}

mod test_auth;
mod test_cluster;
