//! Client configuration.
//!
//! A [`ClientConfig`] holds the raw construction parameters. Nothing is
//! checked until [`ClientConfig::resolve`] turns it into a
//! [`ResolvedConfig`], which is what the client actually runs with.

use std::fmt;

use crate::endpoint::{Endpoint, resolve_endpoint};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{Credentials, RegionId};

/// Raw construction parameters for an ACS client.
#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Access key id.
    #[serde(default)]
    pub access_key_id: Option<String>,
    /// Access key secret.
    #[serde(default, skip_serializing)]
    pub access_key_secret: Option<String>,
    /// Region id, sent as `x-acs-region-id`.
    #[serde(default)]
    pub region: Option<String>,
    /// Use `https` instead of `http`.
    #[serde(default)]
    pub secure: bool,
}

impl ClientConfig {
    /// Create a configuration with all required fields set and `secure` off.
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: Some(access_key_id.into()),
            access_key_secret: Some(access_key_secret.into()),
            region: Some(region.into()),
            secure: false,
        }
    }

    /// Toggle `https`.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `ACCESS_KEY_ID` | `access_key_id` |
    /// | `ACCESS_KEY_SECRET` | `access_key_secret` |
    /// | `REGION` | `region` |
    /// | `SECURE` | `secure` (`1` or `true`) |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            access_key_id: lookup("ACCESS_KEY_ID"),
            access_key_secret: lookup("ACCESS_KEY_SECRET"),
            region: lookup("REGION"),
            ..Self::default()
        };

        if let Some(v) = lookup("SECURE") {
            config.secure = v == "1" || v.eq_ignore_ascii_case("true");
        }

        config
    }

    /// Check required fields in order and derive the endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first missing or empty field,
    /// checked as access key id, access key secret, then region.
    pub fn resolve(self) -> ConfigResult<ResolvedConfig> {
        let access_key_id = non_empty(self.access_key_id).ok_or(ConfigError::MissingAccessKeyId)?;
        let access_key_secret =
            non_empty(self.access_key_secret).ok_or(ConfigError::MissingAccessKeySecret)?;
        let region = non_empty(self.region).ok_or(ConfigError::MissingRegion)?;

        let endpoint = resolve_endpoint(self.secure);
        tracing::debug!(
            access_key_id = %access_key_id,
            region = %region,
            base_url = %endpoint.base_url,
            "resolved ACS client configuration"
        );

        Ok(ResolvedConfig {
            credentials: Credentials::new(access_key_id, access_key_secret),
            region: RegionId::new(region),
            endpoint,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "access_key_secret",
                &self.access_key_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .field("secure", &self.secure)
            .finish()
    }
}

/// Validated configuration, fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Access key pair.
    pub credentials: Credentials,
    /// Region id.
    pub region: RegionId,
    /// Resolved endpoint.
    pub endpoint: Endpoint,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
