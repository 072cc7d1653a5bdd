//! Error types for RustACS configuration.

/// Errors raised while validating a [`crate::ClientConfig`].
///
/// Validation checks fields in a fixed order (access key id, access key
/// secret, region), so the first missing field is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No access key id was supplied, or it was empty.
    #[error("must pass in \"accessKeyId\"")]
    MissingAccessKeyId,

    /// No access key secret was supplied, or it was empty.
    #[error("must pass in \"accessKeySecret\"")]
    MissingAccessKeySecret,

    /// No region was supplied, or it was empty.
    #[error("must pass in \"region\"")]
    MissingRegion,
}

/// Convenience result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
