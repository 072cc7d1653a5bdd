//! Container Service endpoint resolution.

/// Domain of the Container Service API.
///
/// The service is reached through a single global domain; the configured
/// region does not select a subdomain.
pub const CS_DOMAIN: &str = "cs.aliyuncs.com";

/// Resolved endpoint of the Container Service API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Bare host name, used for the `host` header.
    pub domain: String,
    /// Protocol-qualified base URL, prefixed to every resource path.
    pub base_url: String,
}

/// Resolve the endpoint for the given transport security flag.
///
/// # Examples
///
/// ```
/// use rustacs_core::resolve_endpoint;
///
/// assert_eq!(resolve_endpoint(false).base_url, "http://cs.aliyuncs.com");
/// assert_eq!(resolve_endpoint(true).base_url, "https://cs.aliyuncs.com");
/// ```
#[must_use]
pub fn resolve_endpoint(secure: bool) -> Endpoint {
    let protocol = if secure { "https" } else { "http" };
    Endpoint {
        domain: CS_DOMAIN.to_owned(),
        base_url: format!("{protocol}://{CS_DOMAIN}"),
    }
}
