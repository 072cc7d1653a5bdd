//! Authentication failure integration tests.

#[cfg(test)]
mod tests {
    use rustacs_client::{CsError, RequestOptions};

    use crate::unknown_key_client;

    #[tokio::test]
    #[ignore = "requires network access to cs.aliyuncs.com"]
    async fn test_should_reject_unknown_access_key() {
        let client = unknown_key_client();

        let err = client.list_images().await.unwrap_err();
        let CsError::Api(api) = err else {
            panic!("expected an API error, got {err:?}");
        };
        assert_eq!(api.code, 404);
        assert_eq!(api.info, "ACS: InvalidAccessKeyId.NotFound");
    }

    #[tokio::test]
    #[ignore = "requires network access to cs.aliyuncs.com"]
    async fn test_should_reject_unknown_access_key_with_extra_headers() {
        let client = unknown_key_client();
        let options = RequestOptions::new().with_header("x-acs-caller", "rustacs-integration");

        let err = client.get("/clusters", options).await.unwrap_err();
        assert_eq!(err.as_api().map(|e| e.code), Some(404));
    }
}
