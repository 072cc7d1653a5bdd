//! Cluster read integration tests.

#[cfg(test)]
mod tests {
    use crate::{cs_client, has_credentials};

    #[tokio::test]
    #[ignore = "requires ACS credentials"]
    async fn test_should_list_clusters() {
        if !has_credentials() {
            return;
        }
        let client = cs_client();

        let response = client.list_clusters().await.unwrap();
        assert_eq!(response.code, 200);
        assert!(response.body.is_array() || response.body.is_object());
    }

    #[tokio::test]
    #[ignore = "requires ACS credentials"]
    async fn test_should_describe_listed_cluster() {
        if !has_credentials() {
            return;
        }
        let client = cs_client();

        let clusters = client.list_clusters().await.unwrap();
        let Some(cluster_id) = clusters
            .body
            .as_array()
            .and_then(|list| list.first())
            .and_then(|c| c.get("cluster_id"))
            .and_then(serde_json::Value::as_str)
        else {
            return;
        };

        let cluster = client.get_cluster(cluster_id).await.unwrap();
        assert_eq!(
            cluster.body.get("cluster_id").and_then(serde_json::Value::as_str),
            Some(cluster_id)
        );
    }
}
