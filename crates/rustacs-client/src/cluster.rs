//! Cluster endpoint operations.
//!
//! Each method is one call to a [`CsClient`] primitive with a fixed verb and
//! path template.

use bytes::Bytes;
use serde::Serialize;

use crate::client::{CsClient, RequestOptions};
use crate::error::CsResult;
use crate::model::{AttachInstancesRequest, ResetInstanceRequest, ScaleClusterRequest};
use crate::response::CsResponse;
use crate::transport::Transport;

impl<T: Transport> CsClient<T> {
    /// List the OS images available for cluster nodes.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn list_images(&self) -> CsResult<CsResponse> {
        self.get("/images", RequestOptions::default()).await
    }

    /// List clusters.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn list_clusters(&self) -> CsResult<CsResponse> {
        self.get("/clusters", RequestOptions::default()).await
    }

    /// Describe one cluster.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn get_cluster(&self, cluster_id: &str) -> CsResult<CsResponse> {
        self.get(&format!("/clusters/{cluster_id}"), RequestOptions::default())
            .await
    }

    /// Fetch the TLS certificates of a cluster.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn get_cluster_certs(&self, cluster_id: &str) -> CsResult<CsResponse> {
        self.get(
            &format!("/clusters/{cluster_id}/certs"),
            RequestOptions::default(),
        )
        .await
    }

    /// Delete a cluster.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn delete_cluster(&self, cluster_id: &str) -> CsResult<CsResponse> {
        self.delete(&format!("/clusters/{cluster_id}")).await
    }

    /// Scale a cluster to a new node count.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn scale_cluster(
        &self,
        cluster_id: &str,
        body: &ScaleClusterRequest,
    ) -> CsResult<CsResponse> {
        self.put(
            &format!("/clusters/{cluster_id}"),
            json_body(body)?,
            RequestOptions::default(),
        )
        .await
    }

    /// Attach existing ECS instances to a cluster.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn attach_instances(
        &self,
        cluster_id: &str,
        body: &AttachInstancesRequest,
    ) -> CsResult<CsResponse> {
        self.post(&format!("/clusters/{cluster_id}/attach"), json_body(body)?)
            .await
    }

    /// Remove a node from a cluster, optionally releasing the ECS instance.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn release_cluster_instance(
        &self,
        cluster_id: &str,
        ip: &str,
        release_instance: bool,
    ) -> CsResult<CsResponse> {
        self.delete(&format!(
            "/clusters/{cluster_id}/ip/{ip}?releaseInstance={release_instance}"
        ))
        .await
    }

    /// Reinstall a cluster node.
    ///
    /// # Errors
    ///
    /// See [`CsClient::request`].
    pub async fn reset_cluster_instance(
        &self,
        cluster_id: &str,
        instance_id: &str,
        body: &ResetInstanceRequest,
    ) -> CsResult<CsResponse> {
        self.post(
            &format!("/clusters/{cluster_id}/instances/{instance_id}/reset"),
            json_body(body)?,
        )
        .await
    }
}

fn json_body<B: Serialize>(body: &B) -> CsResult<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(body)?))
}
