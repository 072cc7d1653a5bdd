//! Typed request bodies for cluster operations.
//!
//! Unset optional fields are left out of the serialized JSON, so the service
//! applies its own defaults for them.

use std::fmt;

use serde::Serialize;

/// Root password of ECS instances. Redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Body of a scale-cluster (`PUT /clusters/{id}`) call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaleClusterRequest {
    /// Root password of the new ECS instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    /// Instance type, e.g. `ecs.n4.large`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Target node count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Data disk category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_disk_category: Option<String>,
    /// Data disk size in GiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_disk_size: Option<u32>,
    /// OS image of the new instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_image_id: Option<String>,
    /// Whether the instances are I/O optimized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_optimized: Option<bool>,
    /// Release the EIP once the cluster is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_eip_flag: Option<bool>,
}

/// Body of an attach-instances (`POST /clusters/{id}/attach`) call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttachInstancesRequest {
    /// Root password of the instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    /// Ids of the ECS instances to attach.
    pub instances: Vec<String>,
    /// OS image to install on the instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_image_id: Option<String>,
    /// Release the EIP once the cluster is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_eip_flag: Option<bool>,
}

/// Body of a reset-instance
/// (`POST /clusters/{id}/instances/{instance}/reset`) call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetInstanceRequest {
    /// Root password of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    /// OS image to reinstall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecs_image_id: Option<String>,
    /// Release the EIP once the cluster is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_eip_flag: Option<bool>,
}
