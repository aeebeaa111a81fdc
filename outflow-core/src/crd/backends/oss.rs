//! Alibaba Object Storage Service output plugin.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin writing log chunks to an OSS bucket.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct OssOutput {
    /// The OSS endpoint, region specific.
    pub endpoint: String,
    /// The name of the target bucket.
    pub bucket: String,
    /// The access key id authorizing the bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<Secret>,
    /// The access key secret authorizing the bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_secret: Option<Secret>,
    /// The path prefix of stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The format of the stored object keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_format: Option<String>,
    /// The archive format of stored objects, such as `gzip` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_as: Option<String>,
    /// Create the bucket when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_bucket: Option<bool>,
    /// Overwrite objects which already exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Verify the bucket exists at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_bucket: Option<bool>,
    /// Verify object keys are unique before writing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_object: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}
