//! Google Cloud Storage output plugin.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin writing log chunks to a GCS bucket.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct GcsOutput {
    /// The GCP project owning the bucket.
    pub project: String,
    /// The name of the target bucket.
    pub bucket: String,
    /// Service account credentials in JSON format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_json: Option<Secret>,
    /// The path of a service account keyfile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,
    /// The number of times to retry API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_retries: Option<i32>,
    /// Timeout of API calls in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<i32>,
    /// The format of the stored object keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_key_format: Option<String>,
    /// The path prefix of stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The archive format of stored objects, such as `gzip` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_as: Option<String>,
    /// Enable decompressive transcoding on stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcoding: Option<bool>,
    /// The storage class of stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
    /// The predefined ACL applied to stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    /// Create the bucket when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_bucket: Option<bool>,
    /// The length of the `%{hex_random}` object key placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_random_length: Option<i32>,
    /// Overwrite objects which already exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}
