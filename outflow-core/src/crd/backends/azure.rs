//! Azure Storage output plugin.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin writing log chunks to Azure Storage.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct AzureStorage {
    /// The storage account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_storage_account: Option<Secret>,
    /// The storage account access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_storage_access_key: Option<Secret>,
    /// A SAS token, as an alternative to the access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_storage_sas_token: Option<Secret>,
    /// The name of the target container.
    pub azure_container: String,
    /// The storage type, only `blob` is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_storage_type: Option<String>,
    /// The format of the stored object keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_object_key_format: Option<String>,
    /// Create the container when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_container: Option<bool>,
    /// The path prefix of stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}
