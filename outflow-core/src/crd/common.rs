//! Plugin sections shared by every output backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A plugin field which carries a credential.
///
/// The value may be given inline, or as a reference to a key of a Kubernetes
/// Secret. Referenced values are resolved by the logging operator at runtime,
/// never by this code, so they pass through to the rendered manifest verbatim.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Secret {
    /// An inline literal value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// A reference resolved into the plugin config as a plain value.
    #[serde(rename = "valueFrom", default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ValueFrom>,
    /// A reference mounted into the fluentd container as a file, the plugin
    /// config receiving the mount path.
    #[serde(rename = "mountFrom", default, skip_serializing_if = "Option::is_none")]
    pub mount_from: Option<ValueFrom>,
}

impl Secret {
    /// Check if this secret carries more than one source for its value.
    pub fn is_ambiguous(&self) -> bool {
        let mut sources = 0;
        sources += self.value.is_some() as u8;
        sources += self.value_from.is_some() as u8;
        sources += self.mount_from.is_some() as u8;
        sources > 1
    }
}

/// The source of a referenced secret value.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ValueFrom {
    /// A reference to a key of a Kubernetes Secret.
    #[serde(rename = "secretKeyRef", default, skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<SecretKeyRef>,
}

/// A reference to a single key of a Kubernetes Secret.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SecretKeyRef {
    /// The name of the referenced Secret.
    pub name: String,
    /// The key within the referenced Secret.
    pub key: String,
    /// Whether the Secret or its key must exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// Fluentd buffer section, common to all buffered output plugins.
///
/// All size and time fields are passed through as fluentd literals
/// (`256m`, `10s`, etc.) without interpretation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Buffer {
    /// The buffering plugin type, `file` or `memory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Chunk keys controlling how events are split into chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// The path where buffer chunks are stored for the `file` type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The max size of each chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_limit_size: Option<String>,
    /// The max number of events that each chunk can store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_limit_records: Option<i32>,
    /// The percentage of chunk size threshold for flushing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_full_threshold: Option<String>,
    /// The max length of the chunk queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_limit_length: Option<i32>,
    /// The max number of queued chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queued_chunks_limit_size: Option<i32>,
    /// The size limit of this buffer plugin instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_limit_size: Option<String>,
    /// Compression scheme applied to buffered data, `text` or `gzip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    /// Flush all buffered chunks on shutdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_at_shutdown: Option<bool>,
    /// Flush mode, one of `default`, `lazy`, `interval` or `immediate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_mode: Option<String>,
    /// Flush interval for the `interval` mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_interval: Option<String>,
    /// The number of threads flushing chunks in parallel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_thread_count: Option<i32>,
    /// The sleep interval of flush threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_thread_interval: Option<String>,
    /// The sleep interval of flush threads between flushes when the last
    /// flush wrote data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_thread_burst_interval: Option<String>,
    /// Timeout waiting for delayed commits of async writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_commit_timeout: Option<String>,
    /// Behavior when the buffer queue is full, one of `throw_exception`,
    /// `block` or `drop_oldest_chunk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow_action: Option<String>,
    /// The max time to retry failed chunk flushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_timeout: Option<String>,
    /// Never give up retrying failed chunk flushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_forever: Option<bool>,
    /// The max number of times to retry failed chunk flushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_max_times: Option<i32>,
    /// The ratio of `retry_timeout` after which the secondary output
    /// starts receiving chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_secondary_threshold: Option<String>,
    /// Retry strategy, `exponential_backoff` or `periodic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_type: Option<String>,
    /// Wait time before the next retry, or the base for exponential backoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_wait: Option<String>,
    /// The base number of the exponential backoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_exponential_backoff_base: Option<String>,
    /// The max wait interval between retries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_max_interval: Option<String>,
    /// Randomize retry wait intervals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_randomize: Option<bool>,
    /// Do not back up irrecoverable chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_chunk_backup: Option<bool>,
    /// Time slice unit used when chunking by time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey: Option<String>,
    /// How long to wait for late events before flushing a time slice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey_wait: Option<String>,
    /// Use UTC when formatting time slice keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey_use_utc: Option<bool>,
    /// Timezone offset used when formatting time slice keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey_zone: Option<String>,
}

/// Fluentd format section controlling how events are serialized.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Format {
    /// The formatter plugin type, one of `json`, `ltsv`, `csv`, `msgpack`,
    /// `out_file` or `single_value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Append a newline to each serialized event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_newline: Option<bool>,
    /// The field emitted by the `single_value` formatter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
}
