//! Hosted log analytics plugins: Sumo Logic, Datadog, LogDNA, Logz.io
//! and New Relic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Secret};

/// Output plugin posting events to a Sumo Logic HTTP source.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SumologicOutput {
    /// The payload kind, `logs` or `metrics`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// The URL of the HTTP source.
    pub endpoint: Secret,
    /// Verify the SSL certificate of the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_ssl: Option<bool>,
    /// The log serialization, `json`, `text` or `fields`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    /// The record key emitted with the `text` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_key: Option<String>,
    /// The source category metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_category: Option<String>,
    /// The source name metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// The source host metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_host: Option<String>,
    /// Inject a timestamp into each record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_timestamp: Option<bool>,
    /// The record key carrying the injected timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_key: Option<String>,
    /// A proxy used when connecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_uri: Option<String>,
    /// Record fields promoted to Sumo Logic fields, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<String>>,
    /// The request compression, `gzip` or `deflate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress_encoding: Option<String>,
    /// Compress request bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin shipping events to Datadog.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct DatadogOutput {
    /// The API key authorizing the intake.
    pub api_key: Secret,
    /// Serialize events as JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_json: Option<bool>,
    /// Include the event tag in the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tag_key: Option<bool>,
    /// The record key carrying the event tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    /// The record key carrying the event time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_key: Option<String>,
    /// Use TLS when connecting to the intake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<bool>,
    /// Skip certificate verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_ssl_validation: Option<bool>,
    /// The TLS port of the intake, defaults to 443.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_port: Option<String>,
    /// The number of times to retry the intake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<String>,
    /// The max backoff between intake retries, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backoff: Option<String>,
    /// Use the HTTP intake instead of TCP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_http: Option<bool>,
    /// Compress HTTP request bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_compression: Option<bool>,
    /// The gzip compression level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<String>,
    /// The `source` attribute of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dd_source: Option<String>,
    /// The `sourcecategory` attribute of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dd_sourcecategory: Option<String>,
    /// The `tags` attribute of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dd_tags: Option<String>,
    /// The `hostname` attribute of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dd_hostname: Option<String>,
    /// The `service` attribute of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// A custom intake host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// A custom intake port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin shipping events to LogDNA.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct LogDnaOutput {
    /// The ingestion key authorizing the account.
    pub api_key: String,
    /// The `hostname` metadata of sent lines.
    pub hostname: String,
    /// The `app` metadata of sent lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    /// The MAC address metadata of sent lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// The IP address metadata of sent lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Tags applied to sent lines, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// The ingestion request timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    /// The ingester domain, for self hosted deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingester_domain: Option<String>,
    /// The ingester endpoint path, defaults to `/logs/ingest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingester_endpoint: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin shipping events to Logz.io.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct LogZOutput {
    /// The listener endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<LogZEndpoint>,
    /// Include the event time in sent records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_include_time: Option<bool>,
    /// Include the event tag in sent records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_include_tags: Option<bool>,
    /// Timeout before an idle connection is closed, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_idle_timeout: Option<i32>,
    /// The number of times to retry the listener.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<i32>,
    /// Wait between listener retries, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_sleep: Option<i32>,
    /// Compress request bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gzip: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// The listener endpoint of the Logz.io plugin.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct LogZEndpoint {
    /// The listener URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The listener port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The shipping token authorizing the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Secret>,
}

/// Output plugin shipping events to New Relic Logs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct NewRelicOutputConfig {
    /// The API key authorizing the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Secret>,
    /// The license key, as an alternative to the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key: Option<Secret>,
    /// The logs API endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}
