//! Kafka output plugin.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin producing events onto a Kafka topic.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct KafkaOutputConfig {
    /// A comma separated list of seed brokers, `host:port` pairs.
    pub brokers: String,
    /// The record key carrying the target topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_key: Option<String>,
    /// The topic used when the record carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_topic: Option<String>,
    /// The partitioner hash base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    /// The record key carrying the partition key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key_key: Option<String>,
    /// The partition key used when the record carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_partition_key: Option<String>,
    /// The record key carrying the message key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_key_key: Option<String>,
    /// The message key used when the record carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message_key: Option<String>,
    /// Drop the topic key from the produced record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_topic_key: Option<bool>,
    /// Drop the partition key from the produced record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_partition_key: Option<bool>,
    /// Route records with unknown topics to `default_topic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_default_for_unknown_topic: Option<bool>,
    /// Surface the ruby-kafka client log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_kafka_client_log: Option<bool>,
    /// Static headers attached to each produced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Headers resolved from record fields, header name to record key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers_from_record: Option<BTreeMap<String, String>>,
    /// Produce with idempotence enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotent: Option<bool>,
    /// Use SASL over an SSL connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sasl_over_ssl: Option<bool>,
    /// The Kerberos principal for GSSAPI auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    /// The keytab of the Kerberos principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keytab: Option<Secret>,
    /// The username for SASL PLAIN or SCRAM auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Secret>,
    /// The password for SASL PLAIN or SCRAM auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// The SCRAM mechanism, `sha256` or `sha512`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scram_mechanism: Option<String>,
    /// The number of times to retry a failed produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_send_retries: Option<i32>,
    /// The number of broker acks required per produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_acks: Option<i32>,
    /// Timeout waiting for broker acks, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_timeout: Option<i32>,
    /// The compression codec, such as `gzip` or `snappy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_codec: Option<String>,
    /// The max aggregate size of batched messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka_agg_max_bytes: Option<i32>,
    /// The max number of batched messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka_agg_max_messages: Option<i32>,
    /// The CA certificate validating the brokers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_ca_cert: Option<Secret>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_client_cert: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_client_cert_key: Option<Secret>,
    /// Trust the system CA store in addition to `ssl_ca_cert`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_ca_certs_from_system: Option<bool>,
    /// Verify the hostname of the brokers against their certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_verify_hostname: Option<bool>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}
