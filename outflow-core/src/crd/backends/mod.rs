//! Output backend plugin configs.
//!
//! One struct per fluentd output plugin supported by the logging operator.
//! Field names are the exact fluentd parameter names, so no serde renames
//! appear here unless the operator itself deviates from the plugin.

mod aws;
mod azure;
mod elasticsearch;
mod file;
mod gcs;
mod kafka;
mod loki;
mod network;
mod oss;
mod saas;
mod splunk;

pub use aws::{
    AwsElasticsearchOutputConfig, AwsEndpointCredentials, CloudWatchOutput,
    InstanceProfileCredentials, KinesisAssumeRoleCredentials, KinesisFirehoseOutputConfig,
    KinesisStreamOutputConfig, S3AssumeRoleCredentials, S3OutputConfig, SharedCredentials,
    SqsOutputConfig,
};
pub use azure::AzureStorage;
pub use elasticsearch::{ElasticsearchOutput, OpenSearchOutput};
pub use file::{FileOutputConfig, NullOutputConfig};
pub use gcs::GcsOutput;
pub use kafka::KafkaOutputConfig;
pub use loki::LokiOutput;
pub use network::{
    FluentdServer, ForwardOutput, GelfOutputConfig, HttpAuth, HttpOutputConfig, RedisOutputConfig,
    SyslogOutputConfig,
};
pub use oss::OssOutput;
pub use saas::{
    DatadogOutput, LogDnaOutput, LogZEndpoint, LogZOutput, NewRelicOutputConfig, SumologicOutput,
};
pub use splunk::SplunkHecOutput;
