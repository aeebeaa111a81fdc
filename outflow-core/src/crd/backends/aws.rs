//! AWS output plugins: S3, CloudWatch Logs, Kinesis, SQS and the
//! Amazon Elasticsearch Service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin writing log chunks to an S3 bucket.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct S3OutputConfig {
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key_id: Option<Secret>,
    /// AWS secret key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sec_key: Option<Secret>,
    /// The name of the target S3 bucket.
    pub s3_bucket: String,
    /// The AWS region of the bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_region: Option<String>,
    /// A custom endpoint, for S3 compatible services such as MinIO.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_endpoint: Option<String>,
    /// The format of the stored object keys.
    ///
    /// Defaults to `%{path}%{time_slice}_%{index}.%{file_extension}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_object_key_format: Option<String>,
    /// The archive format of stored objects, such as `gzip` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_as: Option<String>,
    /// The path prefix of stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Use path style access instead of virtual hosted style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_path_style: Option<bool>,
    /// A proxy used when accessing S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_uri: Option<String>,
    /// Verify the SSL certificate of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_verify_peer: Option<bool>,
    /// The server side encryption algorithm, such as `aws:kms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_server_side_encryption: Option<String>,
    /// The canned ACL applied to stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    /// Overwrite objects which already exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Assume an IAM role for bucket access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_credentials: Option<S3AssumeRoleCredentials>,
    /// Acquire credentials from the EC2 instance profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_profile_credentials: Option<InstanceProfileCredentials>,
    /// Acquire credentials from a shared credentials file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_credentials: Option<SharedCredentials>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// STS assume role credentials for S3.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct S3AssumeRoleCredentials {
    /// The ARN of the role to assume.
    pub role_arn: String,
    /// An identifier for the assumed role session.
    pub role_session_name: String,
    /// An IAM policy in JSON format further restricting the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    /// The duration of the session in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<String>,
    /// A unique identifier used by third parties when assuming roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// EC2 instance profile credentials.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct InstanceProfileCredentials {
    /// The metadata service address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// The metadata service port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Timeout opening the metadata connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_open_timeout: Option<String>,
    /// Timeout reading from the metadata connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_read_timeout: Option<String>,
    /// The number of times to retry the metadata service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<String>,
}

/// Credentials read from a shared AWS credentials file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SharedCredentials {
    /// The profile name within the credentials file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// The path of the credentials file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Output plugin shipping events to CloudWatch Logs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct CloudWatchOutput {
    /// Create the log group and stream when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_stream: Option<bool>,
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key_id: Option<Secret>,
    /// AWS secret key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sec_key: Option<Secret>,
    /// The number of times to retry instance profile credential fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_instance_profile_credentials_retries: Option<i32>,
    /// Acquire credentials via STS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_use_sts: Option<bool>,
    /// The ARN of the role assumed via STS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sts_role_arn: Option<String>,
    /// The session name used when assuming a role via STS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sts_session_name: Option<String>,
    /// The number of parallel upload threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,
    /// A custom CloudWatch endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Include the event time in the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_time_key: Option<bool>,
    /// The JSON library used for serialization, `json` or `yajl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_handler: Option<String>,
    /// Use the local timezone for `include_time_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localtime: Option<bool>,
    /// Tags applied to created log groups, `key=value` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_aws_tags: Option<String>,
    /// The record key carrying log group tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_aws_tags_key: Option<String>,
    /// The name of the target log group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    /// The record key carrying the target log group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name_key: Option<String>,
    /// Log rejected PutLogEvents requests at this level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rejected_request: Option<String>,
    /// The name of the target log stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    /// The record key carrying the target log stream name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name_key: Option<String>,
    /// The max number of events per PutLogEvents batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_events_per_batch: Option<i32>,
    /// The max length of a single event message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_message_length: Option<i32>,
    /// Only emit these record keys, space separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_keys: Option<String>,
    /// Retry throttled PutLogEvents requests indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_log_events_disable_retry_limit: Option<bool>,
    /// The max number of retries for throttled PutLogEvents requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_log_events_retry_limit: Option<i32>,
    /// The base wait time between PutLogEvents retries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_log_events_retry_wait: Option<String>,
    /// The AWS region.
    pub region: String,
    /// The record key removed after resolving log group tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_log_group_aws_tags_key: Option<String>,
    /// The record key removed after resolving the log group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_log_group_name_key: Option<String>,
    /// The record key removed after resolving the log stream name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_log_stream_name_key: Option<String>,
    /// The record key removed after resolving the retention setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_retention_in_days: Option<String>,
    /// The retention of created log groups in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<String>,
    /// The record key carrying the retention setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days_key: Option<String>,
    /// Use the event tag as the log group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tag_as_group: Option<bool>,
    /// Use the event tag as the log stream name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tag_as_stream: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Output plugin putting records onto a Kinesis data stream.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct KinesisStreamOutputConfig {
    /// The name of the target data stream.
    pub stream_name: String,
    /// The record key used as the partition key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key_id: Option<Secret>,
    /// AWS secret key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sec_key: Option<Secret>,
    /// AWS session token for temporary credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_ses_token: Option<Secret>,
    /// The number of times to retry instance profile credential fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_iam_retries: Option<i32>,
    /// Assume an IAM role for stream access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_credentials: Option<KinesisAssumeRoleCredentials>,
    /// The AWS region of the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// The number of times to retry a failed PutRecords batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries_on_batch_request: Option<i32>,
    /// Reset the retry backoff when a batch eventually succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_backoff_if_success: Option<bool>,
    /// The max number of records per PutRecords batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_request_max_count: Option<i32>,
    /// The max payload size per PutRecords batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_request_max_size: Option<i32>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// STS assume role credentials for the Kinesis plugins.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct KinesisAssumeRoleCredentials {
    /// The ARN of the role to assume.
    pub role_arn: String,
    /// An identifier for the assumed role session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_session_name: Option<String>,
}

/// Output plugin putting records onto a Kinesis Firehose delivery stream.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct KinesisFirehoseOutputConfig {
    /// The name of the target delivery stream.
    pub delivery_stream_name: String,
    /// Append a newline to each record, for line-delimited destinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_new_line: Option<bool>,
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key_id: Option<Secret>,
    /// AWS secret key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sec_key: Option<Secret>,
    /// AWS session token for temporary credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_ses_token: Option<Secret>,
    /// Assume an IAM role for stream access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_credentials: Option<KinesisAssumeRoleCredentials>,
    /// The AWS region of the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// The number of times to retry a failed PutRecordBatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries_on_batch_request: Option<i32>,
    /// Reset the retry backoff when a batch eventually succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_backoff_if_success: Option<bool>,
    /// The max number of records per PutRecordBatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_request_max_count: Option<i32>,
    /// The max payload size per PutRecordBatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_request_max_size: Option<i32>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Output plugin delivering events to an SQS queue.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SqsOutputConfig {
    /// The URL of the target queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqs_url: Option<String>,
    /// The name of the target queue, resolved against the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key_id: Option<Secret>,
    /// AWS secret key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_sec_key: Option<Secret>,
    /// Create the queue when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_queue: Option<bool>,
    /// The AWS region of the queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// The message group id for FIFO queues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_group_id: Option<String>,
    /// The delivery delay of sent messages in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<i32>,
    /// Include the event tag in the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tag: Option<bool>,
    /// The record key carrying the event tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin indexing into the Amazon Elasticsearch Service with
/// request signing.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct AwsElasticsearchOutputConfig {
    /// The signed service endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<AwsEndpointCredentials>,
    /// Flush interval overriding the buffer section shorthand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_interval: Option<String>,
    /// The name of the target index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Derive the index name from the logstash convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_format: Option<bool>,
    /// The index name prefix used with `logstash_format`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_prefix: Option<String>,
    /// Include the event timestamp in the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_timestamp: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Signed endpoint credentials for the Amazon Elasticsearch Service.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct AwsEndpointCredentials {
    /// The endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The AWS region used for request signing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// AWS access key id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<Secret>,
    /// AWS secret access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<Secret>,
    /// The ARN of a role assumed before signing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_arn: Option<String>,
}
