//! Output CRD.
//!
//! The code here is used to generate the actual CRD used in K8s. See examples/crd.rs.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::backends::{
    AwsElasticsearchOutputConfig, AzureStorage, CloudWatchOutput, DatadogOutput,
    ElasticsearchOutput, FileOutputConfig, ForwardOutput, GcsOutput, GelfOutputConfig,
    HttpOutputConfig, KafkaOutputConfig, KinesisFirehoseOutputConfig, KinesisStreamOutputConfig,
    LogDnaOutput, LogZOutput, LokiOutput, NewRelicOutputConfig, NullOutputConfig,
    OpenSearchOutput, OssOutput, RedisOutputConfig, S3OutputConfig, SplunkHecOutput,
    SqsOutputConfig, SumologicOutput, SyslogOutputConfig,
};
use crate::crd::common::Secret;

pub type Output = OutputCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the Output resource.
///
/// An Output names a single log destination within its own namespace.
/// Exactly one backend block must be configured per Output.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "OutputCRD",
    status = "OutputStatus",
    group = "logging.banzaicloud.io",
    version = "v1alpha1",
    kind = "Output",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "output",
    printcolumn = r#"{"name":"Active","type":"boolean","jsonPath":".status.active"}"#,
    printcolumn = r#"{"name":"Problems","type":"integer","jsonPath":".status.problemsCount"}"#
)]
pub struct OutputSpec {
    /// The logging deployment this output belongs to.
    #[serde(rename = "loggingRef", default, skip_serializing_if = "Option::is_none")]
    pub logging_ref: Option<String>,
    /// S3 backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3OutputConfig>,
    /// Google Cloud Storage backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs: Option<GcsOutput>,
    /// Azure Storage backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azurestorage: Option<AzureStorage>,
    /// Alibaba OSS backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss: Option<OssOutput>,
    /// Elasticsearch backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elasticsearch: Option<ElasticsearchOutput>,
    /// OpenSearch backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opensearch: Option<OpenSearchOutput>,
    /// Amazon Elasticsearch Service backend.
    #[serde(rename = "awsElasticsearch", default, skip_serializing_if = "Option::is_none")]
    pub aws_elasticsearch: Option<AwsElasticsearchOutputConfig>,
    /// Kafka backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka: Option<KafkaOutputConfig>,
    /// CloudWatch Logs backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudwatch: Option<CloudWatchOutput>,
    /// Kinesis data stream backend.
    #[serde(rename = "kinesisStream", default, skip_serializing_if = "Option::is_none")]
    pub kinesis_stream: Option<KinesisStreamOutputConfig>,
    /// Kinesis Firehose backend.
    #[serde(rename = "kinesisFirehose", default, skip_serializing_if = "Option::is_none")]
    pub kinesis_firehose: Option<KinesisFirehoseOutputConfig>,
    /// SQS backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqs: Option<SqsOutputConfig>,
    /// Grafana Loki backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loki: Option<LokiOutput>,
    /// Splunk HEC backend.
    #[serde(rename = "splunkHec", default, skip_serializing_if = "Option::is_none")]
    pub splunk_hec: Option<SplunkHecOutput>,
    /// Sumo Logic backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sumologic: Option<SumologicOutput>,
    /// Datadog backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<DatadogOutput>,
    /// LogDNA backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logdna: Option<LogDnaOutput>,
    /// Logz.io backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logz: Option<LogZOutput>,
    /// New Relic Logs backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newrelic: Option<NewRelicOutputConfig>,
    /// Fluentd forward backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<ForwardOutput>,
    /// Syslog backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog: Option<SyslogOutputConfig>,
    /// HTTP backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpOutputConfig>,
    /// Redis backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisOutputConfig>,
    /// Graylog GELF backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gelf: Option<GelfOutputConfig>,
    /// Local file backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileOutputConfig>,
    /// Null backend, discarding all events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullout: Option<NullOutputConfig>,
}

impl OutputSpec {
    /// The names of all backend blocks configured on this spec.
    pub fn active_backends(&self) -> Vec<&'static str> {
        let mut active = Vec::new();
        if self.s3.is_some() {
            active.push("s3");
        }
        if self.gcs.is_some() {
            active.push("gcs");
        }
        if self.azurestorage.is_some() {
            active.push("azurestorage");
        }
        if self.oss.is_some() {
            active.push("oss");
        }
        if self.elasticsearch.is_some() {
            active.push("elasticsearch");
        }
        if self.opensearch.is_some() {
            active.push("opensearch");
        }
        if self.aws_elasticsearch.is_some() {
            active.push("awsElasticsearch");
        }
        if self.kafka.is_some() {
            active.push("kafka");
        }
        if self.cloudwatch.is_some() {
            active.push("cloudwatch");
        }
        if self.kinesis_stream.is_some() {
            active.push("kinesisStream");
        }
        if self.kinesis_firehose.is_some() {
            active.push("kinesisFirehose");
        }
        if self.sqs.is_some() {
            active.push("sqs");
        }
        if self.loki.is_some() {
            active.push("loki");
        }
        if self.splunk_hec.is_some() {
            active.push("splunkHec");
        }
        if self.sumologic.is_some() {
            active.push("sumologic");
        }
        if self.datadog.is_some() {
            active.push("datadog");
        }
        if self.logdna.is_some() {
            active.push("logdna");
        }
        if self.logz.is_some() {
            active.push("logz");
        }
        if self.newrelic.is_some() {
            active.push("newrelic");
        }
        if self.forward.is_some() {
            active.push("forward");
        }
        if self.syslog.is_some() {
            active.push("syslog");
        }
        if self.http.is_some() {
            active.push("http");
        }
        if self.redis.is_some() {
            active.push("redis");
        }
        if self.gelf.is_some() {
            active.push("gelf");
        }
        if self.file.is_some() {
            active.push("file");
        }
        if self.nullout.is_some() {
            active.push("nullout");
        }
        active
    }

    /// The secrets configured on this spec, paired with the dotted config
    /// path of each.
    pub fn secrets(&self) -> Vec<(String, &Secret)> {
        let mut secrets = Vec::new();
        if let Some(s3) = &self.s3 {
            push_secret(&mut secrets, "s3.aws_key_id", &s3.aws_key_id);
            push_secret(&mut secrets, "s3.aws_sec_key", &s3.aws_sec_key);
        }
        if let Some(es) = &self.elasticsearch {
            push_secret(&mut secrets, "elasticsearch.password", &es.password);
            push_secret(&mut secrets, "elasticsearch.ca_file", &es.ca_file);
            push_secret(&mut secrets, "elasticsearch.client_cert", &es.client_cert);
            push_secret(&mut secrets, "elasticsearch.client_key", &es.client_key);
            push_secret(&mut secrets, "elasticsearch.client_key_pass", &es.client_key_pass);
            push_secret(&mut secrets, "elasticsearch.template_file", &es.template_file);
        }
        if let Some(os) = &self.opensearch {
            push_secret(&mut secrets, "opensearch.password", &os.password);
            push_secret(&mut secrets, "opensearch.ca_file", &os.ca_file);
        }
        if let Some(kafka) = &self.kafka {
            push_secret(&mut secrets, "kafka.keytab", &kafka.keytab);
            push_secret(&mut secrets, "kafka.username", &kafka.username);
            push_secret(&mut secrets, "kafka.password", &kafka.password);
            push_secret(&mut secrets, "kafka.ssl_ca_cert", &kafka.ssl_ca_cert);
            push_secret(&mut secrets, "kafka.ssl_client_cert", &kafka.ssl_client_cert);
            push_secret(&mut secrets, "kafka.ssl_client_cert_key", &kafka.ssl_client_cert_key);
        }
        if let Some(cw) = &self.cloudwatch {
            push_secret(&mut secrets, "cloudwatch.aws_key_id", &cw.aws_key_id);
            push_secret(&mut secrets, "cloudwatch.aws_sec_key", &cw.aws_sec_key);
        }
        if let Some(ks) = &self.kinesis_stream {
            push_secret(&mut secrets, "kinesisStream.aws_key_id", &ks.aws_key_id);
            push_secret(&mut secrets, "kinesisStream.aws_sec_key", &ks.aws_sec_key);
            push_secret(&mut secrets, "kinesisStream.aws_ses_token", &ks.aws_ses_token);
        }
        if let Some(kf) = &self.kinesis_firehose {
            push_secret(&mut secrets, "kinesisFirehose.aws_key_id", &kf.aws_key_id);
            push_secret(&mut secrets, "kinesisFirehose.aws_sec_key", &kf.aws_sec_key);
            push_secret(&mut secrets, "kinesisFirehose.aws_ses_token", &kf.aws_ses_token);
        }
        if let Some(sqs) = &self.sqs {
            push_secret(&mut secrets, "sqs.aws_key_id", &sqs.aws_key_id);
            push_secret(&mut secrets, "sqs.aws_sec_key", &sqs.aws_sec_key);
        }
        if let Some(loki) = &self.loki {
            push_secret(&mut secrets, "loki.username", &loki.username);
            push_secret(&mut secrets, "loki.password", &loki.password);
            push_secret(&mut secrets, "loki.ca_cert", &loki.ca_cert);
            push_secret(&mut secrets, "loki.cert", &loki.cert);
            push_secret(&mut secrets, "loki.key", &loki.key);
        }
        if let Some(hec) = &self.splunk_hec {
            secrets.push(("splunkHec.hec_token".to_string(), &hec.hec_token));
            push_secret(&mut secrets, "splunkHec.client_cert", &hec.client_cert);
            push_secret(&mut secrets, "splunkHec.client_key", &hec.client_key);
            push_secret(&mut secrets, "splunkHec.ca_file", &hec.ca_file);
        }
        if let Some(sumo) = &self.sumologic {
            secrets.push(("sumologic.endpoint".to_string(), &sumo.endpoint));
        }
        if let Some(dd) = &self.datadog {
            secrets.push(("datadog.api_key".to_string(), &dd.api_key));
        }
        if let Some(logz) = &self.logz {
            if let Some(endpoint) = &logz.endpoint {
                push_secret(&mut secrets, "logz.endpoint.token", &endpoint.token);
            }
        }
        if let Some(nr) = &self.newrelic {
            push_secret(&mut secrets, "newrelic.api_key", &nr.api_key);
            push_secret(&mut secrets, "newrelic.license_key", &nr.license_key);
        }
        if let Some(fwd) = &self.forward {
            for (idx, server) in fwd.servers.iter().enumerate() {
                push_secret(&mut secrets, &format!("forward.servers.{}.shared_key", idx), &server.shared_key);
                push_secret(&mut secrets, &format!("forward.servers.{}.username", idx), &server.username);
                push_secret(&mut secrets, &format!("forward.servers.{}.password", idx), &server.password);
            }
        }
        if let Some(http) = &self.http {
            if let Some(auth) = &http.auth {
                push_secret(&mut secrets, "http.auth.username", &auth.username);
                push_secret(&mut secrets, "http.auth.password", &auth.password);
            }
        }
        if let Some(redis) = &self.redis {
            push_secret(&mut secrets, "redis.password", &redis.password);
        }
        secrets
    }
}

fn push_secret<'a>(acc: &mut Vec<(String, &'a Secret)>, path: &str, secret: &'a Option<Secret>) {
    if let Some(secret) = secret {
        acc.push((path.to_string(), secret));
    }
}

/// CRD status object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct OutputStatus {
    /// Whether the output is accepted and active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Problems found during reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<Vec<String>>,
    /// The number of problems found during reconciliation.
    #[serde(rename = "problemsCount", default)]
    pub problems_count: i32,
}
