//! Network delivery plugins: fluentd forward, syslog, HTTP, Redis and GELF.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin forwarding events to other fluentd nodes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ForwardOutput {
    /// The downstream fluentd nodes.
    pub servers: Vec<FluentdServer>,
    /// Require ack responses for at-least-once delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ack_response: Option<bool>,
    /// Timeout waiting for an ack response, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_response_timeout: Option<i32>,
    /// Timeout sending data, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_timeout: Option<i32>,
    /// Timeout opening a connection, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i32>,
    /// Wait before retrying a failed node, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recover_wait: Option<i32>,
    /// The heartbeat transport, `transport`, `tcp`, `udp` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heartbeat_type: Option<String>,
    /// The heartbeat interval, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval: Option<i32>,
    /// Use the phi accrual failure detector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi_failure_detector: Option<bool>,
    /// The phi threshold detecting node failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi_threshold: Option<i32>,
    /// Hard timeout detecting unreachable nodes, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_timeout: Option<i32>,
    /// The lifetime of cached DNS answers, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_dns_cache: Option<i32>,
    /// Rotate through all resolved addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_round_robin: Option<bool>,
    /// Tolerate unresolvable nodes at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_network_errors_at_startup: Option<bool>,
    /// The TLS protocol version, such as `TLSv1_2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_version: Option<String>,
    /// The allowed TLS cipher list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ciphers: Option<String>,
    /// Skip all TLS verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_insecure_mode: Option<bool>,
    /// Allow self signed node certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_allow_self_signed_cert: Option<bool>,
    /// Verify node hostnames against their certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_verify_hostname: Option<bool>,
    /// The CA certificate validating the nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_cert_path: Option<Secret>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_cert_path: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_private_key_path: Option<Secret>,
    /// The passphrase of the client private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_private_key_passphrase: Option<Secret>,
    /// Keep connections open between flushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<bool>,
    /// Timeout closing idle kept-alive connections, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive_timeout: Option<i32>,
    /// Verify every node is reachable at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_connection_at_startup: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// A downstream node of the forward plugin.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct FluentdServer {
    /// The hostname or address of the node.
    pub host: String,
    /// A display name used in logs and heartbeats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The forward port of the node, defaults to 24224.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The shared key authenticating this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_key: Option<Secret>,
    /// The username when the node requires authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Secret>,
    /// The password when the node requires authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// Mark this node as standby, used only on primary failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby: Option<bool>,
    /// The load balancing weight of the node, defaults to 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

/// Output plugin emitting events to a remote syslog collector.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SyslogOutputConfig {
    /// The hostname or address of the collector.
    pub host: String,
    /// The port of the collector, defaults to 514.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The transport, `udp`, `tcp` or `tls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    /// Skip certificate verification for the `tls` transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    /// The CA certificate validating the collector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_ca_path: Option<Secret>,
    /// The max size of a UDP datagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_size: Option<i32>,
    /// The APP-NAME part of emitted messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// The HOSTNAME part of emitted messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// The severity of emitted messages, defaults to `notice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// The facility of emitted messages, defaults to `user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Output plugin posting events to an HTTP endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct HttpOutputConfig {
    /// The endpoint URL receiving events.
    pub endpoint: String,
    /// The HTTP method, `post` or `put`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// A proxy used when connecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// The Content-Type of requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Send each chunk as a JSON array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_array: Option<bool>,
    /// Additional request headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Timeout opening a connection, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_timeout: Option<i32>,
    /// Timeout reading a response, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<i32>,
    /// Timeout of the TLS handshake, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_timeout: Option<i32>,
    /// The CA certificate validating the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert_path: Option<Secret>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_cert_path: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_private_key_path: Option<Secret>,
    /// The passphrase of the client private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_private_key_passphrase: Option<Secret>,
    /// The certificate verification mode, `none` or `peer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_verify_mode: Option<String>,
    /// The TLS protocol version, such as `TLSv1_2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_version: Option<String>,
    /// The allowed TLS cipher list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ciphers: Option<String>,
    /// Treat error responses as irrecoverable chunk errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_response_as_unrecoverable: Option<bool>,
    /// Response codes which trigger a chunk retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retryable_response_codes: Option<Vec<i32>>,
    /// Basic auth credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<HttpAuth>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Basic auth section of the HTTP plugin.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct HttpAuth {
    /// The username for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Secret>,
    /// The password for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
}

/// Output plugin inserting events into Redis.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct RedisOutputConfig {
    /// The hostname of the Redis server, defaults to localhost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The port of the Redis server, defaults to 6379.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The database number, defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_number: Option<i32>,
    /// The password authenticating the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// A prefix prepended to every inserted key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_key_prefix: Option<String>,
    /// A strftime pattern appended to inserted keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strftime_format: Option<String>,
    /// Insert duplicate keys instead of overwriting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_key: Option<bool>,
    /// The TTL of inserted keys, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin emitting events in Graylog GELF format.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct GelfOutputConfig {
    /// The hostname or address of the Graylog input.
    pub host: String,
    /// The port of the Graylog input.
    pub port: i32,
    /// The transport, `udp` or `tcp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Wrap the TCP transport in TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// Options passed through to the TLS layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_options: Option<BTreeMap<String, String>>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}
