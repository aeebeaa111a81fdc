//! Filter plugin configs applied along a flow.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single filter along a flow. Exactly one plugin block should be
/// configured per filter entry.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Filter {
    /// Print events to stdout, for pipeline debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<StdOutFilterConfig>,
    /// Parse a record field into structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserConfig>,
    /// Keep or drop events by field patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grep: Option<GrepConfig>,
    /// Rewrite records with static or derived values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_transformer: Option<RecordTransformer>,
    /// Mutate records, a lighter alternative to the transformer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_modifier: Option<RecordModifier>,
    /// Re-tag events from Kubernetes metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_normaliser: Option<TagNormaliser>,
    /// Replace dots in field names, for Elasticsearch compatibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedot: Option<DedotFilterConfig>,
    /// Drop events exceeding a per-group rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<Throttle>,
}

impl Filter {
    /// The names of all plugin blocks configured on this filter.
    pub fn active_plugins(&self) -> Vec<&'static str> {
        let mut active = Vec::new();
        if self.stdout.is_some() {
            active.push("stdout");
        }
        if self.parser.is_some() {
            active.push("parser");
        }
        if self.grep.is_some() {
            active.push("grep");
        }
        if self.record_transformer.is_some() {
            active.push("record_transformer");
        }
        if self.record_modifier.is_some() {
            active.push("record_modifier");
        }
        if self.tag_normaliser.is_some() {
            active.push("tag_normaliser");
        }
        if self.dedot.is_some() {
            active.push("dedot");
        }
        if self.throttle.is_some() {
            active.push("throttle");
        }
        active
    }
}

/// Filter printing events to stdout.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct StdOutFilterConfig {
    /// The serialization of printed events, such as `json` or `hash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
}

/// Filter parsing a record field into structured data.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ParserConfig {
    /// The record key to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Keep the event time in the parsed record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_time: Option<bool>,
    /// Keep the original fields alongside the parsed ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_data: Option<bool>,
    /// Remove `key_name` from the record once parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_key_name_field: Option<bool>,
    /// Replace invalid byte sequences with `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_invalid_sequence: Option<bool>,
    /// A prefix prepended to every parsed key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_key_prefix: Option<String>,
    /// Store the parsed values under this key as a hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_value_field: Option<String>,
    /// Route unparseable events to the error stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emit_invalid_record_to_error: Option<bool>,
    /// The parse section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse: Option<ParseSection>,
}

/// The parse section of the parser filter.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ParseSection {
    /// The parser type, such as `regexp`, `json`, `nginx` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The regexp used by the `regexp` parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// The record key carrying the event time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    /// The strptime format of the event time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    /// The time representation, `float`, `unixtime` or `string`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_type: Option<String>,
    /// Keep the time key in the parsed record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_time_key: Option<bool>,
    /// Field type conversions, `field:type` pairs comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Patterns interpreted as null values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_value_pattern: Option<String>,
    /// Interpret empty strings as null values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_empty_string: Option<bool>,
    /// Estimate the event time when the record carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_current_event: Option<bool>,
    /// Interpret parsed times as local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time: Option<bool>,
    /// Interpret parsed times as UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc: Option<bool>,
    /// The timezone of parsed times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Filter keeping or dropping events by field patterns.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct GrepConfig {
    /// Keep only events matching all of these patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexp: Option<Vec<GrepRegexp>>,
    /// Drop events matching any of these patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<GrepExclude>>,
}

/// A keep pattern of the grep filter.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct GrepRegexp {
    /// The record key to match.
    pub key: String,
    /// The pattern which must match.
    pub pattern: String,
}

/// A drop pattern of the grep filter.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct GrepExclude {
    /// The record key to match.
    pub key: String,
    /// The pattern which must not match.
    pub pattern: String,
}

/// Filter rewriting records with static or derived values.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct RecordTransformer {
    /// Fields added to each record, value templates allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<BTreeMap<String, String>>>,
    /// Record keys to remove, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_keys: Option<String>,
    /// Record keys to keep, comma separated. Requires `renew_record`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_keys: Option<String>,
    /// Build each output record from scratch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_record: Option<bool>,
    /// The record key whose value becomes the new event time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_time_key: Option<String>,
    /// Evaluate values as ruby expressions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ruby: Option<bool>,
    /// Cast values to their typed representations automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_typecast: Option<bool>,
}

/// Filter mutating records.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct RecordModifier {
    /// Fields added to each record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<BTreeMap<String, String>>>,
    /// Record keys to remove, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_keys: Option<String>,
    /// Record keys to keep, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_keys: Option<String>,
    /// Convert the character encoding of all values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_encoding: Option<String>,
    /// A ruby expression evaluated once at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare_value: Option<String>,
}

/// Filter re-tagging events from Kubernetes metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct TagNormaliser {
    /// The tag template, defaults to
    /// `${namespace_name}.${pod_name}.${container_name}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Filter replacing dots in field names.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct DedotFilterConfig {
    /// The replacement separator, defaults to `_`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de_dot_separator: Option<String>,
    /// Expand dotted names into nested maps instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de_dot_nested: Option<bool>,
}

/// Filter dropping events exceeding a per-group rate.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Throttle {
    /// The record key grouping events for rate accounting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// The rate window in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_bucket_period_s: Option<i32>,
    /// The max number of events per group and window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_bucket_limit: Option<i32>,
    /// Drop throttled events instead of blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_drop_logs: Option<bool>,
    /// The rate below which a throttled group recovers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_reset_rate_s: Option<i32>,
    /// Wait before logging a repeat throttle warning, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_warning_delay_s: Option<i32>,
}
