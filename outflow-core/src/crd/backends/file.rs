//! Local file and null output plugins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format};

/// Output plugin writing events to files on the fluentd node.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct FileOutputConfig {
    /// The path of the output files, time placeholders allowed.
    pub path: String,
    /// Append to existing files instead of rotating by index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,
    /// Add `path_suffix` to the emitted file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_path_suffix: Option<bool>,
    /// The suffix of emitted file names, defaults to `.log`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_suffix: Option<String>,
    /// The compression of emitted files, such as `gzip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

/// Output plugin discarding all events.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct NullOutputConfig {}
