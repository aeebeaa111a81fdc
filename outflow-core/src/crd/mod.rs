//! Logging operator CRDs.
//!
//! References:
//! - https://kubernetes.io/docs/tasks/extend-kubernetes/custom-resources/custom-resource-definitions/
//! - https://banzaicloud.com/docs/one-eye/logging-operator/configuration/crds/

pub mod backends;
mod cluster_flow;
mod cluster_output;
mod common;
mod filters;
mod flow;
mod output;

use kube::Resource;

pub use cluster_flow::{ClusterExclude, ClusterFlow, ClusterFlowSpec, ClusterMatch, ClusterSelect};
pub use cluster_output::{ClusterOutput, ClusterOutputSpec};
pub use common::{Buffer, Format, Secret, SecretKeyRef, ValueFrom};
pub use filters::{
    DedotFilterConfig, Filter, GrepConfig, GrepExclude, GrepRegexp, ParseSection, ParserConfig,
    RecordModifier, RecordTransformer, StdOutFilterConfig, TagNormaliser, Throttle,
};
pub use flow::{Exclude, Flow, FlowSpec, FlowStatus, Match, Select};
pub use output::{Output, OutputSpec, OutputStatus};

/// A convenience trait built around the fact that all implementors
/// must have the following attributes.
pub trait RequiredMetadata {
    /// The namespace of this object.
    fn namespace(&self) -> &str;

    /// The name of this object.
    fn name(&self) -> &str;
}

impl RequiredMetadata for Output {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}

impl RequiredMetadata for ClusterOutput {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}

impl RequiredMetadata for Flow {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}

impl RequiredMetadata for ClusterFlow {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}
