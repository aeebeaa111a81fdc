pub mod crd;
pub mod error;
pub mod manifest;
pub mod validate;

pub use error::AppError;

/// The API group of every custom resource modelled in this crate.
pub const API_GROUP: &str = "logging.banzaicloud.io";

/// The API version of every custom resource modelled in this crate.
pub const API_VERSION: &str = "v1alpha1";

/// The fully qualified `apiVersion` value stamped onto rendered manifests.
pub const API_GROUP_VERSION: &str = "logging.banzaicloud.io/v1alpha1";
