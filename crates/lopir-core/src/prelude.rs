//! Convenient re-exports for downstream crates.

pub use crate::config::CompilerConfig;
pub use crate::error::{Error, Result};
pub use crate::id::LopId;
pub use crate::jobs::{JobSet, JobType};
pub use crate::manifest::{ManifestId, PlanManifest};
pub use crate::properties::LopProperties;
pub use crate::types::{DataType, ExecLocation, ExecType, ValueType};
