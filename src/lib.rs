#![forbid(unsafe_code)]
//! lopir: a physical-operator compiler stage for distributed linear algebra.
//!
//! Logical operations are lowered to a DAG of physical operators (lops),
//! each annotated with where it runs and which distributed job shapes can
//! host it, and finally serialized to delimiter-separated runtime
//! instructions.
//!
//! This crate re-exports the public surface of the workspace members:
//! `lopir-core` (types, properties, errors), `lopir-lops` (the operator
//! graph and emission), and `lopir-lower` (label binding, plan lowering,
//! and the YAML plan description).

pub use lopir_core::config::CompilerConfig;
pub use lopir_core::error::{Error, Result};
pub use lopir_core::format;
pub use lopir_core::id::LopId;
pub use lopir_core::jobs::{JobSet, JobType};
pub use lopir_core::manifest::{ManifestId, PlanManifest};
pub use lopir_core::properties::LopProperties;
pub use lopir_core::types::{DataType, ExecLocation, ExecType, ValueType};

pub use lopir_lops::{AggOp, Lop, LopGraph, LopKind, OutputParameters};

pub use lopir_lower::{
    bind_labels, lower_plan, parse_yaml_plan, parse_yaml_plan_with, LoweredPlan, ParsedPlan,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
