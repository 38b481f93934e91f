#![forbid(unsafe_code)]
//! lopir-lower: from a plan description to the runtime instruction stream.
//!
//! - `bind`: assigns temporary labels to interior nodes.
//! - `lower`: walks the graph in construction (topological) order, emits one
//!   instruction per non-source node, and produces the provenance manifest
//!   plus the job-compatibility summary handed to the job scheduler.
//! - `dsl::yaml`: tiny YAML plan description → `LopGraph`.
//!
//! Job *grouping* (folding compatible MR nodes into physical jobs) is the
//! downstream scheduler's responsibility; this crate only hands it the
//! per-node compatibility sets.

pub mod bind;
pub mod dsl;
pub mod lower;

pub use bind::bind_labels;
pub use dsl::yaml::{parse_yaml_plan, parse_yaml_plan_with, ParsedPlan};
pub use lower::{lower_plan, LoweredPlan};
