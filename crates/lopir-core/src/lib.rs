#![forbid(unsafe_code)]
//! lopir-core: shared vocabulary of the physical-operator layer.
//!
//! - Closed type enumerations (`types`) and the MR job registry (`jobs`)
//!   whose external tags are part of the runtime contract.
//! - Per-node execution-strategy metadata (`properties`), validated at
//!   construction.
//! - The textual instruction format constants (`format`).
//! - Compiler configuration, plan manifests, and stable hashing.
//!
//! No graph structure and no lowering logic here; those live in
//! `lopir-lops` and `lopir-lower`.

pub mod config;
pub mod error;
pub mod format;
pub mod hash;
pub mod id;
pub mod jobs;
pub mod manifest;
pub mod prelude;
pub mod properties;
pub mod types;

/// Compiler version baked into manifests for provenance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
