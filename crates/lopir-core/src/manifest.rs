//! Deterministic manifest of a lowered plan for provenance/audit.
//!
//! Emitted once per lowering pass; two passes over the same graph and config
//! produce identical hashes (only the id and timestamp differ).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hash::Hash256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestId(pub Uuid);

impl std::fmt::Display for ManifestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanManifest {
    pub id: ManifestId,

    /// Stable hash of the emitted instruction stream.
    pub instructions_hash: Hash256,

    /// Stable hash of the per-node job-compatibility summary.
    pub compat_hash: Hash256,

    /// Compiler version string for provenance.
    pub compiler_version: String,

    /// Milliseconds since Unix epoch (UTC).
    pub created_ms: u64,
}

impl PlanManifest {
    pub fn new(instructions_hash: Hash256, compat_hash: Hash256, created_ms: u64) -> Self {
        Self {
            id: ManifestId(Uuid::new_v4()),
            instructions_hash,
            compat_hash,
            compiler_version: crate::VERSION.to_string(),
            created_ms,
        }
    }
}
