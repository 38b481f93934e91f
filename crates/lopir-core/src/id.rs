//! Stable handle into the Lop arena.
//!
//! Downstream crates should not use raw integers for node identity; the
//! handle is only meaningful together with the graph that issued it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LopId(u64);

impl LopId {
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Index into the owning arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lop({})", self.0)
    }
}
