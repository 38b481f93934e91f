//! Registry of distributed job templates.
//!
//! A node declares at construction which MR job templates it can be embedded
//! into; the job-grouping scheduler reads this set, never mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reusable MR job templates. `Invalid` is the sentinel meaning "no
/// distributed template applies; this node runs standalone in the control
/// program".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum JobType {
    Gmr,
    Reblock,
    CmCov,
    GroupedAgg,
    Sort,
    Invalid,
}

impl JobType {
    pub fn is_distributed(self) -> bool {
        !matches!(self, JobType::Invalid)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobType::Gmr => "GMR",
            JobType::Reblock => "REBLOCK",
            JobType::CmCov => "CM_COV",
            JobType::GroupedAgg => "GROUPED_AGG",
            JobType::Sort => "SORT",
            JobType::Invalid => "INVALID",
        };
        write!(f, "{}", name)
    }
}

/// Compatibility set of a node. Computed once when the node is built and
/// immutable afterwards; kept sorted so serialization and hashing are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSet {
    jobs: Vec<JobType>,
}

impl JobSet {
    /// The sentinel set for nodes that can never join a distributed job.
    pub fn control_only() -> Self {
        Self {
            jobs: vec![JobType::Invalid],
        }
    }

    pub fn of(jobs: &[JobType]) -> Self {
        let mut jobs = jobs.to_vec();
        jobs.sort();
        jobs.dedup();
        Self { jobs }
    }

    pub fn contains(&self, job: JobType) -> bool {
        self.jobs.contains(&job)
    }

    pub fn is_control_only(&self) -> bool {
        self.jobs == [JobType::Invalid]
    }

    pub fn iter(&self) -> impl Iterator<Item = JobType> + '_ {
        self.jobs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl fmt::Display for JobSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, job) in self.jobs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", job)?;
        }
        write!(f, "}}")
    }
}
