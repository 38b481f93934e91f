//! Per-node execution-strategy metadata.
//!
//! A `LopProperties` record is fixed when its node is built and validated at
//! that point; a malformed combination never reaches emission.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::jobs::JobSet;
use crate::types::{ExecLocation, ExecType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LopProperties {
    pub exec_type: ExecType,
    pub location: ExecLocation,

    /// This node destroys a known row/column partitioning of its input.
    pub breaks_alignment: bool,

    /// This node re-establishes a blocking/partitioning scheme itself.
    pub aligner: bool,

    /// This node alone forces a distributed job to exist.
    pub defines_mr_job: bool,

    /// Distributed job templates this node may be folded into.
    pub compatible_jobs: JobSet,
}

impl LopProperties {
    pub fn new(
        exec_type: ExecType,
        location: ExecLocation,
        breaks_alignment: bool,
        aligner: bool,
        defines_mr_job: bool,
        compatible_jobs: JobSet,
    ) -> Result<Self> {
        let props = Self {
            exec_type,
            location,
            breaks_alignment,
            aligner,
            defines_mr_job,
            compatible_jobs,
        };
        props.validate()?;
        Ok(props)
    }

    fn validate(&self) -> Result<()> {
        match (self.exec_type, self.location) {
            (ExecType::Mr, ExecLocation::ControlProgram) => {
                return Err(Error::InconsistentProperties(
                    "MR node cannot be located in the control program".into(),
                ));
            }
            (
                ExecType::Cp,
                ExecLocation::Map | ExecLocation::Reduce | ExecLocation::MapAndReduce,
            ) => {
                return Err(Error::InconsistentProperties(format!(
                    "CP node cannot be located in {}",
                    self.location
                )));
            }
            _ => {}
        }
        if self.defines_mr_job && self.exec_type != ExecType::Mr {
            return Err(Error::InconsistentProperties(
                "only an MR node can define an MR job".into(),
            ));
        }
        if self.exec_type == ExecType::Cp && !self.compatible_jobs.is_control_only() {
            return Err(Error::InconsistentProperties(
                "CP node must declare the control-only job set".into(),
            ));
        }
        if self.compatible_jobs.is_empty() {
            return Err(Error::InconsistentProperties(
                "compatibility set must name at least the sentinel template".into(),
            ));
        }
        Ok(())
    }
}
