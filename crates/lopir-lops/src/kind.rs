//! The closed set of operator variants implemented in this build.
//!
//! Adding a variant forces every exhaustive match (property resolution,
//! emission dispatch) to be revisited; that is the point of the sum type.

use serde::{Deserialize, Serialize};
use std::fmt;

use lopir_core::error::{Error, Result};
use lopir_core::jobs::{JobSet, JobType};
use lopir_core::properties::LopProperties;
use lopir_core::types::{ExecLocation, ExecType};

/// Aggregation flavor for the `Aggregate` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggOp {
    Sum,
    Max,
    Min,
}

impl AggOp {
    pub fn opcode(self) -> &'static str {
        match self {
            AggOp::Sum => "a+",
            AggOp::Max => "amax",
            AggOp::Min => "amin",
        }
    }
}

/// Kind tag of a Lop node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LopKind {
    /// Source node: a bound variable, or a compile-time literal.
    Data { literal: Option<String> },

    /// Weighted statistical central moment of a given order.
    CentralMoment,

    /// Covariance between two data operands.
    CoVariance,

    /// Full aggregation of a single operand.
    Aggregate { op: AggOp },

    /// Re-partition a matrix into the runtime's blocked layout.
    Reblock { block_size: i64 },
}

impl LopKind {
    /// Stable short name used in errors and `explain` output.
    pub fn name(&self) -> &'static str {
        match self {
            LopKind::Data { .. } => "data",
            LopKind::CentralMoment => "cm",
            LopKind::CoVariance => "cov",
            LopKind::Aggregate { .. } => "agg",
            LopKind::Reblock { .. } => "rblk",
        }
    }

    /// Instruction opcode, if this kind emits an instruction.
    pub fn opcode(&self) -> Option<&'static str> {
        match self {
            LopKind::Data { .. } => None,
            LopKind::CentralMoment => Some("cm"),
            LopKind::CoVariance => Some("cov"),
            LopKind::Aggregate { op } => Some(op.opcode()),
            LopKind::Reblock { .. } => Some("rblk"),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, LopKind::Data { .. })
    }

    /// The compile-time literal carried by a source node, if any.
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            LopKind::Data { literal: Some(v) } => Some(v),
            _ => None,
        }
    }

    /// Static scheduling hints per kind: (breaks_alignment, aligner).
    fn alignment_hints(&self) -> (bool, bool) {
        match self {
            LopKind::Data { .. } => (false, false),
            LopKind::CentralMoment | LopKind::CoVariance => (false, false),
            LopKind::Aggregate { .. } => (true, false),
            LopKind::Reblock { .. } => (false, true),
        }
    }
}

impl fmt::Display for LopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve the execution properties for a (kind, backend) pair.
///
/// Deterministic: the same pair always yields an identical record. The
/// backend itself is decided upstream by the optimizer.
pub fn resolve_properties(kind: &LopKind, et: ExecType) -> Result<LopProperties> {
    let (breaks_alignment, aligner) = kind.alignment_hints();
    match kind {
        // Source nodes sit outside both backends; values are wired in by
        // the runtime, so they never define or join a job.
        LopKind::Data { .. } => LopProperties::new(
            ExecType::Cp,
            ExecLocation::Data,
            breaks_alignment,
            aligner,
            false,
            JobSet::control_only(),
        ),
        // Partial moments are combined across partitions, so the MR form
        // genuinely spans both phases.
        LopKind::CentralMoment | LopKind::CoVariance => match et {
            ExecType::Mr => LopProperties::new(
                et,
                ExecLocation::MapAndReduce,
                breaks_alignment,
                aligner,
                true,
                JobSet::of(&[JobType::CmCov]),
            ),
            ExecType::Cp => LopProperties::new(
                et,
                ExecLocation::ControlProgram,
                breaks_alignment,
                aligner,
                false,
                JobSet::control_only(),
            ),
        },
        // Embeds into a generic MR job defined elsewhere.
        LopKind::Aggregate { .. } => match et {
            ExecType::Mr => LopProperties::new(
                et,
                ExecLocation::Reduce,
                breaks_alignment,
                aligner,
                false,
                JobSet::of(&[JobType::Gmr]),
            ),
            ExecType::Cp => LopProperties::new(
                et,
                ExecLocation::ControlProgram,
                breaks_alignment,
                aligner,
                false,
                JobSet::control_only(),
            ),
        },
        LopKind::Reblock { .. } => match et {
            ExecType::Mr => LopProperties::new(
                et,
                ExecLocation::MapAndReduce,
                breaks_alignment,
                aligner,
                true,
                JobSet::of(&[JobType::Reblock]),
            ),
            ExecType::Cp => Err(Error::InconsistentProperties(
                "reblock can only execute as an MR job".into(),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve_properties(&LopKind::CentralMoment, ExecType::Mr).unwrap();
        let b = resolve_properties(&LopKind::CentralMoment, ExecType::Mr).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cm_mr_spans_both_phases_and_defines_a_job() {
        let props = resolve_properties(&LopKind::CentralMoment, ExecType::Mr).unwrap();
        assert_eq!(props.location, ExecLocation::MapAndReduce);
        assert!(props.defines_mr_job);
        assert!(props.compatible_jobs.contains(JobType::CmCov));
        assert!(!props.breaks_alignment);
        assert!(!props.aligner);
    }

    #[test]
    fn cm_cp_is_control_only() {
        let props = resolve_properties(&LopKind::CentralMoment, ExecType::Cp).unwrap();
        assert_eq!(props.location, ExecLocation::ControlProgram);
        assert!(!props.defines_mr_job);
        assert!(props.compatible_jobs.is_control_only());
    }

    #[test]
    fn aggregate_embeds_without_defining_a_job() {
        let props =
            resolve_properties(&LopKind::Aggregate { op: AggOp::Sum }, ExecType::Mr).unwrap();
        assert_eq!(props.location, ExecLocation::Reduce);
        assert!(!props.defines_mr_job);
        assert!(props.compatible_jobs.contains(JobType::Gmr));
        assert!(props.breaks_alignment);
    }

    #[test]
    fn reblock_is_the_aligner_and_mr_only() {
        let props =
            resolve_properties(&LopKind::Reblock { block_size: 1000 }, ExecType::Mr).unwrap();
        assert!(props.aligner);
        assert!(props.defines_mr_job);

        let err = resolve_properties(&LopKind::Reblock { block_size: 1000 }, ExecType::Cp)
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentProperties(_)));
    }

    #[test]
    fn opcodes_are_fixed_per_kind() {
        assert_eq!(LopKind::CentralMoment.opcode(), Some("cm"));
        assert_eq!(LopKind::CoVariance.opcode(), Some("cov"));
        assert_eq!(LopKind::Aggregate { op: AggOp::Max }.opcode(), Some("amax"));
        assert_eq!(LopKind::Data { literal: None }.opcode(), None);
    }
}
