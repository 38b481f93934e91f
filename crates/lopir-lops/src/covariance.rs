//! Covariance between two data operands (`cov`).
//!
//! Same family as `cm`: the MR form spans both job phases inside the shared
//! moment/covariance job template, and weights are a CP-only extension.

use lopir_core::error::{Error, Result};
use lopir_core::format;
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::emit::join_instruction;
use crate::graph::{Lop, LopGraph};
use crate::kind::LopKind;

const OPCODE: &str = "cov";

impl LopGraph {
    /// Build a covariance node over operands `x` and `y`.
    pub fn covariance(
        &mut self,
        x: LopId,
        y: LopId,
        weights: Option<LopId>,
        data_type: DataType,
        value_type: ValueType,
        et: ExecType,
    ) -> Result<LopId> {
        match (et, weights) {
            (ExecType::Mr, Some(_)) => Err(Error::InvalidArity {
                kind: "cov",
                expected: "2 inputs under MR (x, y)",
                got: 3,
            }),
            (_, None) => self.connect(LopKind::CoVariance, data_type, value_type, et, &[x, y]),
            (ExecType::Cp, Some(w)) => {
                self.connect(LopKind::CoVariance, data_type, value_type, et, &[x, y, w])
            }
        }
    }
}

/// All operands carry their declared types; there is no role override here.
pub(crate) fn instruction(
    graph: &LopGraph,
    node: &Lop,
    labels: &[&str],
    output: &str,
) -> Result<String> {
    let mut operands = Vec::with_capacity(labels.len() + 1);
    for (&input, label) in node.inputs().iter().zip(labels.iter()) {
        let in_node = graph.node(input)?;
        operands.push(format::operand(label, in_node.data_type, in_node.value_type));
    }
    operands.push(format::operand(output, node.data_type, node.value_type));
    Ok(join_instruction(node, OPCODE, &operands))
}
