//! Full aggregation of a single operand (`a+`, `amax`, `amin`).

use lopir_core::error::Result;
use lopir_core::format;
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::emit::join_instruction;
use crate::graph::{Lop, LopGraph};
use crate::kind::{AggOp, LopKind};

impl LopGraph {
    /// Build an aggregation node over a single input.
    pub fn aggregate(
        &mut self,
        input: LopId,
        op: AggOp,
        data_type: DataType,
        value_type: ValueType,
        et: ExecType,
    ) -> Result<LopId> {
        self.connect(LopKind::Aggregate { op }, data_type, value_type, et, &[input])
    }
}

pub(crate) fn instruction(
    graph: &LopGraph,
    node: &Lop,
    op: AggOp,
    labels: &[&str],
    output: &str,
) -> Result<String> {
    let in_node = graph.node(node.inputs()[0])?;
    let operands = vec![
        format::operand(labels[0], in_node.data_type, in_node.value_type),
        format::operand(output, node.data_type, node.value_type),
    ];
    Ok(join_instruction(node, op.opcode(), &operands))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_emits_its_own_opcode() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let agg = g
            .aggregate(x, AggOp::Sum, DataType::Scalar, ValueType::Double, ExecType::Cp)
            .unwrap();
        let inst = g.instructions(agg, &["X"], "s").unwrap();
        assert_eq!(
            inst,
            "CP\u{b0}a+\u{b0}X\u{b7}MATRIX\u{b7}DOUBLE\u{b0}s\u{b7}SCALAR\u{b7}DOUBLE"
        );
    }

    #[test]
    fn indexed_form_uses_slot_numbers() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let agg = g
            .aggregate(x, AggOp::Max, DataType::Scalar, ValueType::Double, ExecType::Mr)
            .unwrap();
        let inst = g.instructions_indexed(agg, &[0], 1).unwrap();
        assert_eq!(
            inst,
            "MR\u{b0}amax\u{b0}0\u{b7}MATRIX\u{b7}DOUBLE\u{b0}1\u{b7}SCALAR\u{b7}DOUBLE"
        );
    }
}
