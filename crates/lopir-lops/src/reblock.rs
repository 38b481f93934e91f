//! Re-partition a matrix into the runtime's blocked layout (`rblk`).
//!
//! The one variant in this build that *is* a data-alignment re-partitioner:
//! its `aligner` hint tells the scheduler that downstream nodes may again
//! rely on the blocking scheme.

use lopir_core::error::Result;
use lopir_core::format;
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::emit::join_instruction;
use crate::graph::{Lop, LopGraph};
use crate::kind::LopKind;

const OPCODE: &str = "rblk";

impl LopGraph {
    /// Build a reblock node. MR-only; a CP request fails property resolution.
    pub fn reblock(
        &mut self,
        input: LopId,
        block_size: i64,
        data_type: DataType,
        value_type: ValueType,
        et: ExecType,
    ) -> Result<LopId> {
        self.connect(
            LopKind::Reblock { block_size },
            data_type,
            value_type,
            et,
            &[input],
        )
    }
}

/// The block size is a kind parameter, emitted as a literal scalar operand
/// between the input and the output descriptors.
pub(crate) fn instruction(
    graph: &LopGraph,
    node: &Lop,
    block_size: i64,
    labels: &[&str],
    output: &str,
) -> Result<String> {
    let in_node = graph.node(node.inputs()[0])?;
    let operands = vec![
        format::operand(labels[0], in_node.data_type, in_node.value_type),
        format::operand(&block_size.to_string(), DataType::Scalar, ValueType::Int),
        format::operand(output, node.data_type, node.value_type),
    ];
    Ok(join_instruction(node, OPCODE, &operands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopir_core::error::Error;

    #[test]
    fn emits_the_block_size_as_literal_operand() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let rb = g
            .reblock(x, 1000, DataType::Matrix, ValueType::Double, ExecType::Mr)
            .unwrap();
        let inst = g.instructions(rb, &["X"], "Xb").unwrap();
        assert_eq!(
            inst,
            "MR\u{b0}rblk\
             \u{b0}X\u{b7}MATRIX\u{b7}DOUBLE\
             \u{b0}1000\u{b7}SCALAR\u{b7}INT\
             \u{b0}Xb\u{b7}MATRIX\u{b7}DOUBLE"
        );
    }

    #[test]
    fn cp_reblock_is_rejected() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let err = g
            .reblock(x, 1000, DataType::Matrix, ValueType::Double, ExecType::Cp)
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentProperties(_)));
    }
}
