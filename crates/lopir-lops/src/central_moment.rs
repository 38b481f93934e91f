//! Weighted central-moment reduction (`cm`).
//!
//! Inputs in order: data, order (integer in {0, 2, 3, 4}), and under CP an
//! optional per-element weights vector. The MR path combines partial moments
//! across partitions and does not support weights.

use lopir_core::error::{Error, Result};
use lopir_core::format;
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::emit::{join_instruction, resolve_scalar_operand};
use crate::graph::{Lop, LopGraph};
use crate::kind::LopKind;

const OPCODE: &str = "cm";

impl LopGraph {
    /// Build a central-moment node over `data` with the given `order` input.
    ///
    /// Under MR exactly `data` and `order` are accepted; a weights operand is
    /// rejected at construction so a malformed node never reaches emission.
    pub fn central_moment(
        &mut self,
        data: LopId,
        order: LopId,
        weights: Option<LopId>,
        data_type: DataType,
        value_type: ValueType,
        et: ExecType,
    ) -> Result<LopId> {
        match (et, weights) {
            (ExecType::Mr, Some(_)) => Err(Error::InvalidArity {
                kind: "cm",
                expected: "2 inputs under MR (data, order)",
                got: 3,
            }),
            (_, None) => self.connect(
                LopKind::CentralMoment,
                data_type,
                value_type,
                et,
                &[data, order],
            ),
            (ExecType::Cp, Some(w)) => self.connect(
                LopKind::CentralMoment,
                data_type,
                value_type,
                et,
                &[data, order, w],
            ),
        }
    }

    /// CP two-operand emission form: the order operand is synthesized from
    /// the node attached at construction (literal text, or `##label##` for a
    /// variable bound at execution time).
    pub fn cm_instructions_bound(
        &self,
        id: LopId,
        data_label: &str,
        output_label: &str,
    ) -> Result<String> {
        let node = self.node(id)?;
        if !matches!(node.kind, LopKind::CentralMoment) {
            return Err(Error::Plan(format!("{} is not a central-moment node", id)));
        }
        if node.inputs().len() != 2 {
            return Err(Error::UnresolvedOperand(
                "the two-operand form applies only to unweighted cm; \
                 pass the weights label explicitly"
                    .into(),
            ));
        }
        let order = resolve_scalar_operand(self, node.inputs()[1])?;
        instruction(self, node, &[data_label, &order], output_label)
    }
}

/// Emission arm shared by the label, bound, and indexed entry points.
pub(crate) fn instruction(
    graph: &LopGraph,
    node: &Lop,
    labels: &[&str],
    output: &str,
) -> Result<String> {
    let mut operands = Vec::with_capacity(labels.len() + 1);
    for (pos, (&input, label)) in node.inputs().iter().zip(labels.iter()).enumerate() {
        let in_node = graph.node(input)?;
        // the order operand always carries INT, whatever its node declares:
        // its domain is a fixed small integer set
        let vt = if pos == 1 {
            ValueType::Int
        } else {
            in_node.value_type
        };
        operands.push(format::operand(label, in_node.data_type, vt));
    }
    operands.push(format::operand(output, node.data_type, node.value_type));
    Ok(join_instruction(node, OPCODE, &operands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopir_core::types::{DataType, ExecType, ValueType};

    fn graph_with_inputs() -> (LopGraph, LopId, LopId) {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let two = g.literal("2", ValueType::Int).unwrap();
        (g, x, two)
    }

    #[test]
    fn weights_under_mr_are_invalid_arity() {
        let (mut g, x, two) = graph_with_inputs();
        let w = g.data("W", DataType::Matrix, ValueType::Double).unwrap();
        let err = g
            .central_moment(x, two, Some(w), DataType::Scalar, ValueType::Double, ExecType::Mr)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArity { kind: "cm", .. }));
    }

    #[test]
    fn weights_under_cp_become_the_third_input() {
        let (mut g, x, two) = graph_with_inputs();
        let w = g.data("W", DataType::Matrix, ValueType::Double).unwrap();
        let cm = g
            .central_moment(x, two, Some(w), DataType::Scalar, ValueType::Double, ExecType::Cp)
            .unwrap();
        assert_eq!(g.node(cm).unwrap().inputs(), &[x, two, w]);

        let inst = g.instructions(cm, &["X", "2", "W"], "m2").unwrap();
        assert_eq!(
            inst,
            "CP\u{b0}cm\
             \u{b0}X\u{b7}MATRIX\u{b7}DOUBLE\
             \u{b0}2\u{b7}SCALAR\u{b7}INT\
             \u{b0}W\u{b7}MATRIX\u{b7}DOUBLE\
             \u{b0}m2\u{b7}SCALAR\u{b7}DOUBLE"
        );
    }

    #[test]
    fn order_value_type_is_forced_to_int() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        // an order node that (wrongly) declares DOUBLE still emits INT
        let ord = g.data("ord1", DataType::Scalar, ValueType::Double).unwrap();
        let cm = g
            .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
            .unwrap();
        let inst = g.instructions(cm, &["X", "ord1"], "Y").unwrap();
        assert!(inst.contains("ord1\u{b7}SCALAR\u{b7}INT"));
    }

    #[test]
    fn bound_form_embeds_a_literal_order() {
        let (mut g, x, two) = graph_with_inputs();
        let cm = g
            .central_moment(x, two, None, DataType::Scalar, ValueType::Double, ExecType::Cp)
            .unwrap();
        let inst = g.cm_instructions_bound(cm, "X", "m2").unwrap();
        assert!(inst.contains("\u{b0}2\u{b7}SCALAR\u{b7}INT\u{b0}"));
        assert!(!inst.contains("##"));
    }

    #[test]
    fn bound_form_defers_a_variable_order() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let ord = g.data("ord1", DataType::Scalar, ValueType::Int).unwrap();
        let cm = g
            .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Cp)
            .unwrap();
        let inst = g.cm_instructions_bound(cm, "X", "m2").unwrap();
        assert!(inst.contains("\u{b0}##ord1##\u{b7}SCALAR\u{b7}INT\u{b0}"));
    }

    #[test]
    fn bound_form_rejects_weighted_nodes() {
        let mut g = LopGraph::new();
        let x = g.data("X", DataType::Matrix, ValueType::Double).unwrap();
        let two = g.literal("2", ValueType::Int).unwrap();
        let w = g.data("W", DataType::Matrix, ValueType::Double).unwrap();
        let cm = g
            .central_moment(x, two, Some(w), DataType::Scalar, ValueType::Double, ExecType::Cp)
            .unwrap();
        let err = g.cm_instructions_bound(cm, "X", "m2").unwrap_err();
        assert!(matches!(err, Error::UnresolvedOperand(_)));
    }

    #[test]
    fn indexed_form_synthesizes_the_order_operand() {
        let (mut g, x, two) = graph_with_inputs();
        let cm = g
            .central_moment(x, two, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
            .unwrap();
        let inst = g.instructions_indexed(cm, &[0], 1).unwrap();
        assert_eq!(
            inst,
            "MR\u{b0}cm\
             \u{b0}0\u{b7}MATRIX\u{b7}DOUBLE\
             \u{b0}2\u{b7}SCALAR\u{b7}INT\
             \u{b0}1\u{b7}SCALAR\u{b7}DOUBLE"
        );
    }
}
