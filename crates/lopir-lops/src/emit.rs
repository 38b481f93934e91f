//! Instruction-text assembly shared by all variants.
//!
//! Operands stay tagged (`Literal` vs `Deferred`) inside the compiler; the
//! `##…##` placeholder appears only at the serialization boundary here and
//! in `lopir_core::format`. Emission never mutates node state, so it is pure
//! and idempotent.

use lopir_core::error::{Error, Result};
use lopir_core::format;
use lopir_core::id::LopId;

use crate::graph::{Lop, LopGraph};
use crate::kind::LopKind;

/// An operand whose text is either known at compile time or bound at
/// execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandRef {
    Literal(String),
    Deferred(String),
}

impl OperandRef {
    /// Serialize to the wire form (placeholder markers for deferred labels).
    pub fn render(&self) -> String {
        match self {
            OperandRef::Literal(text) => text.clone(),
            OperandRef::Deferred(label) => format::deferred(label),
        }
    }
}

impl LopGraph {
    /// Emit the instruction line for `id`: one resolved label per input, in
    /// attachment order, plus the output label. A label-count mismatch means
    /// the caller bound operands incompletely.
    pub fn instructions(
        &self,
        id: LopId,
        input_labels: &[&str],
        output_label: &str,
    ) -> Result<String> {
        let node = self.node(id)?;
        if input_labels.len() != node.inputs().len() {
            return Err(Error::UnresolvedOperand(format!(
                "{} expects {} operand labels, got {}",
                node.kind,
                node.inputs().len(),
                input_labels.len()
            )));
        }
        match &node.kind {
            LopKind::Data { .. } => Err(Error::Plan(
                "data nodes do not lower to instructions".into(),
            )),
            LopKind::CentralMoment => {
                crate::central_moment::instruction(self, node, input_labels, output_label)
            }
            LopKind::CoVariance => {
                crate::covariance::instruction(self, node, input_labels, output_label)
            }
            LopKind::Aggregate { op } => {
                crate::aggregate::instruction(self, node, *op, input_labels, output_label)
            }
            LopKind::Reblock { block_size } => crate::reblock::instruction(
                self,
                node,
                *block_size,
                input_labels,
                output_label,
            ),
        }
    }

    /// MR emission entry: operand labels are the numeric slot indexes
    /// assigned by the job scheduler. Scalar operands attached as `Data`
    /// nodes (e.g. the `cm` order) are synthesized from the graph instead of
    /// taking a slot.
    pub fn instructions_indexed(
        &self,
        id: LopId,
        input_indexes: &[u32],
        output_index: u32,
    ) -> Result<String> {
        let node = self.node(id)?;
        let output = output_index.to_string();
        match &node.kind {
            LopKind::Data { .. } => Err(Error::Plan(
                "data nodes do not lower to instructions".into(),
            )),
            LopKind::CentralMoment => {
                let [data] = expect_indexes::<1>(node, input_indexes)?;
                let order = resolve_scalar_operand(self, node.inputs()[1])?;
                self.instructions(id, &[&data.to_string(), &order], &output)
            }
            LopKind::CoVariance => {
                let [x, y] = expect_indexes::<2>(node, input_indexes)?;
                self.instructions(id, &[&x.to_string(), &y.to_string()], &output)
            }
            LopKind::Aggregate { .. } | LopKind::Reblock { .. } => {
                let [input] = expect_indexes::<1>(node, input_indexes)?;
                self.instructions(id, &[&input.to_string()], &output)
            }
        }
    }
}

/// Resolve a scalar operand attached as a `Data` node: the literal value
/// text as-is, or the bound label wrapped in the deferred placeholder.
pub(crate) fn resolve_scalar_operand(graph: &LopGraph, id: LopId) -> Result<String> {
    let node = graph.node(id)?;
    if let Some(value) = node.kind.literal_value() {
        return Ok(OperandRef::Literal(value.to_string()).render());
    }
    match &node.output_params.label {
        Some(label) => Ok(OperandRef::Deferred(label.clone()).render()),
        None => Err(Error::UnresolvedOperand(format!(
            "no label bound for {}",
            id
        ))),
    }
}

/// Assemble `ET°opcode°operand°…` with the fixed operand delimiter.
pub(crate) fn join_instruction(node: &Lop, opcode: &str, operands: &[String]) -> String {
    let mut inst = format!(
        "{}{}{}",
        node.props.exec_type,
        format::OPERAND_DELIMITER,
        opcode
    );
    for op in operands {
        inst.push_str(format::OPERAND_DELIMITER);
        inst.push_str(op);
    }
    inst
}

fn expect_indexes<const N: usize>(node: &Lop, indexes: &[u32]) -> Result<[u32; N]> {
    <[u32; N]>::try_from(indexes).map_err(|_| {
        Error::UnresolvedOperand(format!(
            "{} expects {} slot indexes, got {}",
            node.kind,
            N,
            indexes.len()
        ))
    })
}
