//! Arena-backed operator graph.
//!
//! Nodes are owned by the graph and referenced by `LopId`. Input lists are
//! ordered (position encodes operand role); consumer lists are back-edges
//! maintained automatically when a node is attached as an input. Inputs must
//! already exist in the arena when a node is added, so arena order is a
//! topological order and the graph is acyclic by construction.

use serde::{Deserialize, Serialize};

use lopir_core::error::{Error, Result};
use lopir_core::id::LopId;
use lopir_core::properties::LopProperties;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::kind::{resolve_properties, LopKind};

/// Labels resolved by the binding pass (or at `Data` construction).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputParameters {
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lop {
    pub kind: LopKind,
    pub data_type: DataType,
    pub value_type: ValueType,
    inputs: Vec<LopId>,
    outputs: Vec<LopId>,
    pub props: LopProperties,
    pub output_params: OutputParameters,
}

impl Lop {
    /// Predecessors in attachment order; position encodes operand role.
    pub fn inputs(&self) -> &[LopId] {
        &self.inputs
    }

    /// Consumers of this node's result. Bookkeeping only, never ownership.
    pub fn outputs(&self) -> &[LopId] {
        &self.outputs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LopGraph {
    nodes: Vec<Lop>,
}

impl LopGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: LopId) -> Result<&Lop> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = LopId> + '_ {
        (0..self.nodes.len() as u64).map(LopId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LopId, &Lop)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (LopId::new(i as u64), node))
    }

    /// Bind the resolved output label for `id`.
    pub fn set_label(&mut self, id: LopId, label: impl Into<String>) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or_else(|| Error::UnknownNode(id.to_string()))?;
        node.output_params.label = Some(label.into());
        Ok(())
    }

    /// Add a node and wire its inputs symmetrically: each input gains this
    /// node as a consumer. Kind-specific arity rules are enforced by the
    /// variant builders before they call this.
    pub(crate) fn connect(
        &mut self,
        kind: LopKind,
        data_type: DataType,
        value_type: ValueType,
        et: ExecType,
        inputs: &[LopId],
    ) -> Result<LopId> {
        // validate everything before the first mutation
        for &input in inputs {
            self.node(input)?;
        }
        let props = resolve_properties(&kind, et)?;

        let id = LopId::new(self.nodes.len() as u64);
        for &input in inputs {
            self.nodes[input.index()].outputs.push(id);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, kind = %kind, exec = %et, inputs = inputs.len(), "added lop");
        self.nodes.push(Lop {
            kind,
            data_type,
            value_type,
            inputs: inputs.to_vec(),
            outputs: Vec::new(),
            props,
            output_params: OutputParameters::default(),
        });
        Ok(id)
    }
}
