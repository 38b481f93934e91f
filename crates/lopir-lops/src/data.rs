//! Source nodes: bound variables and compile-time literals.
//!
//! Data nodes emit no instruction of their own; their values reach the
//! runtime through the operand text of their consumers. A literal node's
//! label is its value text, so consumers can embed it directly.

use lopir_core::error::Result;
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};

use crate::graph::LopGraph;
use crate::kind::LopKind;

impl LopGraph {
    /// A named input variable.
    pub fn data(&mut self, name: &str, data_type: DataType, value_type: ValueType) -> Result<LopId> {
        let id = self.connect(
            LopKind::Data { literal: None },
            data_type,
            value_type,
            ExecType::Cp,
            &[],
        )?;
        self.set_label(id, name)?;
        Ok(id)
    }

    /// A compile-time literal scalar.
    pub fn literal(&mut self, value: &str, value_type: ValueType) -> Result<LopId> {
        let id = self.connect(
            LopKind::Data {
                literal: Some(value.to_string()),
            },
            DataType::Scalar,
            value_type,
            ExecType::Cp,
            &[],
        )?;
        self.set_label(id, value)?;
        Ok(id)
    }
}
