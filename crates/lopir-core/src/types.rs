//! Closed type vocabulary shared with the external runtime.
//!
//! The `Display` impls render the exact tags the instruction parser matches
//! positionally; changing them breaks the wire contract in `format`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data kind of an operand or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Matrix,
    Scalar,
    Unknown,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DataType::Matrix => "MATRIX",
            DataType::Scalar => "SCALAR",
            DataType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", tag)
    }
}

/// Value kind of an operand or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Int,
    Double,
    Boolean,
    Str,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ValueType::Int => "INT",
            ValueType::Double => "DOUBLE",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Str => "STRING",
        };
        write!(f, "{}", tag)
    }
}

/// Backend an operator is assigned to: the in-process control program, or a
/// partition-parallel MR job. The choice is made by the (external) optimizer;
/// this layer only validates and lowers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecType {
    Cp,
    Mr,
}

impl fmt::Display for ExecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ExecType::Cp => "CP",
            ExecType::Mr => "MR",
        };
        write!(f, "{}", tag)
    }
}

/// Where a node's computation runs: a phase of a distributed job, the
/// control program, or a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecLocation {
    Map,
    Reduce,
    MapAndReduce,
    ControlProgram,
    Data,
}

impl fmt::Display for ExecLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecLocation::Map => "Map",
            ExecLocation::Reduce => "Reduce",
            ExecLocation::MapAndReduce => "MapAndReduce",
            ExecLocation::ControlProgram => "ControlProgram",
            ExecLocation::Data => "Data",
        };
        write!(f, "{}", name)
    }
}
