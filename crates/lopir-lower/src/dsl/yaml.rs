//! Minimal YAML → `LopGraph` parser for plan descriptions.
//!
//! Example:
//! ```yaml
//! config: { default_exec: mr }
//! nodes:
//!   - { op: data,  name: X, data_type: matrix, value_type: double }
//!   - { op: const, name: two, value: "2" }
//!   - { op: cm,    name: m2, data: X, order: two }
//! ```
//!
//! Nodes are name-resolved in document order, so every reference must point
//! at an earlier node; that also guarantees the resulting graph is acyclic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lopir_core::config::{parse_exec_type, CompilerConfig};
use lopir_core::error::{Error, Result};
use lopir_core::id::LopId;
use lopir_core::types::{DataType, ExecType, ValueType};
use lopir_lops::{AggOp, LopGraph};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDoc {
    #[serde(default)]
    pub config: Option<PlanConfig>,
    pub nodes: Vec<NodeDef>,
}

/// Per-document overrides applied on top of the base `CompilerConfig`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub default_exec: Option<String>,
    pub temp_var_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum NodeDef {
    Data {
        name: String,
        data_type: String,
        value_type: String,
    },

    Const {
        name: String,
        value: String,
        #[serde(default)]
        value_type: Option<String>,
    },

    Cm {
        name: String,
        data: String,
        order: String,
        #[serde(default)]
        weights: Option<String>,
        #[serde(default)]
        exec: Option<String>,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        value_type: Option<String>,
    },

    Cov {
        name: String,
        x: String,
        y: String,
        #[serde(default)]
        weights: Option<String>,
        #[serde(default)]
        exec: Option<String>,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        value_type: Option<String>,
    },

    Agg {
        name: String,
        input: String,
        func: String,
        #[serde(default)]
        exec: Option<String>,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        value_type: Option<String>,
    },

    Reblock {
        name: String,
        input: String,
        block_size: i64,
        #[serde(default)]
        data_type: Option<String>,
        #[serde(default)]
        value_type: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ParsedPlan {
    pub graph: LopGraph,
    pub config: CompilerConfig,
}

/// Parse with the default base configuration.
pub fn parse_yaml_plan(src: &str) -> Result<ParsedPlan> {
    parse_yaml_plan_with(src, CompilerConfig::default())
}

/// Parse on top of an explicit base configuration (e.g. `from_env()`); the
/// document's `config` block takes precedence over the base.
pub fn parse_yaml_plan_with(src: &str, mut config: CompilerConfig) -> Result<ParsedPlan> {
    let doc: PlanDoc = serde_yaml::from_str(src).map_err(|e| Error::Plan(e.to_string()))?;

    if let Some(overrides) = &doc.config {
        if let Some(exec) = &overrides.default_exec {
            config.default_exec_type = parse_exec_type(exec)
                .ok_or_else(|| Error::Plan(format!("unknown exec type '{}'", exec)))?;
        }
        if let Some(prefix) = &overrides.temp_var_prefix {
            config.temp_var_prefix = prefix.clone();
        }
    }

    let mut graph = LopGraph::new();
    let mut names: BTreeMap<String, LopId> = BTreeMap::new();

    for def in &doc.nodes {
        let (name, id) = build_node(&mut graph, &names, def, &config)?;
        if names.insert(name.clone(), id).is_some() {
            return Err(Error::Plan(format!("duplicate node name '{}'", name)));
        }
    }

    Ok(ParsedPlan { graph, config })
}

fn build_node(
    graph: &mut LopGraph,
    names: &BTreeMap<String, LopId>,
    def: &NodeDef,
    config: &CompilerConfig,
) -> Result<(String, LopId)> {
    match def {
        NodeDef::Data {
            name,
            data_type,
            value_type,
        } => {
            let id = graph.data(name, parse_dtype(data_type)?, parse_vtype(value_type)?)?;
            Ok((name.clone(), id))
        }
        NodeDef::Const {
            name,
            value,
            value_type,
        } => {
            let vt = match value_type {
                Some(s) => parse_vtype(s)?,
                None => infer_vtype(value),
            };
            let id = graph.literal(value, vt)?;
            Ok((name.clone(), id))
        }
        NodeDef::Cm {
            name,
            data,
            order,
            weights,
            exec,
            data_type,
            value_type,
        } => {
            let data = resolve(names, data)?;
            let order = resolve(names, order)?;
            let weights = weights.as_deref().map(|w| resolve(names, w)).transpose()?;
            let id = graph.central_moment(
                data,
                order,
                weights,
                result_dtype(data_type)?,
                result_vtype(value_type)?,
                exec_type(exec, config)?,
            )?;
            Ok((name.clone(), id))
        }
        NodeDef::Cov {
            name,
            x,
            y,
            weights,
            exec,
            data_type,
            value_type,
        } => {
            let x = resolve(names, x)?;
            let y = resolve(names, y)?;
            let weights = weights.as_deref().map(|w| resolve(names, w)).transpose()?;
            let id = graph.covariance(
                x,
                y,
                weights,
                result_dtype(data_type)?,
                result_vtype(value_type)?,
                exec_type(exec, config)?,
            )?;
            Ok((name.clone(), id))
        }
        NodeDef::Agg {
            name,
            input,
            func,
            exec,
            data_type,
            value_type,
        } => {
            let input = resolve(names, input)?;
            let id = graph.aggregate(
                input,
                parse_agg(func)?,
                result_dtype(data_type)?,
                result_vtype(value_type)?,
                exec_type(exec, config)?,
            )?;
            Ok((name.clone(), id))
        }
        NodeDef::Reblock {
            name,
            input,
            block_size,
            data_type,
            value_type,
        } => {
            let input = resolve(names, input)?;
            let dt = match data_type {
                Some(s) => parse_dtype(s)?,
                None => DataType::Matrix,
            };
            let id = graph.reblock(
                input,
                *block_size,
                dt,
                result_vtype(value_type)?,
                ExecType::Mr,
            )?;
            Ok((name.clone(), id))
        }
    }
}

fn resolve(names: &BTreeMap<String, LopId>, name: &str) -> Result<LopId> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| Error::Plan(format!("reference to undefined node '{}'", name)))
}

fn exec_type(exec: &Option<String>, config: &CompilerConfig) -> Result<ExecType> {
    match exec {
        Some(s) => {
            parse_exec_type(s).ok_or_else(|| Error::Plan(format!("unknown exec type '{}'", s)))
        }
        None => Ok(config.default_exec_type),
    }
}

fn parse_dtype(s: &str) -> Result<DataType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "matrix" => Ok(DataType::Matrix),
        "scalar" => Ok(DataType::Scalar),
        other => Err(Error::Plan(format!("unknown data type '{}'", other))),
    }
}

fn parse_vtype(s: &str) -> Result<ValueType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "int" => Ok(ValueType::Int),
        "double" => Ok(ValueType::Double),
        "boolean" | "bool" => Ok(ValueType::Boolean),
        "string" | "str" => Ok(ValueType::Str),
        other => Err(Error::Plan(format!("unknown value type '{}'", other))),
    }
}

/// Result types default to a double scalar, the common case for reductions.
fn result_dtype(s: &Option<String>) -> Result<DataType> {
    match s {
        Some(s) => parse_dtype(s),
        None => Ok(DataType::Scalar),
    }
}

fn result_vtype(s: &Option<String>) -> Result<ValueType> {
    match s {
        Some(s) => parse_vtype(s),
        None => Ok(ValueType::Double),
    }
}

fn parse_agg(s: &str) -> Result<AggOp> {
    match s.trim().to_ascii_lowercase().as_str() {
        "sum" | "+" => Ok(AggOp::Sum),
        "max" => Ok(AggOp::Max),
        "min" => Ok(AggOp::Min),
        other => Err(Error::Plan(format!("unknown aggregation '{}'", other))),
    }
}

/// Untyped literals: integer, then float, then boolean, else string.
fn infer_vtype(value: &str) -> ValueType {
    if value.parse::<i64>().is_ok() {
        ValueType::Int
    } else if value.parse::<f64>().is_ok() {
        ValueType::Double
    } else if value == "true" || value == "false" {
        ValueType::Boolean
    } else {
        ValueType::Str
    }
}
