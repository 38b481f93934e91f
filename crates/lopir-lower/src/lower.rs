//! Plan-level lowering pass.
//!
//! Nodes were appended with their inputs already present, so arena order is
//! a topological order and a single forward walk suffices.

use lopir_core::config::CompilerConfig;
use lopir_core::error::{Error, Result};
use lopir_core::hash::{hash_serde, hash_str};
use lopir_core::id::LopId;
use lopir_core::jobs::JobSet;
use lopir_core::manifest::PlanManifest;
use lopir_core::types::DataType;
use lopir_lops::LopGraph;

/// Everything the downstream consumers need: the instruction stream for the
/// runtime, and the per-node compatibility summary for the job scheduler.
#[derive(Debug, Clone)]
pub struct LoweredPlan {
    pub instructions: Vec<String>,
    pub job_compat: Vec<(LopId, JobSet)>,
    pub manifest: PlanManifest,
}

/// Bind labels, then lower every non-source node to one instruction line.
pub fn lower_plan(graph: &mut LopGraph, config: &CompilerConfig) -> Result<LoweredPlan> {
    crate::bind::bind_labels(graph, config)?;
    lower_bound(graph)
}

/// Lowering over an already-bound graph.
fn lower_bound(graph: &LopGraph) -> Result<LoweredPlan> {
    let mut instructions = Vec::new();
    let mut job_compat = Vec::new();

    for (id, node) in graph.iter() {
        if node.kind.is_data() {
            continue;
        }

        let mut labels = Vec::with_capacity(node.inputs().len());
        for &input in node.inputs() {
            labels.push(operand_text(graph, input)?);
        }
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let output = node
            .output_params
            .label
            .as_deref()
            .ok_or_else(|| Error::UnresolvedOperand(format!("no label bound for {}", id)))?;

        let inst = graph.instructions(id, &label_refs, output)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, kind = %node.kind, "lowered");
        instructions.push(inst);
        job_compat.push((id, node.props.compatible_jobs.clone()));
    }

    let instructions_hash = hash_str(&instructions.join("\n"));
    let compat_hash = hash_serde(&job_compat)?;
    let manifest = PlanManifest::new(instructions_hash, compat_hash, now_ms());
    Ok(LoweredPlan {
        instructions,
        job_compat,
        manifest,
    })
}

/// Operand text for one input: literal value text, `##var##` for a
/// non-literal scalar variable, or the plain label of an interior node.
fn operand_text(graph: &LopGraph, id: LopId) -> Result<String> {
    let node = graph.node(id)?;
    if let Some(value) = node.kind.literal_value() {
        return Ok(value.to_string());
    }
    let label = node
        .output_params
        .label
        .as_deref()
        .ok_or_else(|| Error::UnresolvedOperand(format!("no label bound for {}", id)))?;
    if node.kind.is_data() && node.data_type == DataType::Scalar {
        // scalar variables are bound by the runtime right before execution
        return Ok(lopir_core::format::deferred(label));
    }
    Ok(label.to_string())
}

fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
