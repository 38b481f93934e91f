//! Temporary-label assignment for interior nodes.

use lopir_core::config::CompilerConfig;
use lopir_core::error::Result;
use lopir_lops::LopGraph;

/// Assign `{prefix}{n}` labels to every node the construction pass left
/// unlabeled. `Data` nodes already carry their variable name or literal
/// text and are never renamed.
pub fn bind_labels(graph: &mut LopGraph, config: &CompilerConfig) -> Result<()> {
    let ids: Vec<_> = graph.ids().collect();
    let mut next = 0usize;
    for id in ids {
        if graph.node(id)?.output_params.label.is_none() {
            graph.set_label(id, format!("{}{}", config.temp_var_prefix, next))?;
            next += 1;
        }
    }
    Ok(())
}
