//! Compiler configuration consumed by the lowering passes.

use serde::{Deserialize, Serialize};

use crate::types::ExecType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Backend used when a plan step does not name one explicitly. The real
    /// decision belongs to the optimizer; this is only the DSL fallback.
    pub default_exec_type: ExecType,

    /// Prefix for generated temporary labels.
    pub temp_var_prefix: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            default_exec_type: ExecType::Cp,
            temp_var_prefix: "_var".to_string(),
        }
    }
}

impl CompilerConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LOPIR_DEFAULT_EXEC`: `cp` or `mr`
    /// - `LOPIR_TEMP_PREFIX`: temporary-label prefix
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LOPIR_DEFAULT_EXEC") {
            if let Some(et) = parse_exec_type(&s) {
                cfg.default_exec_type = et;
            }
        }

        if let Ok(s) = std::env::var("LOPIR_TEMP_PREFIX") {
            if !s.is_empty() {
                cfg.temp_var_prefix = s;
            }
        }

        cfg
    }
}

/// Case-insensitive exec-type name, `None` for anything unrecognized.
pub fn parse_exec_type(s: &str) -> Option<ExecType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "cp" => Some(ExecType::Cp),
        "mr" => Some(ExecType::Mr),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_control_program() {
        let cfg = CompilerConfig::default();
        assert_eq!(cfg.default_exec_type, ExecType::Cp);
        assert_eq!(cfg.temp_var_prefix, "_var");
    }

    #[test]
    fn exec_type_parsing_is_case_insensitive() {
        assert_eq!(parse_exec_type("MR"), Some(ExecType::Mr));
        assert_eq!(parse_exec_type(" cp "), Some(ExecType::Cp));
        assert_eq!(parse_exec_type("spark"), None);
    }
}
