//! lopir CLI: lower YAML plan descriptions to runtime instructions.

use clap::{Parser, Subcommand};
use lopir_core::config::CompilerConfig;
use lopir_lower::{lower_plan, parse_yaml_plan_with};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lopir")]
#[command(about = "Physical-operator plan compiler for distributed linear algebra", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower a plan to its instruction stream
    Lower {
        /// Path to the plan YAML file
        #[arg(short, long)]
        plan: PathBuf,

        /// Default execution backend (overrides config)
        #[arg(long)]
        exec: Option<String>,

        /// Temporary-variable prefix (overrides config)
        #[arg(long)]
        temp_prefix: Option<String>,
    },

    /// Validate a plan YAML file (parse and property check only)
    Validate {
        /// Path to the plan YAML file
        #[arg(short, long)]
        plan: PathBuf,
    },

    /// Show the lowered plan with per-node execution metadata
    Explain {
        /// Path to the plan YAML file
        #[arg(short, long)]
        plan: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lower {
            plan,
            exec,
            temp_prefix,
        } => {
            if let Err(e) = lower(&plan, exec, temp_prefix) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { plan } => {
            if let Err(e) = validate(&plan) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Plan is valid");
        }
        Commands::Explain { plan } => {
            if let Err(e) = explain(&plan) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn base_config(exec: Option<String>, temp_prefix: Option<String>) -> Result<CompilerConfig, String> {
    let mut config = CompilerConfig::from_env();
    if let Some(exec) = exec {
        config.default_exec_type = lopir_core::config::parse_exec_type(&exec)
            .ok_or_else(|| format!("unknown exec type '{}'", exec))?;
    }
    if let Some(prefix) = temp_prefix {
        config.temp_var_prefix = prefix;
    }
    Ok(config)
}

fn lower(
    plan_path: &PathBuf,
    exec: Option<String>,
    temp_prefix: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(plan_path)?;
    let config = base_config(exec, temp_prefix)?;
    let mut parsed = parse_yaml_plan_with(&yaml_content, config)?;
    let lowered = lower_plan(&mut parsed.graph, &parsed.config)?;

    for inst in &lowered.instructions {
        println!("{}", inst);
    }
    Ok(())
}

fn validate(plan_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(plan_path)?;
    let _ = parse_yaml_plan_with(&yaml_content, CompilerConfig::from_env())?;
    Ok(())
}

fn explain(plan_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(plan_path)?;
    let mut parsed = parse_yaml_plan_with(&yaml_content, CompilerConfig::from_env())?;
    let lowered = lower_plan(&mut parsed.graph, &parsed.config)?;

    println!("Plan");
    println!("====");
    println!();
    println!("Nodes: {}", parsed.graph.len());
    println!();
    for (id, node) in parsed.graph.iter() {
        let label = node.output_params.label.as_deref().unwrap_or("?");
        println!(
            "  {} {} [{}] -> {} ({} {}, jobs {})",
            id,
            node.kind.name(),
            node.props.exec_type,
            label,
            node.data_type,
            node.value_type,
            node.props.compatible_jobs
        );
    }
    println!();
    println!("Instructions:");
    for inst in &lowered.instructions {
        println!("  {}", inst);
    }
    println!();
    println!("Manifest:");
    println!("  Id: {}", lowered.manifest.id);
    println!("  Instructions hash: {}", lowered.manifest.instructions_hash);
    println!("  Compat hash: {}", lowered.manifest.compat_hash);
    println!("  Compiler: {}", lowered.manifest.compiler_version);

    Ok(())
}
