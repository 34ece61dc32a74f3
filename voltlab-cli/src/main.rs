//! VoltLab CLI - circuit simulation and reporting from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

use voltlab::explain::{generate_current_flow_explanation, generate_simulation_steps};
use voltlab::report::generate_report;
use voltlab::templates::{builtin_templates, template_by_id};
use voltlab::{CircuitDocument, SimulationOutcome, VoltLabCore};

#[derive(Parser)]
#[command(name = "voltlab")]
#[command(about = "Circuit simulation and reporting tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a circuit file and print node voltages and currents
    Simulate {
        /// Path to a circuit JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if the result carries these diagnostics
        #[arg(long, value_enum)]
        fail_on: Option<FailOn>,
    },

    /// Render a plain-text design report for a circuit file
    Report {
        /// Path to a circuit JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Free-text notes to include in the report
        #[arg(long)]
        notes: Option<String>,
    },

    /// Print a step-by-step walkthrough of a simulated circuit
    Explain {
        /// Path to a circuit JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List built-in circuit templates
    Templates {
        /// Show template descriptions
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a built-in template as a circuit JSON file
    New {
        /// Template id (see `templates`)
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

#[derive(Clone, ValueEnum)]
enum FailOn {
    /// Fail only on errors
    Errors,
    /// Fail on errors or warnings
    Warnings,
}

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr so machine-readable stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Simulate {
            file,
            format,
            fail_on,
        } => handle_simulate(&file, format, fail_on),
        Commands::Report {
            file,
            output,
            notes,
        } => handle_report(&file, output.as_deref(), notes.as_deref()),
        Commands::Explain { file } => handle_explain(&file),
        Commands::Templates { verbose } => {
            handle_templates(verbose);
            0
        }
        Commands::New { template, output } => handle_new(&template, output.as_deref()),
    };

    process::exit(exit_code);
}

fn handle_simulate(file: &Path, format: OutputFormat, fail_on: Option<FailOn>) -> i32 {
    let outcome = match VoltLabCore::simulate_file(file) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match format {
        OutputFormat::Human => output_human(&outcome),
        OutputFormat::Json => output_json(&outcome),
    }

    match fail_on {
        Some(FailOn::Errors) if outcome.has_errors() => 1,
        Some(FailOn::Warnings) if outcome.has_errors() || outcome.has_warnings() => 1,
        _ => 0,
    }
}

fn output_human(outcome: &SimulationOutcome) {
    println!("\nFile: {}", outcome.file.display());
    println!("{}", "─".repeat(60));

    if !outcome.result.errors.is_empty() {
        println!("\n  ERRORS:");
        for error in &outcome.result.errors {
            println!("    - {}", error);
        }
    }
    if !outcome.result.warnings.is_empty() {
        println!("\n  WARNINGS:");
        for warning in &outcome.result.warnings {
            println!("    - {}", warning);
        }
    }

    println!("\n  Node Voltages:");
    if outcome.result.node_voltages.is_empty() {
        println!("    (none)");
    }
    for (node, voltage) in &outcome.result.node_voltages {
        println!("    {}: {:.4} V", node, voltage);
    }

    println!("\n  Component Currents:");
    if outcome.result.component_currents.is_empty() {
        println!("    (none)");
    }
    for (id, current) in &outcome.result.component_currents {
        println!("    {}: {:.6} A", id, current);
    }

    println!("\n  Summary:");
    println!("    Nodes:      {}", outcome.stats.nodes);
    println!("    Components: {}", outcome.stats.components);
    println!("    Wires:      {}", outcome.stats.wires);
    println!("    Errors:     {}", outcome.stats.errors);
    println!("    Warnings:   {}", outcome.stats.warnings);
}

fn output_json(outcome: &SimulationOutcome) {
    let output = serde_json::json!({
        "file": outcome.file.display().to_string(),
        "result": outcome.result,
        "stats": outcome.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_report(file: &Path, output: Option<&Path>, notes: Option<&str>) -> i32 {
    let document = match CircuitDocument::load(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let result = VoltLabCore::simulate_document(&document);
    let report = generate_report(&document.components, &document.wires, Some(&result), notes);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, report) {
                eprintln!("Error: {}", e);
                return 1;
            }
            println!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }
    0
}

fn handle_explain(file: &Path) -> i32 {
    let document = match CircuitDocument::load(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let result = VoltLabCore::simulate_document(&document);
    let steps = generate_simulation_steps(&document.components, &document.wires, &result);

    for step in &steps {
        println!("Step {}: {}", step.id + 1, step.title);
        println!("  {}", step.description);
        println!();
    }
    print!(
        "{}",
        generate_current_flow_explanation(&document.components, &document.wires, &result)
    );
    0
}

fn handle_templates(verbose: bool) {
    println!("Available circuit templates:\n");
    for template in builtin_templates() {
        println!("  {}", template.id);
        println!("    {}", template.name);
        if verbose {
            println!("    {}", template.description);
        }
        println!();
    }
}

fn handle_new(template_id: &str, output: Option<&Path>) -> i32 {
    let Some(template) = template_by_id(template_id) else {
        eprintln!("Error: unknown template '{}' (see `templates`)", template_id);
        return 1;
    };
    let document = CircuitDocument::new(template.components, template.wires);
    let json = match document.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, json) {
                eprintln!("Error: {}", e);
                return 1;
            }
            println!("Circuit written to {}", path.display());
        }
        None => println!("{}", json),
    }
    0
}
