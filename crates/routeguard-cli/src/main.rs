//! CLI entry point for routeguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `routeguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use routeguard_app::{
    ExplainOutput, GenerateInput, format_explanation, format_not_found, generate_exit_code,
    render_text, run_explain, run_generate, runtime_error_report, serialize_report, write_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "routeguard",
    version,
    about = "Route convention guard and registration generator for annotated web services"
)]
struct Cli {
    /// Path to routeguard config TOML.
    #[arg(long, default_value = "routeguard.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a symbol table and write registration units plus a report.
    Generate {
        /// Path to the symbol-table JSON produced by the host build.
        #[arg(long)]
        symbols: Utf8PathBuf,

        /// Directory to write the generated source units into.
        #[arg(long, default_value = "generated")]
        out_dir: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/routeguard/report.json")]
        report_out: Utf8PathBuf,

        /// Also print informational diagnostics.
        #[arg(long)]
        verbose: bool,
    },

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g. "endpoint.location") or code (e.g. "wrong_type_for_path").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate {
            ref symbols,
            ref out_dir,
            ref report_out,
            verbose,
        } => cmd_generate(&cli, symbols, out_dir, report_out, verbose),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_generate(
    cli: &Cli,
    symbols: &Utf8PathBuf,
    out_dir: &Utf8PathBuf,
    report_out: &Utf8PathBuf,
    verbose: bool,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let symbols_text = std::fs::read_to_string(symbols)
            .with_context(|| format!("read symbol table {symbols}"))?;
        // Missing config file is allowed; defaults apply.
        let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let output = run_generate(GenerateInput {
            symbols_text: &symbols_text,
            config_text: &config_text,
        })?;

        std::fs::create_dir_all(out_dir).with_context(|| format!("create {out_dir}"))?;
        for unit in &output.report.units {
            let path = out_dir.join(format!("{}.g.cs", unit.name));
            std::fs::write(&path, &unit.source).with_context(|| format!("write {path}"))?;
        }

        let bytes = serialize_report(&output.report)?;
        write_report(report_out, &bytes).context("write report json")?;

        eprint!("{}", render_text(&output.report, verbose));
        Ok(generate_exit_code(&output.report))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let report = runtime_error_report(&err);
            if let Ok(bytes) = serialize_report(&report) {
                let _ = write_report(report_out, &bytes);
            }
            eprintln!("routeguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            println!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprintln!("{}", format_not_found(&identifier, available_rule_ids));
            std::process::exit(1);
        }
    }
}
