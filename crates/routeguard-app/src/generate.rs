//! The `generate` use case: validate a symbol table and produce registration
//! units plus the report envelope.

use anyhow::Context;
use routeguard_domain::model::SymbolTable;
use routeguard_settings::SettingsError;
use routeguard_types::{
    Diagnostic, GenerateData, GenerateReport, SCHEMA_REPORT_V1, Severity, SeverityCounts,
    ToolMeta, ids,
};
use time::OffsetDateTime;

pub const TOOL_NAME: &str = "routeguard";

/// Input for the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Symbol-table JSON produced by the host build.
    pub symbols_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
}

/// Output from the generate use case. Emitted units travel inside the report.
#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub report: GenerateReport,
}

/// Run the generate use case: parse inputs, resolve config, evaluate, emit.
///
/// Configuration errors are not process failures: they become a single
/// `config.settings` diagnostic and an empty unit list, so the host build
/// surfaces them like any other rule violation. An `Err` here means the tool
/// itself could not run (e.g. unreadable symbol table).
pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let started_at = OffsetDateTime::now_utc();

    let table: SymbolTable =
        serde_json::from_str(input.symbols_text).context("parse symbol table json")?;

    let cfg = if input.config_text.trim().is_empty() {
        routeguard_settings::RouteguardConfigV1::default()
    } else {
        match routeguard_settings::parse_config_toml(input.config_text) {
            Ok(cfg) => cfg,
            Err(err) => return Ok(config_failure(&table, err, started_at)),
        }
    };
    let resolved = match routeguard_settings::resolve_config(&cfg, &table.assembly) {
        Ok(resolved) => resolved,
        Err(err) => return Ok(config_failure(&table, err, started_at)),
    };

    let domain_report = routeguard_domain::evaluate(&table, &resolved);
    let units = routeguard_emit::emit_units(&table.assembly, &domain_report.registries);

    let report = envelope(
        &table.assembly,
        domain_report.diagnostics,
        units,
        domain_report.declarations_scanned,
        domain_report.entries_registered,
        started_at,
    );
    Ok(GenerateOutput { report })
}

/// Exit code for a completed pass: rule errors fail the build, warnings do not.
pub fn generate_exit_code(report: &GenerateReport) -> i32 {
    if report.data.counts.error > 0 { 2 } else { 0 }
}

/// A report describing a tool failure, for hosts that consume reports even
/// when the process dies.
pub fn runtime_error_report(err: &anyhow::Error) -> GenerateReport {
    let now = OffsetDateTime::now_utc();
    let diagnostics = vec![fingerprinted(Diagnostic {
        severity: Severity::Error,
        rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: format!("{err:#}"),
        location: None,
        help: None,
        fingerprint: None,
        data: serde_json::Value::Null,
    })];
    envelope("", diagnostics, Vec::new(), 0, 0, now)
}

fn config_failure(
    table: &SymbolTable,
    err: SettingsError,
    started_at: OffsetDateTime,
) -> GenerateOutput {
    let diagnostics = vec![fingerprinted(Diagnostic {
        severity: Severity::Error,
        rule_id: ids::RULE_CONFIG_SETTINGS.to_string(),
        code: err.code().to_string(),
        message: err.to_string(),
        location: None,
        help: None,
        fingerprint: None,
        data: serde_json::Value::Null,
    })];
    // Declarations are counted but never validated: a broken config would
    // make every derived location unreliable.
    let report = envelope(
        &table.assembly,
        diagnostics,
        Vec::new(),
        table.declarations.len(),
        0,
        started_at,
    );
    GenerateOutput { report }
}

fn fingerprinted(mut diagnostic: Diagnostic) -> Diagnostic {
    diagnostic.fingerprint = Some(routeguard_domain::fingerprint::fingerprint_for(&diagnostic));
    diagnostic
}

fn envelope(
    assembly: &str,
    diagnostics: Vec<Diagnostic>,
    units: Vec<routeguard_types::EmittedUnit>,
    declarations_scanned: usize,
    entries_registered: usize,
    started_at: OffsetDateTime,
) -> GenerateReport {
    let counts = SeverityCounts::from_diagnostics(&diagnostics);
    GenerateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        data: GenerateData {
            assembly: assembly.to_string(),
            declarations_scanned: declarations_scanned as u32,
            entries_registered: entries_registered as u32,
            diagnostics_total: diagnostics.len() as u32,
            counts,
        },
        diagnostics,
        units,
    }
}
