//! Report serialization and terminal rendering.

use anyhow::Context;
use camino::Utf8Path;
use routeguard_types::{Diagnostic, GenerateReport, Severity};

pub fn serialize_report(report: &GenerateReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn write_report(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}

/// One diagnostic per line, plus a summary tail. Info lines are elided unless
/// `verbose` is set; they exist for report consumers, not terminals.
pub fn render_text(report: &GenerateReport, verbose: bool) -> String {
    let mut out = String::new();
    for diagnostic in &report.diagnostics {
        if diagnostic.severity == Severity::Info && !verbose {
            continue;
        }
        out.push_str(&render_line(diagnostic));
        out.push('\n');
    }
    let counts = report.data.counts;
    out.push_str(&format!(
        "{}: {} declaration(s), {} registered, {} error(s), {} warning(s)\n",
        report.tool.name,
        report.data.declarations_scanned,
        report.data.entries_registered,
        counts.error,
        counts.warning,
    ));
    out
}

fn render_line(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    let at = diagnostic
        .location
        .as_ref()
        .map(|loc| match loc.line {
            Some(line) => format!(" at {}:{line}", loc.path.as_str()),
            None => format!(" at {}", loc.path.as_str()),
        })
        .unwrap_or_default();
    let help = diagnostic
        .help
        .as_deref()
        .map(|h| format!("\n  help: {h}"))
        .unwrap_or_default();
    format!(
        "{severity}[{}/{}]{at}: {}{help}",
        diagnostic.rule_id, diagnostic.code, diagnostic.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GenerateInput, run_generate};

    fn report_with_warning() -> GenerateReport {
        let symbols = r#"{
            "assembly": "Acme",
            "declarations": [{
                "kind": "method",
                "full_name": "Acme.Web.Endpoints.ParamId.EndpointCancel.Execute",
                "containing_type": "Acme.Web.Endpoints.ParamId.EndpointCancel",
                "namespace_path": ["Acme", "Web", "Endpoints", "ParamId"],
                "source_file": "Web/Endpoints/ParamId/EndpointCancel.cs",
                "span": {"path": "Web/Endpoints/ParamId/EndpointCancel.cs", "line": 7},
                "modifiers": ["public", "static", "partial"],
                "method_name": "Execute",
                "annotation": {"endpoint": {
                    "path": "POST /api/v1/{id}/cancel",
                    "auth_policy_ref": "Acme.Web.AuthPolicies.AuthPolicyAdminOnly",
                    "activity": {"importance": "high", "step": "finish"}
                }}
            }]
        }"#;
        run_generate(GenerateInput {
            symbols_text: symbols,
            config_text: "[web]\napi_base_path_prefix = \"/api/v1\"\n",
        })
        .unwrap()
        .report
    }

    #[test]
    fn text_rendering_shows_warnings_and_hides_info_by_default() {
        let report = report_with_warning();
        let text = render_text(&report, false);
        assert!(text.contains("warning[endpoint.path_params/parameter_in_path]"));
        assert!(text.contains("at Web/Endpoints/ParamId/EndpointCancel.cs:"));
        assert!(text.contains("help:"));
        assert!(!text.contains("info["));
        assert!(text.contains("1 registered, 0 error(s), 1 warning(s)"));

        let verbose = render_text(&report, true);
        assert!(verbose.contains("info[registration.fragment/fragment_included]"));
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = report_with_warning();
        let bytes = serialize_report(&report).unwrap();
        let parsed: GenerateReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("nested/report.json"))
            .unwrap();
        write_report(&path, b"{}").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }
}
