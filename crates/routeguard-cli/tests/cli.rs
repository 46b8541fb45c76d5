//! End-to-end CLI tests: run the binary against inline fixtures in a temp
//! directory and check exit codes, generated units, and the JSON report.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn routeguard_cmd() -> Command {
    Command::cargo_bin("routeguard").expect("routeguard binary not found")
}

const SYMBOLS: &str = r#"{
    "assembly": "Acme",
    "declarations": [
        {
            "kind": "method",
            "full_name": "Acme.Web.Endpoints.EndpointPing.Execute",
            "containing_type": "Acme.Web.Endpoints.EndpointPing",
            "namespace_path": ["Acme", "Web", "Endpoints"],
            "source_file": "Web/Endpoints/EndpointPing.cs",
            "span": {"path": "Web/Endpoints/EndpointPing.cs", "line": 12},
            "modifiers": ["public", "static", "partial"],
            "method_name": "Execute",
            "annotation": {"endpoint": {
                "path": "GET /api/v1/ping",
                "auth_policy_ref": "Acme.Web.AuthPolicies.AuthPolicyAnonymous",
                "activity": {"importance": "low", "step": "finish"}
            }}
        },
        {
            "kind": "method",
            "full_name": "Acme.Web.AuthPolicies.AuthPolicyAnonymous.Configure",
            "containing_type": "Acme.Web.AuthPolicies.AuthPolicyAnonymous",
            "namespace_path": ["Acme", "Web", "AuthPolicies"],
            "source_file": "Web/AuthPolicies/AuthPolicyAnonymous.cs",
            "span": {"path": "Web/AuthPolicies/AuthPolicyAnonymous.cs", "line": 6},
            "modifiers": ["public", "static", "partial"],
            "method_name": "Configure",
            "annotation": {"auth_policy": {}}
        }
    ]
}"#;

const CONFIG: &str = "[web]\napi_base_path_prefix = \"/api/v1\"\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(symbols: &str, config: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::write(dir.path().join("symbols.json"), symbols).expect("write symbols");
        if !config.is_empty() {
            std::fs::write(dir.path().join("routeguard.toml"), config).expect("write config");
        }
        Fixture { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn generate(&self) -> Command {
        let mut cmd = routeguard_cmd();
        cmd.current_dir(self.path())
            .arg("generate")
            .arg("--symbols")
            .arg("symbols.json");
        cmd
    }

    fn report(&self) -> Value {
        let text = std::fs::read_to_string(
            self.path().join("artifacts/routeguard/report.json"),
        )
        .expect("read report");
        serde_json::from_str(&text).expect("parse report")
    }
}

#[test]
fn generate_writes_units_and_report_on_success() {
    let fixture = Fixture::new(SYMBOLS, CONFIG);
    fixture
        .generate()
        .assert()
        .success()
        .stderr(predicate::str::contains("2 registered, 0 error(s)"));

    let endpoint_unit = fixture
        .path()
        .join("generated/GeneratedEndpointMappings_MapEndpoints_Acme.g.cs");
    let source = std::fs::read_to_string(&endpoint_unit).expect("read endpoint unit");
    assert!(source.contains("app.MapGet("));
    assert!(source.contains("\"/api/v1/ping\""));
    assert!(source.contains(".RequireAuthorization( \"Anonymous\" );"));

    let policy_unit = fixture
        .path()
        .join("generated/GeneratedAuthPolicyMappings_MapAuthPolicies_Acme.g.cs");
    let source = std::fs::read_to_string(&policy_unit).expect("read policy unit");
    assert!(source.contains("options.AddPolicy("));
    assert!(source.contains("public const string Id = \"Anonymous\";"));

    let report = fixture.report();
    assert_eq!(report["schema"], "routeguard.report.v1");
    assert_eq!(report["data"]["assembly"], "Acme");
    assert_eq!(report["data"]["entries_registered"], 2);
    assert_eq!(report["data"]["counts"]["error"], 0);
}

#[test]
fn rule_violations_exit_two_and_emit_no_units() {
    let symbols = SYMBOLS.replace("GET /api/v1/ping", "FETCH /api/v1/ping");
    let fixture = Fixture::new(&symbols, CONFIG);
    fixture
        .generate()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("endpoint.route_shape"))
        .stderr(predicate::str::contains("unsupported_method"));

    // The policy declaration still registers; only the endpoint unit is gone.
    assert!(
        !fixture
            .path()
            .join("generated/GeneratedEndpointMappings_MapEndpoints_Acme.g.cs")
            .exists()
    );
    assert!(
        fixture
            .path()
            .join("generated/GeneratedAuthPolicyMappings_MapAuthPolicies_Acme.g.cs")
            .exists()
    );

    let report = fixture.report();
    assert_eq!(report["data"]["counts"]["error"], 1);
    assert_eq!(report["diagnostics"][0]["severity"], "error");
}

#[test]
fn config_errors_abort_the_pass() {
    let fixture = Fixture::new(SYMBOLS, "[web]\napi_base_path_prefix = \"/api/v1/\"\n");
    fixture
        .generate()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config.settings"));

    let report = fixture.report();
    assert_eq!(report["diagnostics"].as_array().unwrap().len(), 1);
    assert_eq!(report["diagnostics"][0]["code"], "prefix_trailing_slash");
    assert_eq!(report["units"].as_array().unwrap().len(), 0);
}

#[test]
fn missing_symbol_table_is_a_runtime_failure_with_a_report() {
    let fixture = Fixture::new(SYMBOLS, CONFIG);
    let mut cmd = routeguard_cmd();
    cmd.current_dir(fixture.path())
        .arg("generate")
        .arg("--symbols")
        .arg("nope.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("routeguard error"));

    let report = fixture.report();
    assert_eq!(report["diagnostics"][0]["rule_id"], "tool.runtime");
    assert_eq!(report["diagnostics"][0]["code"], "runtime_error");
}

#[test]
fn repeated_runs_produce_identical_units() {
    let fixture = Fixture::new(SYMBOLS, CONFIG);
    fixture.generate().assert().success();
    let unit_path = fixture
        .path()
        .join("generated/GeneratedEndpointMappings_MapEndpoints_Acme.g.cs");
    let first = std::fs::read(&unit_path).expect("first run output");

    fixture.generate().assert().success();
    let second = std::fs::read(&unit_path).expect("second run output");
    assert_eq!(first, second);
}

#[test]
fn verbose_shows_inclusion_traces() {
    let fixture = Fixture::new(SYMBOLS, CONFIG);
    fixture
        .generate()
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("registration.fragment"));
}

#[test]
fn explain_known_and_unknown_identifiers() {
    routeguard_cmd()
        .args(["explain", "endpoint.location"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route-derived type location"))
        .stdout(predicate::str::contains("Remediation"));

    routeguard_cmd()
        .args(["explain", "wrong_type_for_path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route-derived type location"));

    routeguard_cmd()
        .args(["explain", "bogus.rule"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown rule_id or code"));
}

#[test]
fn help_names_both_subcommands() {
    routeguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("explain"));
}
