//! Pass orchestration: validate every declaration and fold the outcomes into
//! per-kind registries.
//!
//! Declarations are independent, so validation runs in parallel; the fold is
//! sequential over the input order, which keeps diagnostics and per-group
//! entry order identical from run to run.

use crate::model::{Annotation, SymbolTable};
use crate::policy::ValidationConfig;
use crate::report::DomainReport;
use crate::rules::{self, Validated};
use crate::{fingerprint, registry::RegistrySet};
use rayon::prelude::*;

pub fn evaluate(table: &SymbolTable, cfg: &ValidationConfig) -> DomainReport {
    let validated: Vec<Validated> = table
        .declarations
        .par_iter()
        .map(|annotated| rules::validate(annotated, cfg))
        .collect();

    let mut registries = RegistrySet::default();
    let mut diagnostics = Vec::new();
    for (annotated, outcome) in table.declarations.iter().zip(validated) {
        diagnostics.extend(outcome.diagnostics);
        if let Some(entry) = outcome.entry {
            let registry = match &annotated.annotation {
                Annotation::Endpoint(_) => &mut registries.endpoints,
                Annotation::AuthPolicy(_) => &mut registries.auth_policies,
                Annotation::AuthScheme(_) => &mut registries.auth_schemes,
            };
            registry.insert(entry);
        }
    }
    fingerprint::apply(&mut diagnostics);

    let entries_registered = registries.entry_count();
    DomainReport {
        registries,
        diagnostics,
        declarations_scanned: table.declarations.len(),
        entries_registered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SymbolTable;
    use crate::test_support::{
        endpoint_annotation, endpoint_decl, policy_decl, scheme_decl, test_config,
    };
    use routeguard_types::Severity;

    fn table() -> SymbolTable {
        SymbolTable {
            assembly: "Acme".to_string(),
            declarations: vec![
                endpoint_decl("Acme", "", "Ping", endpoint_annotation("GET /api/v1/ping")),
                endpoint_decl("Acme", "", "Ping", endpoint_annotation("FETCH /api/v1/ping")),
                policy_decl("Acme", "AuthPolicyAdminOnly"),
                scheme_decl("Acme", "AuthSchemeBearer"),
            ],
        }
    }

    #[test]
    fn one_bad_declaration_does_not_block_the_rest() {
        let report = evaluate(&table(), &test_config("Acme"));
        assert_eq!(report.declarations_scanned, 4);
        assert_eq!(report.entries_registered, 3);
        assert_eq!(report.registries.endpoints.entry_count(), 1);
        assert_eq!(report.registries.auth_policies.entry_count(), 1);
        assert_eq!(report.registries.auth_schemes.entry_count(), 1);

        let errors = report
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn diagnostics_follow_declaration_order_and_are_fingerprinted() {
        let report = evaluate(&table(), &test_config("Acme"));
        // declaration 0 registers (Info), declaration 1 fails (Error)
        assert_eq!(report.diagnostics[0].severity, Severity::Info);
        assert_eq!(report.diagnostics[1].severity, Severity::Error);
        assert!(report.diagnostics.iter().all(|d| d.fingerprint.is_some()));
    }

    #[test]
    fn shuffled_input_differs_only_by_discovery_order() {
        let forward = table();
        let mut backward = forward.clone();
        backward.declarations.reverse();
        let cfg = test_config("Acme");

        let a = evaluate(&forward, &cfg);
        let b = evaluate(&backward, &cfg);

        // Same diagnostic multiset (fingerprints are input-deterministic).
        let prints = |r: &crate::report::DomainReport| {
            let mut v: Vec<String> = r
                .diagnostics
                .iter()
                .map(|d| d.fingerprint.clone().unwrap())
                .collect();
            v.sort();
            v
        };
        assert_eq!(prints(&a), prints(&b));
        assert_eq!(a.entries_registered, b.entries_registered);
        assert_eq!(a.registries, b.registries); // one entry per group here
    }

    #[test]
    fn per_group_entry_order_follows_discovery_order() {
        let ping = endpoint_decl("Acme", "", "Ping", endpoint_annotation("GET /api/v1/ping"));
        let pong = endpoint_decl("Acme", "", "Pong", endpoint_annotation("GET /api/v1/pong"));
        let cfg = test_config("Acme");

        let order_of = |declarations: Vec<crate::model::AnnotatedDecl>| {
            let report = evaluate(
                &SymbolTable {
                    assembly: "Acme".to_string(),
                    declarations,
                },
                &cfg,
            );
            let (_, entries) = report.registries.endpoints.iter().next().unwrap();
            entries
                .iter()
                .map(|e| e.fragment.contains("/api/v1/ping"))
                .collect::<Vec<bool>>()
        };

        assert_eq!(order_of(vec![ping.clone(), pong.clone()]), [true, false]);
        assert_eq!(order_of(vec![pong, ping]), [false, true]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let table = table();
        let cfg = test_config("Acme");
        let first = evaluate(&table, &cfg);
        let second = evaluate(&table, &cfg);
        assert_eq!(first.registries, second.registries);
        assert_eq!(first.diagnostics, second.diagnostics);
    }
}
