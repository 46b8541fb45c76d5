//! Synthesis of registration source units from validated registries.
//!
//! One unit is produced per non-empty group per kind. Unit order follows the
//! registries' ordering (kinds in a fixed sequence, groups in key order,
//! entries in discovery order), so emission is reproducible run to run.

#![forbid(unsafe_code)]

mod source;

use routeguard_domain::registry::{Entry, GroupRegistry, RegistrySet};
use routeguard_types::{EmittedUnit, GroupKey, UnitKind};
use source::{banner, indent, join_fragments};

/// Synthesize every unit for one pass.
pub fn emit_units(assembly: &str, registries: &RegistrySet) -> Vec<EmittedUnit> {
    let mut units = Vec::new();
    emit_kind(assembly, UnitKind::Endpoints, &registries.endpoints, &mut units);
    emit_kind(assembly, UnitKind::AuthPolicies, &registries.auth_policies, &mut units);
    emit_kind(assembly, UnitKind::AuthSchemes, &registries.auth_schemes, &mut units);
    units
}

fn emit_kind(
    assembly: &str,
    kind: UnitKind,
    registry: &GroupRegistry,
    units: &mut Vec<EmittedUnit>,
) {
    for (group, entries) in registry.iter() {
        let name = format!("{}_{group}", class_name(kind));
        let source = render_unit(assembly, kind, group, entries);
        units.push(EmittedUnit {
            kind,
            group: group.clone(),
            name,
            source,
        });
    }
}

fn class_name(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Endpoints => "GeneratedEndpointMappings",
        UnitKind::AuthPolicies => "GeneratedAuthPolicyMappings",
        UnitKind::AuthSchemes => "GeneratedAuthSchemeMappings",
    }
}

fn render_unit(assembly: &str, kind: UnitKind, group: &GroupKey, entries: &[Entry]) -> String {
    let fragments = join_fragments(entries.iter().map(|e| e.fragment.as_str()));
    let body = match kind {
        UnitKind::Endpoints => {
            let signature = format!("public static void {group}(IEndpointRouteBuilder app)");
            format!("{signature}\n{{\n{}}}\n", indent(&fragments, 1))
        }
        UnitKind::AuthPolicies => {
            // Policy configurators hang off the authorization options builder.
            let signature = format!("public static void {group}(IServiceCollection services)");
            format!(
                "{signature}\n{{\n    services.AddAuthorization(options =>\n    {{\n{}    }});\n}}\n",
                indent(&fragments, 2)
            )
        }
        UnitKind::AuthSchemes => {
            let signature = format!("public static void {group}(IServiceCollection services)");
            format!("{signature}\n{{\n{}}}\n", indent(&fragments, 1))
        }
    };

    let mut out = String::from(banner());
    out.push_str(&format!(
        "namespace {assembly}.Generated\n{{\n    public static partial class {class}\n    {{\n{method}    }}\n}}\n",
        class = class_name(kind),
        method = indent(&body, 2),
    ));

    // Companion Id-constant partials extend the declaring types, so they sit
    // outside the generated namespace block.
    for entry in entries {
        if let Some(companion) = entry.companion_fragment.as_deref() {
            out.push('\n');
            out.push_str(companion);
        }
    }
    out
}
