//! The auth-scheme rule pipeline. Mirrors the policy pipeline with the
//! scheme namespace, prefix, and fragment shape.

use super::Validated;
use super::auth_policy::check_short_name;
use super::common::{self, check_method_name, check_placement, check_structural, resolve_group_key};
use crate::fragment;
use crate::model::{AnnotatedDecl, AuthSchemeAnnotation};
use crate::policy::ValidationConfig;
use crate::registry::Entry;
use routeguard_types::{Diagnostic, ids};

pub(super) fn validate(
    annotated: &AnnotatedDecl,
    scheme: &AuthSchemeAnnotation,
    cfg: &ValidationConfig,
) -> Validated {
    let mut diagnostics = Vec::new();
    match run(annotated, scheme, cfg) {
        Ok(entry) => {
            diagnostics.push(common::info(
                ids::RULE_REGISTRATION,
                ids::CODE_FRAGMENT_INCLUDED,
                format!(
                    "registered auth scheme {} in group {}",
                    entry.short_name.as_deref().unwrap_or(""),
                    entry.group
                ),
                annotated.decl.span.clone(),
            ));
            Validated {
                entry: Some(entry),
                diagnostics,
            }
        }
        Err(diagnostic) => {
            diagnostics.push(diagnostic);
            Validated {
                entry: None,
                diagnostics,
            }
        }
    }
}

fn run(
    annotated: &AnnotatedDecl,
    scheme: &AuthSchemeAnnotation,
    cfg: &ValidationConfig,
) -> Result<Entry, Diagnostic> {
    check_structural(annotated, ids::RULE_SCHEME_STRUCTURAL)?;
    check_placement(annotated, cfg, "Web.AuthSchemes", ids::RULE_SCHEME_PLACEMENT)?;
    let short_name = check_short_name(annotated, "AuthScheme", ids::RULE_SCHEME_NAMING)?;
    check_method_name(annotated, "Configure", ids::RULE_SCHEME_METHOD_NAME)?;
    let group = resolve_group_key(
        scheme.group_name.as_deref(),
        format!("MapAuthSchemes_{}", cfg.assembly_ident()),
        ids::RULE_SCHEME_GROUP_KEY,
        annotated.field_span("group_name"),
    )?;

    let fragment = fragment::auth_scheme_fragment(annotated, &short_name);
    let companion = fragment::id_constant_fragment(annotated, &short_name);
    Ok(Entry {
        group,
        short_name: Some(short_name),
        fragment,
        companion_fragment: Some(companion),
        span: annotated.decl.span.clone(),
    })
}
