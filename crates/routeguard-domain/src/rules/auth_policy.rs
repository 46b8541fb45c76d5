//! The auth-policy rule pipeline.

use super::Validated;
use super::common::{
    self, check_method_name, check_placement, check_structural, error, resolve_group_key,
};
use crate::fragment;
use crate::model::{AnnotatedDecl, AuthPolicyAnnotation};
use crate::policy::ValidationConfig;
use crate::registry::Entry;
use routeguard_types::{Diagnostic, ids};

pub(super) fn validate(
    annotated: &AnnotatedDecl,
    policy: &AuthPolicyAnnotation,
    cfg: &ValidationConfig,
) -> Validated {
    let mut diagnostics = Vec::new();
    match run(annotated, policy, cfg) {
        Ok(entry) => {
            diagnostics.push(common::info(
                ids::RULE_REGISTRATION,
                ids::CODE_FRAGMENT_INCLUDED,
                format!(
                    "registered auth policy {} in group {}",
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
    policy: &AuthPolicyAnnotation,
    cfg: &ValidationConfig,
) -> Result<Entry, Diagnostic> {
    check_structural(annotated, ids::RULE_POLICY_STRUCTURAL)?;
    check_placement(annotated, cfg, "Web.AuthPolicies", ids::RULE_POLICY_PLACEMENT)?;
    let short_name = check_short_name(
        annotated,
        "AuthPolicy",
        ids::RULE_POLICY_NAMING,
    )?;
    check_method_name(annotated, "Configure", ids::RULE_POLICY_METHOD_NAME)?;
    let group = resolve_group_key(
        policy.group_name.as_deref(),
        format!("MapAuthPolicies_{}", cfg.assembly_ident()),
        ids::RULE_POLICY_GROUP_KEY,
        annotated.field_span("group_name"),
    )?;

    let fragment = fragment::auth_policy_fragment(annotated, &short_name);
    let companion = fragment::id_constant_fragment(annotated, &short_name);
    Ok(Entry {
        group,
        short_name: Some(short_name),
        fragment,
        companion_fragment: Some(companion),
        span: annotated.decl.span.clone(),
    })
}

/// The type name is `<Prefix><ShortName>`; the suffix is what actually gets
/// registered, so it must be present and must itself be a valid identifier.
pub(super) fn check_short_name(
    annotated: &AnnotatedDecl,
    prefix: &str,
    rule_id: &str,
) -> Result<String, Diagnostic> {
    let simple = annotated.decl.type_simple_name();
    let Some(short_name) = simple.strip_prefix(prefix) else {
        return Err(error(
            rule_id,
            ids::CODE_MISSING_NAME_PREFIX,
            format!("the type {simple} must start with {prefix}"),
            annotated.decl.span.clone(),
        ));
    };
    if !routeguard_types::is_valid_identifier(short_name) {
        return Err(error(
            rule_id,
            ids::CODE_INVALID_SHORT_NAME,
            format!("the name '{short_name}' derived from {simple} is not a valid identifier"),
            annotated.decl.span.clone(),
        ));
    }
    Ok(short_name.to_string())
}
