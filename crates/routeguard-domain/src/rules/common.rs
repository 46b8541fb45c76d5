//! Helpers shared by the per-kind rule pipelines.

use crate::model::{AnnotatedDecl, DeclKind, Modifier};
use crate::policy::ValidationConfig;
use routeguard_types::{Diagnostic, GroupKey, Location, Severity, ids};
use serde_json::Value as JsonValue;

pub(crate) fn error(
    rule_id: &str,
    code: &str,
    message: String,
    location: Option<Location>,
) -> Diagnostic {
    diagnostic(Severity::Error, rule_id, code, message, location, None)
}

pub(crate) fn warning(
    rule_id: &str,
    code: &str,
    message: String,
    location: Option<Location>,
    help: Option<String>,
) -> Diagnostic {
    diagnostic(Severity::Warning, rule_id, code, message, location, help)
}

pub(crate) fn info(rule_id: &str, code: &str, message: String, location: Option<Location>) -> Diagnostic {
    diagnostic(Severity::Info, rule_id, code, message, location, None)
}

pub(crate) fn diagnostic(
    severity: Severity,
    rule_id: &str,
    code: &str,
    message: String,
    location: Option<Location>,
    help: Option<String>,
) -> Diagnostic {
    Diagnostic {
        severity,
        rule_id: rule_id.to_string(),
        code: code.to_string(),
        message,
        location,
        help,
        fingerprint: None,
        data: JsonValue::Null,
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).unwrap_or("").is_empty()
}

/// Required modifiers. The containing type must be public and partial
/// (the generated unit extends it from another file); annotated methods must
/// additionally be static (they are referenced without an instance).
pub(crate) fn check_structural(annotated: &AnnotatedDecl, rule_id: &str) -> Result<(), Diagnostic> {
    let decl = &annotated.decl;
    if !decl.has_modifier(Modifier::Partial) {
        return Err(error(
            rule_id,
            ids::CODE_TYPE_NOT_PARTIAL,
            format!("the type {} must be a partial class", decl.containing_type),
            decl.span.clone(),
        ));
    }
    if !decl.has_modifier(Modifier::Public) {
        let (code, message) = match decl.kind {
            DeclKind::Type => (
                ids::CODE_TYPE_NOT_PUBLIC,
                format!("the type {} must be public", decl.containing_type),
            ),
            DeclKind::Method => (
                ids::CODE_METHOD_NOT_PUBLIC,
                format!(
                    "the method {} must be public",
                    decl.method_name.as_deref().unwrap_or("<unnamed>")
                ),
            ),
        };
        return Err(error(rule_id, code, message, decl.span.clone()));
    }
    if decl.kind == DeclKind::Method && !decl.has_modifier(Modifier::Static) {
        return Err(error(
            rule_id,
            ids::CODE_METHOD_NOT_STATIC,
            format!(
                "the method {} must be static",
                decl.method_name.as_deref().unwrap_or("<unnamed>")
            ),
            decl.span.clone(),
        ));
    }
    Ok(())
}

/// The declaration must live in its kind's reserved namespace.
pub(crate) fn check_placement(
    annotated: &AnnotatedDecl,
    cfg: &ValidationConfig,
    reserved: &str,
    rule_id: &str,
) -> Result<(), Diagnostic> {
    let required = format!("{}.{reserved}.", cfg.assembly_name);
    if !annotated.decl.containing_type.starts_with(&required) {
        return Err(error(
            rule_id,
            ids::CODE_OUTSIDE_RESERVED_NAMESPACE,
            format!(
                "the type {} must be in the namespace {}.{reserved}",
                annotated.decl.containing_type, cfg.assembly_name
            ),
            annotated.decl.span.clone(),
        ));
    }
    Ok(())
}

/// The annotated method is called by a fixed literal name.
pub(crate) fn check_method_name(
    annotated: &AnnotatedDecl,
    expected: &str,
    rule_id: &str,
) -> Result<(), Diagnostic> {
    let actual = annotated.decl.method_name.as_deref().unwrap_or("");
    if actual != expected {
        return Err(error(
            rule_id,
            ids::CODE_WRONG_METHOD_NAME,
            format!("the method '{actual}' must be named '{expected}'"),
            annotated.decl.span.clone(),
        ));
    }
    Ok(())
}

/// Resolve the generation group: explicit override when present, otherwise
/// the kind-namespaced default. Either way the result must be a valid
/// identifier, since it becomes the generated method name.
pub(crate) fn resolve_group_key(
    explicit: Option<&str>,
    default: String,
    rule_id: &str,
    span: Option<Location>,
) -> Result<GroupKey, Diagnostic> {
    let candidate = match explicit {
        Some(name) if !name.trim().is_empty() => name,
        _ => &default,
    };
    GroupKey::new(candidate).ok_or_else(|| {
        error(
            rule_id,
            ids::CODE_INVALID_GROUP_KEY,
            format!("the group name '{candidate}' is not a valid identifier"),
            span,
        )
    })
}
