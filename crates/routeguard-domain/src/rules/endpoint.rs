//! The endpoint rule pipeline.
//!
//! Checks run in a fixed order and stop at the first failure, so one
//! declaration never reports contradictory diagnostics. The path-parameter
//! rule is the one advisory exception: it warns and processing continues.

use super::Validated;
use super::common::{
    self, check_method_name, check_placement, check_structural, error, is_blank,
    resolve_group_key,
};
use crate::fragment;
use crate::location;
use crate::model::{AnnotatedDecl, EndpointAnnotation};
use crate::policy::ValidationConfig;
use crate::registry::Entry;
use crate::route::{self, RouteParseError};
use routeguard_types::{Diagnostic, ids};
use serde_json::json;

pub(super) fn validate(
    annotated: &AnnotatedDecl,
    endpoint: &EndpointAnnotation,
    cfg: &ValidationConfig,
) -> Validated {
    let mut diagnostics = Vec::new();
    match run(annotated, endpoint, cfg, &mut diagnostics) {
        Ok(entry) => {
            diagnostics.push(common::info(
                ids::RULE_REGISTRATION,
                ids::CODE_FRAGMENT_INCLUDED,
                format!(
                    "registered {} -> {}.Execute in group {}",
                    endpoint.path.trim(),
                    annotated.decl.containing_type,
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
    endpoint: &EndpointAnnotation,
    cfg: &ValidationConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Entry, Diagnostic> {
    check_structural(annotated, ids::RULE_ENDPOINT_STRUCTURAL)?;
    check_placement(annotated, cfg, "Web.Endpoints", ids::RULE_ENDPOINT_PLACEMENT)?;

    if cfg.require_activity && endpoint.activity.is_none() {
        return Err(error(
            ids::RULE_ENDPOINT_ACTIVITY,
            ids::CODE_MISSING_ACTIVITY,
            format!(
                "the method {} must carry the activity annotation",
                annotated.decl.full_name
            ),
            annotated.field_span("activity"),
        ));
    }

    let (verb, path) = route::parse_route(&endpoint.path).map_err(|err| {
        let code = match err {
            RouteParseError::MalformedRoute => ids::CODE_MALFORMED_ROUTE,
            RouteParseError::UnsupportedMethod(_) => ids::CODE_UNSUPPORTED_METHOD,
        };
        error(
            ids::RULE_ENDPOINT_ROUTE_SHAPE,
            code,
            err.to_string(),
            annotated.field_span("path"),
        )
    })?;

    // Advisory: parameters in the path are unnamed and hurt auditability;
    // a justification silences the warning.
    if path.contains('{') && is_blank(endpoint.path_param_justification.as_deref()) {
        diagnostics.push(common::warning(
            ids::RULE_ENDPOINT_PATH_PARAMS,
            ids::CODE_PARAMETER_IN_PATH,
            format!("the path {path} uses path parameters"),
            annotated.field_span("path"),
            Some(
                "prefer query-string parameters, or set path_param_justification to keep the path parameter"
                    .to_string(),
            ),
        ));
    }

    let base_prefix = check_base_prefix(annotated, endpoint, cfg, path)?;

    let expected =
        location::derive_location(&cfg.assembly_name, base_prefix, path).map_err(|err| {
            // Unreachable when settings were resolved normally; kept as a
            // per-declaration error so a bad prefix can never emit code.
            error(
                ids::RULE_ENDPOINT_BASE_PREFIX,
                ids::CODE_PREFIX_TRAILING_SLASH,
                err.to_string(),
                annotated.field_span("path"),
            )
        })?;
    if annotated.decl.containing_type != expected.full_name {
        let mut diagnostic = error(
            ids::RULE_ENDPOINT_LOCATION,
            ids::CODE_WRONG_TYPE_FOR_PATH,
            format!(
                "the path {path} must be implemented in the type {}, not {}",
                expected.full_name, annotated.decl.containing_type
            ),
            annotated.decl.span.clone(),
        );
        diagnostic.data = json!({
            "actual": annotated.decl.containing_type,
            "expected": expected.full_name,
            "expected_namespace_suffix": expected.namespace_suffix,
            "expected_type_name": expected.type_name,
        });
        return Err(diagnostic);
    }

    let policy_short_name = check_auth_policy_ref(annotated, endpoint)?;
    check_method_name(annotated, "Execute", ids::RULE_ENDPOINT_METHOD_NAME)?;

    let group = resolve_group_key(
        endpoint.group_name.as_deref(),
        format!("MapEndpoints_{}", cfg.assembly_ident()),
        ids::RULE_ENDPOINT_GROUP_KEY,
        annotated.field_span("group_name"),
    )?;

    let fragment = fragment::endpoint_fragment(annotated, endpoint, verb, path, &policy_short_name);
    Ok(Entry {
        group,
        short_name: None,
        fragment,
        companion_fragment: None,
        span: annotated.decl.span.clone(),
    })
}

/// The route must live under the configured base prefix unless explicitly
/// justified. A justification is only legal when the rule is actually
/// violated, so stale justifications cannot linger.
fn check_base_prefix<'a>(
    annotated: &AnnotatedDecl,
    endpoint: &EndpointAnnotation,
    cfg: &'a ValidationConfig,
    path: &str,
) -> Result<&'a str, Diagnostic> {
    let Some(prefix) = cfg.api_base_path_prefix.as_deref() else {
        return Err(error(
            ids::RULE_ENDPOINT_BASE_PREFIX,
            ids::CODE_PREFIX_MISSING_CONFIG,
            "api_base_path_prefix is not configured; set [web].api_base_path_prefix in routeguard.toml"
                .to_string(),
            annotated.field_span("path"),
        ));
    };

    let justified = !is_blank(endpoint.base_prefix_justification.as_deref());
    if location::in_base_prefix(path, prefix) {
        if justified {
            return Err(error(
                ids::RULE_ENDPOINT_BASE_PREFIX,
                ids::CODE_UNUSED_JUSTIFICATION,
                format!(
                    "the path {path} does not violate the base-prefix rule; remove the unused base_prefix_justification"
                ),
                annotated.field_span("base_prefix_justification"),
            ));
        }
    } else if !justified {
        let mut diagnostic = error(
            ids::RULE_ENDPOINT_BASE_PREFIX,
            ids::CODE_OUTSIDE_PREFIX,
            format!("the path {path} must start with {prefix}/"),
            annotated.field_span("path"),
        );
        diagnostic.help = Some(
            "publish the route under the gateway prefix, or set base_prefix_justification"
                .to_string(),
        );
        return Err(diagnostic);
    }
    Ok(prefix)
}

/// Every endpoint names the policy type that guards it; the `AuthPolicy`
/// suffix becomes the policy name in the generated registration.
fn check_auth_policy_ref(
    annotated: &AnnotatedDecl,
    endpoint: &EndpointAnnotation,
) -> Result<String, Diagnostic> {
    let Some(policy_ref) = endpoint.auth_policy_ref.as_deref().filter(|r| !r.trim().is_empty())
    else {
        return Err(error(
            ids::RULE_ENDPOINT_AUTH_POLICY,
            ids::CODE_MISSING_POLICY_REF,
            format!(
                "the endpoint {} must reference an auth policy type",
                annotated.decl.containing_type
            ),
            annotated.field_span("auth_policy_ref"),
        ));
    };
    let simple = policy_ref.rsplit('.').next().unwrap_or(policy_ref);
    let Some(short_name) = simple.strip_prefix("AuthPolicy") else {
        return Err(error(
            ids::RULE_ENDPOINT_AUTH_POLICY,
            ids::CODE_POLICY_REF_PREFIX,
            format!("the referenced policy type {simple} must start with AuthPolicy"),
            annotated.field_span("auth_policy_ref"),
        ));
    };
    Ok(short_name.to_string())
}
