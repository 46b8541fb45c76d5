//! Registration-fragment builders.
//!
//! A fragment is the opaque emittable payload of one validated entry; the
//! emit layer concatenates fragments per group without inspecting them. Every
//! fragment opens with a provenance header so generated code is traceable
//! back to its declaration.

use crate::model::{AnnotatedDecl, EndpointAnnotation};
use crate::route::Verb;

/// Escape a string into a double-quoted source literal.
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn provenance(label: &str, annotated: &AnnotatedDecl) -> String {
    let line = annotated
        .decl
        .span
        .as_ref()
        .and_then(|s| s.line)
        .unwrap_or(0);
    format!(
        "// Generated from:\n//   {label}\n//   File: {file}\n//   Line: {line}\n//   Type: {ty}\n",
        file = annotated.decl.source_file.as_str(),
        ty = annotated.decl.containing_type,
    )
}

/// `app.Map<Verb>(...)` chain for one endpoint.
pub fn endpoint_fragment(
    annotated: &AnnotatedDecl,
    endpoint: &EndpointAnnotation,
    verb: Verb,
    path: &str,
    policy_short_name: &str,
) -> String {
    let mut out = provenance(
        &format!("ENDPOINT {} {}", verb.as_upper(), path),
        annotated,
    );
    out.push_str(&format!(
        "app.{map}(\n    {path},\n    {ty}.Execute\n)\n",
        map = verb.map_method(),
        path = quote_literal(path),
        ty = annotated.decl.containing_type,
    ));
    if let Some(display_name) = endpoint.display_name.as_deref() {
        out.push_str(&format!(".WithDisplayName( {} )\n", quote_literal(display_name)));
    }
    out.push_str(&format!(
        ".WithTags( [ {} ] )\n",
        quote_literal(endpoint.group_title.as_deref().unwrap_or(""))
    ));
    out.push_str(&format!(
        ".WithSummary( {} )\n",
        quote_literal(endpoint.summary.as_deref().unwrap_or(""))
    ));
    out.push_str(&format!(
        ".WithDescription( {} )\n",
        quote_literal(endpoint.description.as_deref().unwrap_or(""))
    ));
    out.push_str(&format!(
        ".RequireAuthorization( {} );\n",
        quote_literal(policy_short_name)
    ));
    out
}

/// `options.AddPolicy(...)` fragment for one auth policy.
pub fn auth_policy_fragment(annotated: &AnnotatedDecl, short_name: &str) -> String {
    let mut out = provenance(&format!("POLICY {short_name}"), annotated);
    out.push_str(&format!(
        "options.AddPolicy(\n    {name},\n    {ty}.Configure\n);\n",
        name = quote_literal(short_name),
        ty = annotated.decl.containing_type,
    ));
    out
}

/// Scheme fragment: the configurator wraps the registration builder.
pub fn auth_scheme_fragment(annotated: &AnnotatedDecl, short_name: &str) -> String {
    let mut out = provenance(&format!("AUTH SCHEME {short_name}"), annotated);
    out.push_str(&format!(
        "{ty}.Configure(\n    services.AddAuthentication( {name} )\n);\n",
        ty = annotated.decl.containing_type,
        name = quote_literal(short_name),
    ));
    out
}

/// Companion partial-class fragment exposing the registered short name as a
/// string constant (`<Type>.Id`).
pub fn id_constant_fragment(annotated: &AnnotatedDecl, short_name: &str) -> String {
    format!(
        "namespace {ns}\n{{\n    public static partial class {ty}\n    {{\n        public const string Id = {name};\n    }}\n}}\n",
        ns = annotated.decl.namespace(),
        ty = annotated.decl.type_simple_name(),
        name = quote_literal(short_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{endpoint_annotation, endpoint_decl};

    #[test]
    fn quotes_and_escapes_literals() {
        assert_eq!(quote_literal("plain"), "\"plain\"");
        assert_eq!(quote_literal("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(quote_literal("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn endpoint_fragment_carries_route_type_and_policy() {
        let annotated = endpoint_decl("Acme", "Example", "Cancel", endpoint_annotation("GET /api/v1/example/cancel"));
        let crate::model::Annotation::Endpoint(endpoint) = annotated.annotation.clone() else {
            panic!("endpoint fixture")
        };
        let src = endpoint_fragment(
            &annotated,
            &endpoint,
            Verb::Get,
            "/api/v1/example/cancel",
            "AdminOnly",
        );
        assert!(src.contains("ENDPOINT GET /api/v1/example/cancel"));
        assert!(src.contains("app.MapGet("));
        assert!(src.contains("Acme.Web.Endpoints.Example.EndpointCancel.Execute"));
        assert!(src.contains(".RequireAuthorization( \"AdminOnly\" );"));
        // no display name configured, so the optional call is absent
        assert!(!src.contains(".WithDisplayName("));
    }

    #[test]
    fn id_constant_fragment_is_a_partial_class() {
        let annotated = crate::test_support::policy_decl("Acme", "AuthPolicyAdminOnly");
        let src = id_constant_fragment(&annotated, "AdminOnly");
        assert!(src.contains("namespace Acme.Web.AuthPolicies"));
        assert!(src.contains("public static partial class AuthPolicyAdminOnly"));
        assert!(src.contains("public const string Id = \"AdminOnly\";"));
    }
}
