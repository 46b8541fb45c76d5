//! Fixture builders shared by unit tests across the workspace.
//!
//! Builders produce declarations that pass every rule; tests break one field
//! at a time to exercise a single rule.

use crate::model::{
    ActivityAnnotation, AnnotatedDecl, Annotation, AuthPolicyAnnotation, AuthSchemeAnnotation,
    DeclKind, Declaration, EndpointAnnotation, Modifier,
};
use routeguard_types::{Location, SrcPath};
use std::collections::BTreeMap;

fn span(file: &str, line: u32) -> Location {
    Location {
        path: SrcPath::new(file),
        line: Some(line),
        col: Some(5),
    }
}

/// A fully-populated endpoint annotation for `path`.
pub fn endpoint_annotation(path: &str) -> EndpointAnnotation {
    EndpointAnnotation {
        path: path.to_string(),
        auth_policy_ref: Some("Acme.Web.AuthPolicies.AuthPolicyAdminOnly".to_string()),
        group_name: None,
        path_param_justification: None,
        base_prefix_justification: None,
        group_title: Some("Example".to_string()),
        summary: Some("Example summary".to_string()),
        description: Some("Example description".to_string()),
        display_name: None,
        activity: Some(ActivityAnnotation {
            importance: "high".to_string(),
            step: "finish".to_string(),
        }),
    }
}

/// An endpoint method declaration at
/// `<assembly>.Web.Endpoints[.<ns_suffix>].Endpoint<leaf>.Execute`.
pub fn endpoint_decl(
    assembly: &str,
    ns_suffix: &str,
    leaf: &str,
    endpoint: EndpointAnnotation,
) -> AnnotatedDecl {
    let mut namespace_path: Vec<String> = assembly.split('.').map(str::to_string).collect();
    namespace_path.push("Web".to_string());
    namespace_path.push("Endpoints".to_string());
    if !ns_suffix.is_empty() {
        namespace_path.extend(ns_suffix.split('.').map(str::to_string));
    }
    let containing_type = format!("{}.Endpoint{leaf}", namespace_path.join("."));
    let file = format!("Web/Endpoints/Endpoint{leaf}.cs");

    let mut field_spans = BTreeMap::new();
    field_spans.insert("path".to_string(), span(&file, 8));

    AnnotatedDecl {
        decl: Declaration {
            kind: DeclKind::Method,
            full_name: format!("{containing_type}.Execute"),
            containing_type,
            namespace_path,
            source_file: SrcPath::new(&file),
            span: Some(span(&file, 12)),
            modifiers: vec![Modifier::Public, Modifier::Static, Modifier::Partial],
            method_name: Some("Execute".to_string()),
        },
        annotation: Annotation::Endpoint(endpoint),
        field_spans,
    }
}

fn configurator_decl(
    assembly: &str,
    reserved: &str,
    type_name: &str,
    annotation: Annotation,
) -> AnnotatedDecl {
    let mut namespace_path: Vec<String> = assembly.split('.').map(str::to_string).collect();
    namespace_path.extend(reserved.split('.').map(str::to_string));
    let containing_type = format!("{}.{type_name}", namespace_path.join("."));
    let file = format!("{}/{type_name}.cs", reserved.replace('.', "/"));

    AnnotatedDecl {
        decl: Declaration {
            kind: DeclKind::Method,
            full_name: format!("{containing_type}.Configure"),
            containing_type,
            namespace_path,
            source_file: SrcPath::new(&file),
            span: Some(span(&file, 9)),
            modifiers: vec![Modifier::Public, Modifier::Static, Modifier::Partial],
            method_name: Some("Configure".to_string()),
        },
        annotation,
        field_spans: BTreeMap::new(),
    }
}

/// An auth-policy configurator at `<assembly>.Web.AuthPolicies.<type_name>.Configure`.
pub fn policy_decl(assembly: &str, type_name: &str) -> AnnotatedDecl {
    configurator_decl(
        assembly,
        "Web.AuthPolicies",
        type_name,
        Annotation::AuthPolicy(AuthPolicyAnnotation::default()),
    )
}

/// An auth-scheme configurator at `<assembly>.Web.AuthSchemes.<type_name>.Configure`.
pub fn scheme_decl(assembly: &str, type_name: &str) -> AnnotatedDecl {
    configurator_decl(
        assembly,
        "Web.AuthSchemes",
        type_name,
        Annotation::AuthScheme(AuthSchemeAnnotation::default()),
    )
}

/// The standard config used by most tests.
pub fn test_config(assembly: &str) -> crate::policy::ValidationConfig {
    crate::policy::ValidationConfig {
        assembly_name: assembly.to_string(),
        api_base_path_prefix: Some("/api/v1".to_string()),
        require_activity: true,
    }
}
