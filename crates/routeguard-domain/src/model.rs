//! The symbol-table input model.
//!
//! One `Declaration` per annotated symbol, produced once per analysis pass by
//! the host build and borrowed immutably for the duration of the pass. The
//! annotation is a closed tagged union resolved during symbol discovery; at
//! most one annotation kind attaches to a declaration (enforced upstream).

use routeguard_types::{Location, SrcPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Type,
    Method,
}

/// Modifiers relevant to validation. For a `Method` declaration, `Partial`
/// describes the containing type while `Public`/`Static` describe the method
/// itself (the host collapses both symbols into one modifier set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Static,
    Partial,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Fully-qualified name of the annotated symbol. For methods this ends
    /// with `.<method_name>`.
    pub full_name: String,
    /// Fully-qualified name of the owning type (equals `full_name` for types).
    pub containing_type: String,
    /// Namespace segments of the owning type, in order.
    pub namespace_path: Vec<String>,
    pub source_file: SrcPath,
    #[serde(default)]
    pub span: Option<Location>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub method_name: Option<String>,
}

impl Declaration {
    pub fn has_modifier(&self, m: Modifier) -> bool {
        self.modifiers.contains(&m)
    }

    /// Simple (unqualified) name of the owning type.
    pub fn type_simple_name(&self) -> &str {
        self.containing_type
            .rsplit('.')
            .next()
            .unwrap_or(&self.containing_type)
    }

    /// Namespace of the owning type, taken from `containing_type` rather than
    /// `namespace_path` so emission always agrees with the name that
    /// placement validated.
    pub fn namespace(&self) -> &str {
        self.containing_type
            .rsplit_once('.')
            .map(|(ns, _)| ns)
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnnotation {
    pub importance: String,
    pub step: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointAnnotation {
    /// `"<VERB> /path"` route string.
    pub path: String,
    /// Fully-qualified name of the auth-policy type guarding this endpoint.
    /// Required; modeled as `Option` so absence is a rule diagnostic, not a
    /// deserialization failure.
    #[serde(default)]
    pub auth_policy_ref: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub path_param_justification: Option<String>,
    #[serde(default)]
    pub base_prefix_justification: Option<String>,

    // Documentation fields carried verbatim into the emitted fragment.
    #[serde(default)]
    pub group_title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,

    /// Companion activity/audit metadata; required unless the pass is
    /// configured otherwise.
    #[serde(default)]
    pub activity: Option<ActivityAnnotation>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthPolicyAnnotation {
    #[serde(default)]
    pub group_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSchemeAnnotation {
    #[serde(default)]
    pub group_name: Option<String>,
}

/// Closed union over the annotation kinds the generator understands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    Endpoint(EndpointAnnotation),
    AuthPolicy(AuthPolicyAnnotation),
    AuthScheme(AuthSchemeAnnotation),
}

/// One declaration plus its annotation payload and per-field source spans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDecl {
    #[serde(flatten)]
    pub decl: Declaration,
    pub annotation: Annotation,
    /// Span of individual annotation fields, for precise diagnostics.
    #[serde(default)]
    pub field_spans: BTreeMap<String, Location>,
}

impl AnnotatedDecl {
    /// Span of a named annotation field, falling back to the declaration span.
    pub fn field_span(&self, field: &str) -> Option<Location> {
        self.field_spans
            .get(field)
            .cloned()
            .or_else(|| self.decl.span.clone())
    }
}

/// The full input of one pass: every annotated declaration discovered in the
/// compilation, in discovery order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    pub assembly: String,
    pub declarations: Vec<AnnotatedDecl>,
}
