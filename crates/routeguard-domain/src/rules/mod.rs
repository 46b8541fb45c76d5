//! Per-kind rule pipelines.
//!
//! Each pipeline runs its checks in declaration order and stops at the first
//! error, so every failing declaration carries exactly one error diagnostic.
//! A declaration that passes yields exactly one registry entry (plus an
//! informational diagnostic recording the inclusion); warnings may accompany
//! either outcome, errors only the failing one.

mod auth_policy;
mod auth_scheme;
pub(crate) mod common;
mod endpoint;


use crate::model::{AnnotatedDecl, Annotation};
use crate::policy::ValidationConfig;
use crate::registry::Entry;
use routeguard_types::Diagnostic;

/// Outcome of validating one declaration.
#[derive(Clone, Debug, Default)]
pub struct Validated {
    /// Present iff no error diagnostic was produced.
    pub entry: Option<Entry>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn validate(annotated: &AnnotatedDecl, cfg: &ValidationConfig) -> Validated {
    match &annotated.annotation {
        Annotation::Endpoint(endpoint) => endpoint::validate(annotated, endpoint, cfg),
        Annotation::AuthPolicy(policy) => auth_policy::validate(annotated, policy, cfg),
        Annotation::AuthScheme(scheme) => auth_scheme::validate(annotated, scheme, cfg),
    }
}
