//! Deterministic mapping from a route path to the single legal type location.
//!
//! This mapping is load-bearing for the naming-convention contract: the
//! derived fully-qualified name is compared verbatim against the declaration,
//! so every step here is part of the tool's stable behavior.

use thiserror::Error;

/// The one expected home of an endpoint, derived from its route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpectedLocation {
    /// Dotted namespace suffix under the reserved namespace; `None` for
    /// prefix-root routes.
    pub namespace_suffix: Option<String>,
    /// Simple type name, always `Endpoint`-prefixed.
    pub type_name: String,
    /// `<assembly>.Web.Endpoints[.<suffix>].<type_name>`.
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("api_base_path_prefix must not end with '/': {0:?}")]
    PrefixTrailingSlash(String),
}

/// Whether `path` lies under `base_prefix` (exact match or `prefix/…`).
pub fn in_base_prefix(path: &str, base_prefix: &str) -> bool {
    path == base_prefix || path.starts_with(&format!("{base_prefix}/"))
}

/// Derive the expected namespace and type name for an endpoint route.
///
/// Total over well-formed input: the only failure mode is a malformed
/// `base_prefix`, which is a configuration error rather than a
/// per-declaration one. Paths outside the prefix still map (the prefix is
/// simply not stripped); whether being outside is acceptable is a separate
/// rule.
pub fn derive_location(
    assembly: &str,
    base_prefix: &str,
    path: &str,
) -> Result<ExpectedLocation, MappingError> {
    if base_prefix.ends_with('/') {
        return Err(MappingError::PrefixTrailingSlash(base_prefix.to_string()));
    }

    let remainder = if in_base_prefix(path, base_prefix) {
        &path[base_prefix.len()..]
    } else {
        path
    };
    let remainder = remainder.trim_matches('/');

    // `{id}` becomes the ordinary segment token `param-id`.
    let remainder = remainder.replace('{', "param-").replace('}', "");

    let mut segments: Vec<&str> = remainder.split('/').collect();
    let leaf = segments.pop().unwrap_or("");

    let namespace_suffix = if segments.is_empty() {
        None
    } else {
        Some(
            segments
                .iter()
                .map(|s| pascal_segment(s))
                .collect::<Vec<_>>()
                .join("."),
        )
    };

    let type_name = format!("Endpoint{}", pascal_segment(leaf));
    let full_name = match &namespace_suffix {
        Some(suffix) => format!("{assembly}.Web.Endpoints.{suffix}.{type_name}"),
        None => format!("{assembly}.Web.Endpoints.{type_name}"),
    };

    Ok(ExpectedLocation {
        namespace_suffix,
        type_name,
        full_name,
    })
}

/// Canonical path-segment → identifier rule: each dash-delimited word is
/// folded to first-letter-upper, remainder-lower; dashes are removed.
pub fn pascal_segment(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase());
            let rest: String = chars.map(|c| c.to_ascii_lowercase()).collect();
            match first {
                Some(c) => format!("{c}{rest}"),
                None => String::new(),
            }
        })
        .collect()
}
