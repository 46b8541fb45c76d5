use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative source path used in diagnostics and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SrcPath(String);

impl Default for SrcPath {
    fn default() -> Self {
        SrcPath::new(".")
    }
}

impl SrcPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes_and_dot_prefix() {
        let p = SrcPath::new("./Web\\Endpoints\\EndpointCancel.cs");
        assert_eq!(p.as_str(), "Web/Endpoints/EndpointCancel.cs");
    }

    #[test]
    fn empty_becomes_dot() {
        assert_eq!(SrcPath::new("").as_str(), ".");
    }
}
