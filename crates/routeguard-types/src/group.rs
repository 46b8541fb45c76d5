use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a generation group: the identifier under which validated entries are
/// aggregated into one emitted registration unit.
///
/// A `GroupKey` is always a valid identifier (`^[A-Za-z_][A-Za-z0-9_]*$`); it
/// becomes the generated registration method name, so anything else would not
/// compile on the host side.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    /// Validate and wrap an identifier. Returns `None` when `s` is not a valid
    /// identifier.
    pub fn new(s: &str) -> Option<Self> {
        if is_valid_identifier(s) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier rule shared by group keys and derived short names.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifiers() {
        for ok in ["MapEndpoints_AcmePayments", "_x", "A1", "snake_case"] {
            assert!(GroupKey::new(ok).is_some(), "{ok}");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for bad in ["", "1abc", "with-dash", "with space", "dot.ted", "naïve"] {
            assert!(GroupKey::new(bad).is_none(), "{bad}");
        }
    }
}
