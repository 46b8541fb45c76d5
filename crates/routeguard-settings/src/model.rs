use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `routeguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteguardConfigV1 {
    /// Optional schema string for tooling (`routeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub web: WebSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WebSection {
    /// Gateway prefix every route must live under (e.g. `/api/v1`).
    /// Absence is not a parse error; endpoints fail individually instead, so
    /// the diagnostic lands next to the code it blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_path_prefix: Option<String>,

    /// Whether endpoints must carry the activity annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_activity: Option<bool>,
}
