//! Route-string grammar: `"<VERB> /path"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed verb whitelist. Anything else is rejected: routing
/// infrastructure (proxies, frameworks, gateways) supports only this set
/// reliably.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Verb {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Verb::Get),
            "POST" => Some(Verb::Post),
            "PUT" => Some(Verb::Put),
            "PATCH" => Some(Verb::Patch),
            "DELETE" => Some(Verb::Delete),
            "HEAD" => Some(Verb::Head),
            _ => None,
        }
    }

    pub fn as_upper(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
        }
    }

    /// Name of the host-side mapping call for this verb.
    pub fn map_method(self) -> &'static str {
        match self {
            Verb::Get => "MapGet",
            Verb::Post => "MapPost",
            Verb::Put => "MapPut",
            Verb::Patch => "MapPatch",
            Verb::Delete => "MapDelete",
            Verb::Head => "MapHead",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteParseError {
    #[error("route must be '<VERB> /path', e.g. 'POST /api/v1/example'")]
    MalformedRoute,
    #[error("method '{0}' is not supported (expected GET, POST, PUT, PATCH, DELETE, or HEAD)")]
    UnsupportedMethod(String),
}

/// Parse a raw route string into its verb and path. No side effects.
pub fn parse_route(raw: &str) -> Result<(Verb, &str), RouteParseError> {
    let Some((token, path)) = raw.split_once(' ') else {
        return Err(RouteParseError::MalformedRoute);
    };
    if token.is_empty() || !path.starts_with('/') {
        return Err(RouteParseError::MalformedRoute);
    }
    let verb = Verb::from_token(token)
        .ok_or_else(|| RouteParseError::UnsupportedMethod(token.to_string()))?;
    Ok((verb, path))
}
