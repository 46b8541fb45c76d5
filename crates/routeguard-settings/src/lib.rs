//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{RouteguardConfigV1, WebSection};
pub use resolve::{SettingsError, resolve_config};

/// Parse `routeguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<RouteguardConfigV1, SettingsError> {
    let cfg: RouteguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
