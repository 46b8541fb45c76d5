use crate::model::RouteguardConfigV1;
use routeguard_domain::policy::ValidationConfig;
use routeguard_types::ids;
use thiserror::Error;

/// Configuration errors abort the whole pass before any declaration is
/// validated; each variant maps onto a stable diagnostic code.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse routeguard.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api_base_path_prefix must not end with '/': {0:?}")]
    PrefixTrailingSlash(String),

    #[error("assembly name {0:?} does not reduce to a valid identifier")]
    InvalidAssembly(String),
}

impl SettingsError {
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::Parse(_) => ids::CODE_CONFIG_PARSE,
            SettingsError::PrefixTrailingSlash(_) => ids::CODE_PREFIX_TRAILING_SLASH,
            SettingsError::InvalidAssembly(_) => ids::CODE_INVALID_ASSEMBLY,
        }
    }
}

/// Resolve the validation config used by the engine for one assembly.
pub fn resolve_config(
    cfg: &RouteguardConfigV1,
    assembly: &str,
) -> Result<ValidationConfig, SettingsError> {
    if let Some(prefix) = cfg.web.api_base_path_prefix.as_deref()
        && prefix.ends_with('/')
    {
        return Err(SettingsError::PrefixTrailingSlash(prefix.to_string()));
    }

    let resolved = ValidationConfig {
        assembly_name: assembly.to_string(),
        api_base_path_prefix: cfg.web.api_base_path_prefix.clone(),
        require_activity: cfg.web.require_activity.unwrap_or(true),
    };

    // The identifier derived from the assembly seeds every default group
    // name, so it has to be usable before the first declaration is checked.
    if !routeguard_types::is_valid_identifier(&resolved.assembly_ident()) {
        return Err(SettingsError::InvalidAssembly(assembly.to_string()));
    }

    Ok(resolved)
}
