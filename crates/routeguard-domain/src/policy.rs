/// Pass-wide, read-only configuration for one validation pass.
///
/// Loaded once before the pipeline starts (see `routeguard-settings`); never
/// mutated while declarations are being processed.
#[derive(Clone, Debug)]
pub struct ValidationConfig {
    /// Name of the assembly/module under analysis; the root of every reserved
    /// namespace.
    pub assembly_name: String,

    /// Gateway prefix all routes must live under. `None` means unconfigured,
    /// which every endpoint reports as an error; a malformed value is rejected
    /// at config-resolution time and never reaches the rules.
    pub api_base_path_prefix: Option<String>,

    /// Whether endpoints must carry the companion activity annotation.
    pub require_activity: bool,
}

impl ValidationConfig {
    /// Assembly name with dots removed, as used in default group keys.
    pub fn assembly_ident(&self) -> String {
        self.assembly_name.replace('.', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_ident_strips_dots() {
        let cfg = ValidationConfig {
            assembly_name: "Acme.Payments".to_string(),
            api_base_path_prefix: Some("/api/v1".to_string()),
            require_activity: true,
        };
        assert_eq!(cfg.assembly_ident(), "AcmePayments");
    }
}
