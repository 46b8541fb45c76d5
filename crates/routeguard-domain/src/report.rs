//! The raw outcome of one validation pass, before the report envelope is
//! wrapped around it.

use crate::registry::RegistrySet;
use routeguard_types::Diagnostic;

#[derive(Clone, Debug, Default)]
pub struct DomainReport {
    pub registries: RegistrySet,
    /// All diagnostics, in declaration order, fingerprinted.
    pub diagnostics: Vec<Diagnostic>,
    pub declarations_scanned: usize,
    pub entries_registered: usize,
}
