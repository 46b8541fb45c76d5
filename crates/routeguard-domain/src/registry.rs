//! Group registries: validated entries keyed by generation group.

use routeguard_types::{GroupKey, Location};
use std::collections::BTreeMap;

/// The emit-ready result of one successfully validated declaration. Owned by
/// its registry from insertion until the emit layer drains it; never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub group: GroupKey,
    /// Registered short name (policy/scheme suffix); endpoints have none.
    pub short_name: Option<String>,
    /// Opaque emittable payload (see `fragment`).
    pub fragment: String,
    /// Additional fragment emitted after the group body (Id constants).
    pub companion_fragment: Option<String>,
    pub span: Option<Location>,
}

/// `group -> entries`, insertion-order preserved per group.
///
/// Key iteration is ordered (BTreeMap) and per-key entry order is discovery
/// order, so emission is reproducible across runs over the same input set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupKey, Vec<Entry>>,
}

impl GroupRegistry {
    pub fn insert(&mut self, entry: Entry) {
        self.groups.entry(entry.group.clone()).or_default().push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Entry])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// One registry per annotation kind. Registries are per kind, so identical
/// group names in different kinds can never merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrySet {
    pub endpoints: GroupRegistry,
    pub auth_policies: GroupRegistry,
    pub auth_schemes: GroupRegistry,
}

impl RegistrySet {
    pub fn entry_count(&self) -> usize {
        self.endpoints.entry_count()
            + self.auth_policies.entry_count()
            + self.auth_schemes.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(group: &str, fragment: &str) -> Entry {
        Entry {
            group: GroupKey::new(group).unwrap(),
            short_name: None,
            fragment: fragment.to_string(),
            companion_fragment: None,
            span: None,
        }
    }

    #[test]
    fn preserves_insertion_order_within_a_group() {
        let mut registry = GroupRegistry::default();
        registry.insert(entry("MapEndpoints_Acme", "first"));
        registry.insert(entry("MapEndpoints_Acme", "second"));
        registry.insert(entry("MapEndpoints_Acme", "third"));

        let (_, entries) = registry.iter().next().unwrap();
        let order: Vec<&str> = entries.iter().map(|e| e.fragment.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn iterates_groups_in_key_order() {
        let mut registry = GroupRegistry::default();
        registry.insert(entry("Zeta", "z"));
        registry.insert(entry("Alpha", "a"));

        let keys: Vec<&str> = registry.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Alpha", "Zeta"]);
        assert_eq!(registry.entry_count(), 2);
    }
}
