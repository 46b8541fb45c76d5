use routeguard_types::Diagnostic;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a diagnostic.
///
/// Identity fields:
/// - rule_id
/// - code
/// - location path (if present)
/// - location line (if present)
/// - message
pub fn fingerprint_for(diagnostic: &Diagnostic) -> String {
    let mut parts: Vec<String> = vec![
        diagnostic.rule_id.clone(),
        diagnostic.code.clone(),
    ];
    if let Some(loc) = &diagnostic.location {
        parts.push(loc.path.as_str().to_string());
        if let Some(line) = loc.line {
            parts.push(line.to_string());
        }
    }
    parts.push(diagnostic.message.clone());
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fill in fingerprints on every diagnostic that lacks one.
pub fn apply(diagnostics: &mut [Diagnostic]) {
    for d in diagnostics {
        if d.fingerprint.is_none() {
            d.fingerprint = Some(fingerprint_for(d));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeguard_types::Severity;

    fn diag(message: &str) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            rule_id: "endpoint.location".to_string(),
            code: "wrong_type_for_path".to_string(),
            message: message.to_string(),
            location: None,
            help: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }
    }

    #[test]
    fn same_identity_same_fingerprint() {
        assert_eq!(fingerprint_for(&diag("m")), fingerprint_for(&diag("m")));
        assert_ne!(fingerprint_for(&diag("m")), fingerprint_for(&diag("n")));
    }

    #[test]
    fn apply_is_idempotent() {
        let mut ds = vec![diag("m")];
        apply(&mut ds);
        let first = ds[0].fingerprint.clone();
        apply(&mut ds);
        assert_eq!(ds[0].fingerprint, first);
        assert_eq!(first.unwrap().len(), 64);
    }
}
