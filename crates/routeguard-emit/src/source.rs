//! Low-level source assembly for the synthesized units.

/// Indent every non-empty line of `body` by `levels` four-space steps.
pub(crate) fn indent(body: &str, levels: usize) -> String {
    let pad = "    ".repeat(levels);
    let mut out = String::with_capacity(body.len());
    for line in body.lines() {
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Join fragments with one blank line between them.
pub(crate) fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(fragment);
    }
    out
}

/// The standard generated-file banner. Hosts and analyzers key off the
/// `<auto-generated/>` marker, so it always comes first.
pub(crate) fn banner() -> &'static str {
    "// <auto-generated/>\n// Produced by routeguard; do not edit.\n\n"
}
