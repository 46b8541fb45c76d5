use crate::location::{derive_location, pascal_segment};
use crate::route::parse_route;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

fn segment() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..4)
}

/// Invert the pascal fold at uppercase boundaries, restoring the dash-words.
fn unpascal(ident: &str) -> Vec<String> {
    let mut words = Vec::new();
    for c in ident.chars() {
        if c.is_ascii_uppercase() {
            words.push(String::new());
        }
        if let Some(last) = words.last_mut() {
            last.push(c.to_ascii_lowercase());
        }
    }
    words
}

proptest! {
    // Lowercase dash-segments survive the fold: the original words can be
    // recovered from the identifier, so two distinct paths of this shape
    // never collide on a type name.
    #[test]
    fn pascal_fold_preserves_lowercase_words(words in segment()) {
        let folded = pascal_segment(&words.join("-"));
        prop_assert_eq!(unpascal(&folded), words);
    }

    // Directories interleave plain dash-segments and `{param}` segments; a
    // parameter maps to the `param-…` token, so its words are recoverable too.
    #[test]
    fn derived_location_is_stable_and_prefix_independent_in_shape(
        dirs in prop::collection::vec((segment(), any::<bool>()), 0..4),
        leaf in segment(),
    ) {
        let mut path = "/api/v1".to_string();
        for (dir, is_param) in &dirs {
            path.push('/');
            if *is_param {
                path.push_str(&format!("{{{}}}", dir.join("-")));
            } else {
                path.push_str(&dir.join("-"));
            }
        }
        path.push('/');
        path.push_str(&leaf.join("-"));

        let first = derive_location("Acme", "/api/v1", &path).unwrap();
        let second = derive_location("Acme", "/api/v1", &path).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert!(first.type_name.starts_with("Endpoint"));
        prop_assert!(first.full_name.starts_with("Acme.Web.Endpoints"));
        prop_assert!(first.full_name.ends_with(&first.type_name));

        let suffix_words: Vec<Vec<String>> = first
            .namespace_suffix
            .as_deref()
            .map(|s| s.split('.').map(unpascal).collect())
            .unwrap_or_default();
        let expected_words: Vec<Vec<String>> = dirs
            .iter()
            .map(|(dir, is_param)| {
                let mut words = dir.clone();
                if *is_param {
                    words.insert(0, "param".to_string());
                }
                words
            })
            .collect();
        prop_assert_eq!(suffix_words, expected_words);
        prop_assert_eq!(
            unpascal(&first.type_name["Endpoint".len()..]),
            leaf
        );
    }

    // Route parsing is total: any input either parses or yields one of the
    // two shape errors, never a panic.
    #[test]
    fn route_parsing_never_panics(raw in ".{0,64}") {
        let _ = parse_route(&raw);
    }

    #[test]
    fn well_formed_routes_round_trip_the_path(path_words in segment()) {
        let path = format!("/{}", path_words.join("/"));
        let raw = format!("GET {path}");
        let (verb, parsed) = parse_route(&raw).unwrap();
        prop_assert_eq!(verb.as_upper(), "GET");
        prop_assert_eq!(parsed, path.as_str());
    }
}
