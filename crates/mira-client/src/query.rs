//! Query-string assembly for list endpoints.

/// Build a query string from optional pairs. Returns an empty string
/// when no pair is set, otherwise `?k=v&...` with percent-encoding.
pub(crate) fn build(pairs: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_unset_pairs() {
        let q = build(&[
            ("page", Some("2".to_string())),
            ("status", None),
            ("sort_by", Some("roi".to_string())),
        ]);
        assert_eq!(q, "?page=2&sort_by=roi");
    }

    #[test]
    fn test_empty_when_nothing_set() {
        assert_eq!(build(&[("page", None)]), "");
    }

    #[test]
    fn test_percent_encodes_values() {
        let q = build(&[("email", Some("a b@example.com".to_string()))]);
        assert_eq!(q, "?email=a+b%40example.com");
    }
}
