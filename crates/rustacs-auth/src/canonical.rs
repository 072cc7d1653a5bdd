//! Canonicalized header construction.
//!
//! Only headers whose name starts with a given prefix take part in the
//! signature. They are rendered as `name:value\n`, sorted by name:
//!
//! ```text
//! x-acs-region-id:cn-hangzhou\n
//! x-acs-signature-method:HMAC-SHA1\n
//! x-acs-signature-nonce:42\n
//! x-acs-version:2015-12-15\n
//! ```
//!
//! Unlike SigV4 canonical headers, names are neither lowercased nor trimmed:
//! the prefix match is exact and case-sensitive against the names as stored.

/// Serialize the headers whose name starts with `prefix`.
///
/// Matching entries are sorted by name in ascending code-point order and
/// concatenated as `name:value\n`. Returns an empty string when nothing
/// matches. The output does not depend on the iteration order of `headers`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use rustacs_auth::canonical::canonicalize_headers;
///
/// let headers: BTreeMap<String, String> = [
///     ("x-acs-b", "2"),
///     ("x-acs-a", "1"),
///     ("other", "x"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_owned(), v.to_owned()))
/// .collect();
///
/// assert_eq!(canonicalize_headers(&headers, "x-acs-"), "x-acs-a:1\nx-acs-b:2\n");
/// ```
#[must_use]
pub fn canonicalize_headers<K, V>(headers: impl IntoIterator<Item = (K, V)>, prefix: &str) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut matched: Vec<(K, V)> = headers
        .into_iter()
        .filter(|(name, _)| name.as_ref().starts_with(prefix))
        .collect();

    // Byte order of UTF-8 equals code-point order.
    matched.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let mut result = String::new();
    for (name, value) in &matched {
        result.push_str(name.as_ref());
        result.push(':');
        result.push_str(value.as_ref());
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_should_filter_and_sort_prefixed_headers() {
        let headers = [("x-acs-b", "2"), ("x-acs-a", "1"), ("other", "x")];
        assert_eq!(
            canonicalize_headers(headers, "x-acs-"),
            "x-acs-a:1\nx-acs-b:2\n"
        );
    }

    #[test]
    fn test_should_return_empty_when_nothing_matches() {
        let headers = [("date", "Thu, 01 Jan 2026 00:00:00 GMT"), ("accept", "*/*")];
        assert_eq!(canonicalize_headers(headers, "x-acs-"), "");
    }

    #[test]
    fn test_should_match_prefix_case_sensitively() {
        let headers = [("X-Acs-Version", "2015-12-15"), ("x-acs-region-id", "cn")];
        assert_eq!(
            canonicalize_headers(headers, "x-acs-"),
            "x-acs-region-id:cn\n"
        );
    }

    #[test]
    fn test_should_keep_values_verbatim() {
        let headers = [("x-acs-note", "  spaced   value ")];
        assert_eq!(
            canonicalize_headers(headers, "x-acs-"),
            "x-acs-note:  spaced   value \n"
        );
    }

    #[test]
    fn test_should_not_depend_on_insertion_order() {
        let forward: HashMap<String, String> = (0..32)
            .map(|i| (format!("x-acs-h{i:02}"), i.to_string()))
            .collect();
        let backward: BTreeMap<String, String> = (0..32)
            .rev()
            .map(|i| (format!("x-acs-h{i:02}"), i.to_string()))
            .collect();

        let a = canonicalize_headers(&forward, "x-acs-");
        let b = canonicalize_headers(&backward, "x-acs-");
        assert_eq!(a, b);
        assert!(a.starts_with("x-acs-h00:0\nx-acs-h01:1\n"));
    }

    #[test]
    fn test_should_sort_by_code_point() {
        // Uppercase letters sort before lowercase in code-point order.
        let headers = [("x-acs-b", "1"), ("x-acs-B", "2"), ("x-acs-a", "3")];
        assert_eq!(
            canonicalize_headers(headers, "x-acs-"),
            "x-acs-B:2\nx-acs-a:3\nx-acs-b:1\n"
        );
    }
}
