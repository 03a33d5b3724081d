//! Query string parsing that keeps every occurrence of a key.
//!
//! `axum::extract::Query<HashMap<_, _>>` collapses `rel=a&rel=b` into a
//! single entry, which silently drops relation filters.

/// Decoded `key=value` pairs of a query string, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query.unwrap_or_default()
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(segment), String::new()),
            })
            .collect();
        Params { pairs }
    }

    /// Last value given for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values given for `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs.iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// Form-style decoding: `+` is a space, then percent escapes. Invalid
/// UTF-8 is replaced rather than rejected.
fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let bytes = urlencoding::decode_binary(s.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_are_all_kept() {
        let params = Params::parse(Some("resource=acct:a@example.com&rel=self&rel=http://webfinger.net/rel/profile-page"));
        assert_eq!(params.get_all("rel"), vec![
            "self".to_string(),
            "http://webfinger.net/rel/profile-page".to_string(),
        ]);
    }

    #[test]
    fn values_are_percent_decoded() {
        let params = Params::parse(Some("rel=http://schemas.google.com/g/2010%23updates-from&resource=acct%3Aa%40example.com"));
        assert_eq!(params.get_all("rel"), vec!["http://schemas.google.com/g/2010#updates-from".to_string()]);
        assert_eq!(params.get("resource"), Some("acct:a@example.com"));
    }

    #[test]
    fn plus_decodes_to_space() {
        let params = Params::parse(Some("q=a+b%2Bc"));
        assert_eq!(params.get("q"), Some("a b+c"));
    }

    #[test]
    fn get_returns_last_occurrence() {
        let params = Params::parse(Some("resource=first&resource=second"));
        assert_eq!(params.get("resource"), Some("second"));
    }

    #[test]
    fn missing_and_empty_queries() {
        assert_eq!(Params::parse(None), Params::default());
        assert_eq!(Params::parse(Some("")), Params::default());
        assert!(Params::parse(Some("&&")).get_all("rel").is_empty());
    }

    #[test]
    fn key_without_value() {
        let params = Params::parse(Some("resource&rel="));
        assert_eq!(params.get("resource"), Some(""));
        assert_eq!(params.get_all("rel"), vec![String::new()]);
    }

    #[test]
    fn other_keys_do_not_leak_into_rel() {
        let params = Params::parse(Some("relation=x&rel=self&xrel=y"));
        assert_eq!(params.get_all("rel"), vec!["self".to_string()]);
        assert_eq!(params.get("nope"), None);
    }
}
