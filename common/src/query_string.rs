//! URL query string encoding, decoding and patching.

use std::borrow::Cow;
use std::fmt::Display;

use serde::{Deserialize, Serialize};


/// A single `key=value` pair where an unset value means "leave it out".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: Option<String>,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self { key: key.into(), value: value.map(|v| v.into()) }
    }
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: Some(value.into()) }
    }
    pub fn unset(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: None }
    }
}

/// Ordered key/value store parsed from a query string.
///
/// Keeps duplicates and insertion order, like a browser's `URLSearchParams`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without its leading `?`.
    ///
    /// Segments without `=` get an empty value. `+` decodes to a space.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut pairs = Vec::new();
        for segment in query.split('&') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = match segment.find('=') {
                Some(eq_idx) => (&segment[..eq_idx], &segment[eq_idx + 1..]),
                None => (segment, ""),
            };
            pairs.push((decode_component(key), decode_component(value)));
        }
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Overwrite `key`: the first occurrence keeps its position, later ones are dropped.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut idx = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = idx <= first || k != key;
                    idx += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Remove every occurrence of `key`. Missing keys are a no-op.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Encode back to a query string. Always starts with `?`.
    pub fn to_query_string(&self) -> String {
        format!("?{}", self)
    }
}

// Encoded pairs without the leading `?`.
impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, (key, value)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

/// Build a query string from ordered pairs, dropping the unset ones.
///
/// Empty strings are kept (`?q=`). A repeated key keeps its first position and its last value.
pub fn to_query_string(items: &[QueryParam]) -> String {
    let mut params = QueryParams::new();
    for item in items {
        if let Some(value) = &item.value {
            params.set(&item.key, value);
        }
    }
    params.to_query_string()
}

/// Apply `items` on top of `existing`: set keys with a value, delete keys without one.
///
/// Keys not mentioned in `items` are left untouched.
pub fn patch_query_string(existing: &QueryParams, items: &[QueryParam]) -> String {
    let mut params = existing.clone();
    for item in items {
        match &item.value {
            Some(value) => params.set(&item.key, value),
            None => params.delete(&item.key),
        }
    }
    params.to_query_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_query_string_drops_unset_values() {
        assert_eq!(to_query_string(&[]), "?");
        assert_eq!(to_query_string(&[QueryParam::unset("q")]), "?");
        assert_eq!(to_query_string(&[QueryParam::unset("q"), QueryParam::set("a", "1")]), "?a=1");
    }

    #[test]
    fn to_query_string_keeps_empty_strings() {
        assert_eq!(to_query_string(&[QueryParam::set("q", "")]), "?q=");
    }

    #[test]
    fn to_query_string_encodes_in_order() {
        let items = [
            QueryParam::set("q", "value"),
            QueryParam::set("limit", "100"),
            QueryParam::set("sort", "+date"),
        ];
        assert_eq!(to_query_string(&items), "?q=value&limit=100&sort=%2Bdate");
    }

    #[test]
    fn to_query_string_last_duplicate_wins() {
        let items = [
            QueryParam::set("a", "1"),
            QueryParam::set("b", "2"),
            QueryParam::set("a", "3"),
        ];
        assert_eq!(to_query_string(&items), "?a=3&b=2");
    }

    #[test]
    fn patch_keeps_untouched_keys() {
        let existing = QueryParams::parse("a=1");
        assert_eq!(patch_query_string(&existing, &[]), "?a=1");
        assert_eq!(patch_query_string(&existing, &[QueryParam::set("a", "1")]), "?a=1");
        assert_eq!(patch_query_string(&existing, &[QueryParam::set("b", "2")]), "?a=1&b=2");
        assert_eq!(patch_query_string(&existing, &[QueryParam::unset("a")]), "?");
    }

    #[test]
    fn patch_mixed_items() {
        let existing = QueryParams::parse("?a=1");
        let items = [
            QueryParam::set("b", "2"),
            QueryParam::unset("c"),
            QueryParam::set("d", ""),
            QueryParam::set("e", "3"),
        ];
        assert_eq!(patch_query_string(&existing, &items), "?a=1&b=2&d=&e=3");
    }

    #[test]
    fn patch_does_not_mutate_existing() {
        let existing = QueryParams::parse("page=3&q=eau");
        let patched = patch_query_string(&existing, &[QueryParam::unset("page")]);
        assert_eq!(patched, "?q=eau");
        assert_eq!(existing.get("page"), Some("3"));
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("?geographical_coverage=France+m%C3%A9tropolitaine&x=a%20b&flag");
        assert_eq!(params.get("geographical_coverage"), Some("France métropolitaine"));
        assert_eq!(params.get("x"), Some("a b"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn parse_keeps_invalid_escapes_verbatim() {
        let params = QueryParams::parse("a=%ZZ&&b=1");
        assert_eq!(params.get("a"), Some("%ZZ"));
        assert_eq!(params.get("b"), Some("1"));
        assert_eq!(params.to_query_string(), "?a=%25ZZ&b=1");
    }

    #[test]
    fn set_collapses_duplicates_at_first_position() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "?a=9&b=2");
    }

    #[test]
    fn encoded_values_survive_parse() {
        let query = to_query_string(&[QueryParam::set("name", "a&b=c +d")]);
        assert_eq!(QueryParams::parse(&query).get("name"), Some("a&b=c +d"));
    }
}
