//! Query parameter construction
//!
//! Filters are collected as an ordered list of `(key, value)` pairs and
//! encoded with `serde_urlencoded`, so reserved characters in values are
//! escaped. A pair is only added when the caller supplies a present,
//! non-empty value; absent filters are omitted entirely, never sent as
//! empty keys.

use std::fmt;

/// An ordered collection of query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    items: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a pair unconditionally.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.items.push((key.to_string(), value.to_string()));
    }

    /// Adds a pair only when the value is present and renders non-empty.
    pub fn push_opt(&mut self, key: &str, value: Option<impl fmt::Display>) {
        if let Some(value) = value {
            let rendered = value.to_string();
            if !rendered.is_empty() {
                self.items.push((key.to_string(), rendered));
            }
        }
    }

    /// Adds `key=1` when the flag is true; emits nothing otherwise.
    ///
    /// The server reads boolean query flags as the literal `"1"`.
    pub fn push_flag(&mut self, key: &str, value: bool) {
        if value {
            self.items.push((key.to_string(), "1".to_string()));
        }
    }

    /// Returns all pairs in insertion order.
    #[must_use]
    pub fn all(&self) -> &[(String, String)] {
        &self.items
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Percent-encodes the pairs into a query string (without the `?`).
    #[must_use]
    pub fn encode(&self) -> String {
        // Encoding string pairs cannot fail.
        serde_urlencoded::to_string(&self.items).unwrap_or_default()
    }

    /// Appends the encoded query string to a path.
    ///
    /// Returns the path unchanged when no pairs are present.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_preserves_order() {
        let mut pairs = QueryPairs::new();
        pairs.push("year", 2025);
        pairs.push("month", 6);
        assert_eq!(pairs.encode(), "year=2025&month=6");
    }

    #[test]
    fn test_push_opt_skips_absent_values() {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("space_id", Some(5));
        pairs.push_opt("start_date", None::<&str>);
        pairs.push_opt("status", Some(""));
        assert_eq!(pairs.encode(), "space_id=5");
    }

    #[test]
    fn test_push_flag_only_when_true() {
        let mut pairs = QueryPairs::new();
        pairs.push_flag("include_cancelled", false);
        assert!(pairs.is_empty());
        pairs.push_flag("include_cancelled", true);
        assert_eq!(pairs.encode(), "include_cancelled=1");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let mut pairs = QueryPairs::new();
        pairs.push("status", "pending & confirmed");
        assert_eq!(pairs.encode(), "status=pending+%26+confirmed");
    }

    #[test]
    fn test_append_to_without_pairs() {
        let pairs = QueryPairs::new();
        assert_eq!(pairs.append_to("/events"), "/events");
    }

    #[test]
    fn test_append_to_with_pairs() {
        let mut pairs = QueryPairs::new();
        pairs.push("space_id", 5);
        assert_eq!(pairs.append_to("/events"), "/events?space_id=5");
    }
}
