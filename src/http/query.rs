//! Query string parsing module
//!
//! Decodes `application/x-www-form-urlencoded` query strings into a
//! case-insensitive parameter map.

use std::collections::HashMap;

/// Query parameters keyed by lowercased name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`)
    ///
    /// Repeated keys are joined with `,` in order of appearance, so `id=1&id=2`
    /// yields `"1,2"`. A key without `=` maps to an empty string.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut values: HashMap<String, String> = HashMap::new();
        let Some(raw) = raw else {
            return Self { values };
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            values
                .entry(key.to_lowercase())
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert_with(|| value.into_owned());
        }

        Self { values }
    }

    /// Look up a parameter, ignoring the case of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let q = QueryParams::parse(Some("id=42&name=test"));
        assert_eq!(q.get("id"), Some("42"));
        assert_eq!(q.get("name"), Some("test"));
        assert_eq!(q.get("missing"), None);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_parse_none_and_empty() {
        assert!(QueryParams::parse(None).is_empty());
        assert!(QueryParams::parse(Some("")).is_empty());
    }

    #[test]
    fn test_percent_decoding() {
        let q = QueryParams::parse(Some("id=%2042&msg=hello+world&sym=%26"));
        assert_eq!(q.get("id"), Some(" 42"));
        assert_eq!(q.get("msg"), Some("hello world"));
        assert_eq!(q.get("sym"), Some("&"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let q = QueryParams::parse(Some("ID=7"));
        assert_eq!(q.get("id"), Some("7"));
        assert_eq!(q.get("Id"), Some("7"));
    }

    #[test]
    fn test_repeated_keys_joined() {
        let q = QueryParams::parse(Some("id=1&other=x&id=2"));
        assert_eq!(q.get("id"), Some("1,2"));
    }

    #[test]
    fn test_key_without_value() {
        let q = QueryParams::parse(Some("id&flag="));
        assert_eq!(q.get("id"), Some(""));
        assert_eq!(q.get("flag"), Some(""));
    }
}
