// web_app/query.rs - Query-string handling
//
// The requested page number lives only in the URL (`?p=N`), so every piece
// of pagination state is read from and written back to the query string.
// Parameters we don't interpret (filters, sort order, ...) must survive a
// page change untouched and in their original order.

use std::fmt;

use crate::web_app::config::PAGE_PARAM;

/// Ordered list of query parameters.
///
/// Duplicate keys are kept as-is on parse; `set` collapses them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a `location.search` value, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .strip_prefix('?')
            .unwrap_or(search)
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(segment), String::new()),
            })
            .collect();

        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, keeping the position of its first occurrence.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Requested page, if the `p` parameter holds a number
    pub fn page(&self) -> Option<u32> {
        self.get(PAGE_PARAM).and_then(|p| p.trim().parse().ok())
    }

    /// Copy of this query with only the page parameter changed
    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.set(PAGE_PARAM, page.to_string());
        next
    }

    /// `?`-prefixed form for appending to a path; empty when there are no pairs
    pub fn to_search(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{self}")
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

/// Target of a page button: same path, page parameter replaced
pub fn page_href(path: &str, query: &QueryString, page: u32) -> String {
    format!("{path}{}", query.with_page(page).to_search())
}

/// Strip the leading `?` from a raw `location.search` value.
///
/// The result is what gets forwarded to the backend and what identifies
/// a fetch; it is not re-encoded.
pub fn normalize_search(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
