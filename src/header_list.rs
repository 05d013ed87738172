use crate::util::{canonical_header_name, is_http_token};
use indexmap::IndexSet;

/// Ordered, de-duplicated set of canonical header names.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HeaderList {
    values: IndexSet<String>,
}

impl HeaderList {
    /// Canonicalizes every entry, drops blanks and keeps the first occurrence
    /// of each name.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|value| canonical_header_name(value.as_ref()))
            .filter(|value| !value.is_empty())
            .collect();

        Self { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Comma-joined header value, or `None` when the list is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().collect::<Vec<_>>().join(","))
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.iter().find(|value| !is_http_token(value))
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
