use crate::constants::method;
use crate::util::is_http_token;
use indexmap::IndexSet;
use once_cell::sync::Lazy;

static DEFAULT_METHODS: Lazy<AllowedMethods> = Lazy::new(|| {
    AllowedMethods::list([
        method::GET,
        method::HEAD,
        method::PUT,
        method::POST,
        method::DELETE,
    ])
});

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Methods are trimmed, uppercased and de-duplicated while keeping the order
/// in which they were first supplied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: IndexSet<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|value| value.as_ref().trim().to_ascii_uppercase())
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

    /// Return the header value representation, if any.
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

impl Default for AllowedMethods {
    fn default() -> Self {
        DEFAULT_METHODS.clone()
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
