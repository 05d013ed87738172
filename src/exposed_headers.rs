use crate::header_list::HeaderList;
use std::ops::Deref;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    list: HeaderList,
}

impl ExposedHeaders {
    /// Builds the exposed list from the provided iterator, canonicalizing
    /// names and removing duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            list: HeaderList::new(values),
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = HeaderList;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
