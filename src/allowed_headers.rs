use crate::header_list::HeaderList;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedHeaders {
    /// Echo the preflight's `Access-Control-Request-Headers` verbatim.
    #[default]
    MirrorRequest,
    List(HeaderList),
}

impl AllowedHeaders {
    /// Builds an allow-list of canonical header names. An empty list falls
    /// back to [`AllowedHeaders::MirrorRequest`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = HeaderList::new(values);
        if list.is_empty() {
            Self::MirrorRequest
        } else {
            Self::List(list)
        }
    }

    /// Header value to emit for a preflight carrying `request_headers`.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        match self {
            Self::List(list) => list.header_value(),
            Self::MirrorRequest => request_headers
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string),
        }
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        match self {
            Self::List(list) => list.first_invalid(),
            Self::MirrorRequest => None,
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
