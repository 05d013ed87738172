use crate::constants::method;

/// Borrowed view of the request fields the CORS decision depends on.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// `Origin` value, or `None` when the header is missing or blank.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.trim().is_empty())
    }

    /// `Access-Control-Request-Method` value, or `None` when missing or blank.
    pub fn requested_method(&self) -> Option<&'a str> {
        self.access_control_request_method
            .filter(|value| !value.trim().is_empty())
    }

    /// Methods are case-sensitive; only an exact `OPTIONS` is a preflight.
    pub fn is_options(&self) -> bool {
        self.method == method::OPTIONS
    }
}
