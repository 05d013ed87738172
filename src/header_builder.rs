use crate::constants::{WILDCARD_ORIGIN, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OriginOutcome {
    Skip,
    Disallow(String),
    Allow(String),
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
    max_age: u64,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions, max_age: u64) -> Self {
        Self { options, max_age }
    }

    pub(crate) fn resolve_origin(&self, request: &RequestContext<'_>) -> OriginOutcome {
        let Some(origin) = request.origin() else {
            return OriginOutcome::Skip;
        };

        match self.options.origin.resolve(request) {
            OriginDecision::Any => OriginOutcome::Allow(WILDCARD_ORIGIN.to_string()),
            OriginDecision::Exact(value) => OriginOutcome::Allow(value),
            OriginDecision::Mirror => OriginOutcome::Allow(origin.to_string()),
            OriginDecision::Disallow => OriginOutcome::Disallow(origin.to_string()),
            OriginDecision::Skip => OriginOutcome::Skip,
        }
    }

    /// `Access-Control-Allow-Credentials` (never beside the wildcard) followed
    /// by `Access-Control-Allow-Origin`.
    pub(crate) fn build_origin_headers(&self, allow_origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        if allow_origin != WILDCARD_ORIGIN && self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers
    }

    pub(crate) fn build_preflight_vary(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ACCESS_CONTROL_ALLOW_METHODS);
        headers.add_vary(header::ACCESS_CONTROL_ALLOW_HEADERS);
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self
            .options
            .allowed_headers
            .header_value(request.access_control_request_headers)
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.max_age > 0 {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, self.max_age.to_string());
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
