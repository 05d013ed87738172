use crate::constants::header;
use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::middleware::CorsHandler;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, CorsRejection, RejectionReason};
use std::sync::Arc;
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// A `Cors` is immutable once built and can be shared across threads.
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
    max_age: u64,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let max_age = options.effective_max_age();
        if u64::try_from(options.max_age).is_ok_and(|requested| requested > max_age) {
            debug!(
                requested = options.max_age,
                effective = max_age,
                "clamped CORS max age"
            );
        }

        Ok(Self { options, max_age })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Effective `Access-Control-Max-Age` in seconds, `0` when omitted.
    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// Wraps `inner` so every request passes through this policy first.
    pub fn wrap<H>(self, inner: H) -> CorsHandler<H> {
        CorsHandler::new(Arc::new(self), inner)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options, self.max_age);
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);

        let allow_origin = match builder.resolve_origin(request) {
            OriginOutcome::Skip => {
                trace!(method = request.method, "not a CORS request");
                return CorsDecision::NotApplicable {
                    headers: headers.into_headers(),
                };
            }
            OriginOutcome::Disallow(origin) => {
                debug!(%origin, method = request.method, "rejected CORS origin");
                return CorsDecision::Rejected(CorsRejection {
                    headers: headers.into_headers(),
                    reason: RejectionReason::OriginNotAllowed { origin },
                });
            }
            OriginOutcome::Allow(value) => value,
        };

        headers.extend(builder.build_origin_headers(&allow_origin));

        if request.is_options() {
            Self::process_preflight(&builder, request, headers)
        } else {
            Self::process_simple(&builder, request, headers)
        }
    }

    fn process_preflight(
        builder: &HeaderBuilder<'_>,
        request: &RequestContext<'_>,
        mut headers: HeaderCollection,
    ) -> CorsDecision {
        headers.extend(builder.build_preflight_vary());

        if request.requested_method().is_none() {
            headers.remove(header::ACCESS_CONTROL_ALLOW_ORIGIN);
            headers.remove(header::ACCESS_CONTROL_ALLOW_CREDENTIALS);
            debug!(
                origin = request.origin().unwrap_or_default(),
                "rejected preflight without Access-Control-Request-Method"
            );
            return CorsDecision::Rejected(CorsRejection {
                headers: headers.into_headers(),
                reason: RejectionReason::MissingAccessControlRequestMethod,
            });
        }

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        trace!(
            origin = request.origin().unwrap_or_default(),
            "accepted preflight request"
        );
        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        }
    }

    fn process_simple(
        builder: &HeaderBuilder<'_>,
        request: &RequestContext<'_>,
        mut headers: HeaderCollection,
    ) -> CorsDecision {
        headers.extend(builder.build_exposed_headers());

        trace!(
            origin = request.origin().unwrap_or_default(),
            method = request.method,
            "accepted CORS request"
        );
        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
