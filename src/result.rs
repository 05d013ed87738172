use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// Outcome of evaluating a single request against a [`crate::Cors`] policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Not a cross-origin request. Apply `headers` (only `Vary`) and delegate.
    NotApplicable { headers: Headers },
    /// Cross-origin actual request. Apply `headers` and delegate.
    SimpleAccepted { headers: Headers },
    /// Valid preflight. Respond `204 No Content` without delegating.
    PreflightAccepted { headers: Headers },
    /// Respond `403 Forbidden` with the rejection reason as body.
    Rejected(CorsRejection),
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            Self::NotApplicable { headers }
            | Self::SimpleAccepted { headers }
            | Self::PreflightAccepted { headers } => headers,
            Self::Rejected(rejection) => &rejection.headers,
        }
    }

    /// Status the middleware answers with itself, or `None` when the inner
    /// handler decides.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotApplicable { .. } | Self::SimpleAccepted { .. } => None,
            Self::PreflightAccepted { .. } => Some(status::NO_CONTENT),
            Self::Rejected(_) => Some(status::FORBIDDEN),
        }
    }

    /// Whether the inner handler must be invoked.
    pub fn delegates(&self) -> bool {
        self.status().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsRejection {
    pub headers: Headers,
    pub reason: RejectionReason,
}

/// Why a request was answered with `403 Forbidden`. The display form is the
/// response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Invalid origin {origin}")]
    OriginNotAllowed { origin: String },
    #[error("Invalid preflighted request, missing Access-Control-Request-Method header")]
    MissingAccessControlRequestMethod,
}
