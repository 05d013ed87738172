use crate::constants::WILDCARD_ORIGIN;
use crate::context::RequestContext;
use crate::util::equals_ignore_case;
use std::fmt;
use std::sync::Arc;

/// Decides which origin a request may be answered for. Returning `None`, or
/// an empty string, rejects the request.
pub type OriginValidatorFn = dyn for<'a> Fn(&RequestContext<'a>) -> Option<String> + Send + Sync;

/// How `Access-Control-Allow-Origin` is derived for a cross-origin request.
#[derive(Clone, Default)]
pub enum Origin {
    /// Echo the request's `Origin` header back verbatim.
    #[default]
    Reflect,
    Validator(Arc<OriginValidatorFn>),
    /// Treat every request as a same-origin request.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    Mirror,
    Disallow,
    Skip,
}

impl<T> From<Option<T>> for OriginDecision
where
    T: Into<String>,
{
    fn from(value: Option<T>) -> Self {
        match value.map(Into::into) {
            Some(inner) if inner.trim().is_empty() => OriginDecision::Disallow,
            Some(inner) if inner == WILDCARD_ORIGIN => OriginDecision::Any,
            Some(inner) => OriginDecision::Exact(inner),
            None => OriginDecision::Disallow,
        }
    }
}

impl Origin {
    pub fn reflect() -> Self {
        Self::Reflect
    }

    pub fn validator<F>(validator: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> Option<String> + Send + Sync + 'static,
    {
        Self::Validator(Arc::new(validator))
    }

    /// Validator answering the wildcard `*` for every origin.
    pub fn any() -> Self {
        Self::validator(|_| Some(WILDCARD_ORIGIN.to_string()))
    }

    /// Validator admitting a single origin, compared case-insensitively.
    pub fn exact<S: Into<String>>(value: S) -> Self {
        let allowed = value.into();
        Self::validator(move |ctx| {
            ctx.origin()
                .filter(|origin| equals_ignore_case(&allowed, origin))
                .map(|_| allowed.clone())
        })
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub fn resolve(&self, ctx: &RequestContext<'_>) -> OriginDecision {
        if ctx.origin().is_none() {
            return OriginDecision::Skip;
        }

        match self {
            Origin::Reflect => OriginDecision::Mirror,
            Origin::Validator(validator) => OriginDecision::from(validator(ctx)),
            Origin::Disabled => OriginDecision::Skip,
        }
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Reflect => f.write_str("Reflect"),
            Origin::Validator(_) => f.write_str("Validator(..)"),
            Origin::Disabled => f.write_str("Disabled"),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
