use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::MAX_AGE_CEILING;
use crate::context::RequestContext;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use thiserror::Error;

/// Policy configuration consumed by [`crate::Cors::new`].
///
/// Fields may be set directly or through the chaining setters; list setters
/// normalize their input, and [`CorsOptions::validate`] reports anything that
/// still cannot be emitted as a header.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds; `0` omits `Access-Control-Max-Age`.
    pub max_age: i64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Reflect,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: 0,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn validator<F>(self, validator: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>) -> Option<String> + Send + Sync + 'static,
    {
        self.origin(Origin::validator(validator))
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_headers = AllowedHeaders::list(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_age < 0 {
            return Err(ValidationError::NegativeMaxAge(self.max_age));
        }

        if let Some(method) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self
            .allowed_headers
            .first_invalid()
            .or_else(|| self.exposed_headers.first_invalid())
        {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        Ok(())
    }

    /// Max age after clamping to [`MAX_AGE_CEILING`]. Negative values read as `0`.
    pub fn effective_max_age(&self) -> u64 {
        u64::try_from(self.max_age)
            .unwrap_or(0)
            .min(MAX_AGE_CEILING)
    }
}

/// Invalid configuration detected while building a [`crate::Cors`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max age must not be negative (got {0})")]
    NegativeMaxAge(i64),
    #[error("allowed method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeaderName(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
