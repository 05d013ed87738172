//! Middleware glue between the decision engine and an HTTP server.
//!
//! Servers expose a request/response pair through [`Exchange`] and their
//! request handlers through [`Handler`]. [`CorsHandler`] evaluates every
//! request with a shared [`Cors`] policy, writes the resulting headers and,
//! for preflights and rejections, answers the request without calling the
//! wrapped handler.

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::CorsDecision;
use std::sync::Arc;

/// Request/response pair of a single HTTP exchange.
pub trait Exchange {
    fn method(&self) -> &str;

    /// Request header lookup; names compare case-insensitively.
    fn request_header(&self, name: &str) -> Option<&str>;

    /// Replaces any response header value with `value`.
    fn set_header(&mut self, name: &str, value: &str);

    /// Adds `value` next to existing response header values.
    fn append_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);

    fn write_body(&mut self, body: &[u8]);
}

/// A request handler driven through an [`Exchange`].
pub trait Handler<E: ?Sized> {
    fn handle(&self, exchange: &mut E);
}

impl<E, F> Handler<E> for F
where
    E: ?Sized,
    F: Fn(&mut E),
{
    fn handle(&self, exchange: &mut E) {
        self(exchange)
    }
}

/// Wraps an inner [`Handler`] with a CORS policy.
pub struct CorsHandler<H> {
    cors: Arc<Cors>,
    inner: H,
}

impl<H> CorsHandler<H> {
    pub fn new(cors: Arc<Cors>, inner: H) -> Self {
        Self { cors, inner }
    }

    pub fn cors(&self) -> &Arc<Cors> {
        &self.cors
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Clone> Clone for CorsHandler<H> {
    fn clone(&self) -> Self {
        Self {
            cors: Arc::clone(&self.cors),
            inner: self.inner.clone(),
        }
    }
}

impl<E, H> Handler<E> for CorsHandler<H>
where
    E: Exchange + ?Sized,
    H: Handler<E>,
{
    fn handle(&self, exchange: &mut E) {
        let decision = self.cors.check(&request_context(exchange));

        if apply_decision(exchange, decision) {
            self.inner.handle(exchange);
        }
    }
}

/// Reads the CORS-relevant request fields out of `exchange`.
pub fn request_context<E: Exchange + ?Sized>(exchange: &E) -> RequestContext<'_> {
    RequestContext {
        method: exchange.method(),
        origin: exchange.request_header(header::ORIGIN),
        access_control_request_method: exchange
            .request_header(header::ACCESS_CONTROL_REQUEST_METHOD),
        access_control_request_headers: exchange
            .request_header(header::ACCESS_CONTROL_REQUEST_HEADERS),
    }
}

/// Writes `decision` to `exchange`. Returns `true` when the inner handler
/// still has to run.
pub fn apply_decision<E: Exchange + ?Sized>(exchange: &mut E, decision: CorsDecision) -> bool {
    let status = decision.status();
    let body = match decision {
        CorsDecision::Rejected(rejection) => {
            apply_headers(exchange, &rejection.headers);
            Some(rejection.reason.to_string())
        }
        CorsDecision::NotApplicable { headers }
        | CorsDecision::SimpleAccepted { headers }
        | CorsDecision::PreflightAccepted { headers } => {
            apply_headers(exchange, &headers);
            None
        }
    };

    let Some(status) = status else {
        return true;
    };

    exchange.set_status(status);
    if let Some(body) = body {
        exchange.write_body(body.as_bytes());
    }
    false
}

fn apply_headers<E: Exchange + ?Sized>(exchange: &mut E, headers: &Headers) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            exchange.append_header(name, value);
        } else {
            exchange.set_header(name, value);
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
