use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsDecision, Headers, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = state.cors.check(&request_context(&request));

    match decision {
        CorsDecision::PreflightAccepted { headers } => {
            respond(StatusCode::NO_CONTENT, &headers, Body::empty())
        }
        CorsDecision::Rejected(rejection) => respond(
            StatusCode::FORBIDDEN,
            &rejection.headers,
            Body::from(rejection.reason.to_string()),
        ),
        CorsDecision::SimpleAccepted { headers } | CorsDecision::NotApplicable { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
    }
}

fn request_context(request: &Request) -> RequestContext<'_> {
    let headers = request.headers();
    let lookup = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    RequestContext {
        method: request.method().as_str(),
        origin: lookup(header::ORIGIN),
        access_control_request_method: lookup(header::ACCESS_CONTROL_REQUEST_METHOD),
        access_control_request_headers: lookup(header::ACCESS_CONTROL_REQUEST_HEADERS),
    }
}

fn respond(status: StatusCode, headers: &Headers, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            continue;
        };

        if header_name == axum::http::header::VARY {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}
