use super::headers::{header_value, vary_values};
use cors_gate::{CorsDecision, Headers, RejectionReason};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers } => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::NotApplicable { headers } => headers,
        other => panic!("expected not applicable decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> (Headers, RejectionReason) {
    match decision {
        CorsDecision::Rejected(rejection) => (rejection.headers, rejection.reason),
        other => panic!("expected rejected decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "header {name} should be absent"
    );
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let expected: Vec<String> = expected.iter().map(|value| value.to_string()).collect();
    assert_eq!(vary_values(headers), expected);
}
