#![allow(dead_code)]

use super::headers::{header_value, vary_values};
use preflight::constants::header;
use preflight::{CorsDecision, Headers, PreflightResult};
use std::collections::HashSet;

pub fn assert_preflight(decision: CorsDecision) -> PreflightResult {
    match decision {
        CorsDecision::Preflight(result) => result,
        other => panic!("expected preflight decision, got {other:?}"),
    }
}

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {other:?}"),
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
    assert_eq!(
        header_value(headers, name),
        None,
        "header {name} should be absent"
    );
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: HashSet<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected, "unexpected Vary entries");
}

pub fn assert_vary_contains(headers: &Headers, name: &str) {
    assert!(
        vary_values(headers).contains(name),
        "Vary should contain {name}, got {:?}",
        header_value(headers, header::VARY)
    );
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert_header_absent(headers, header::VARY);
}
