use crate::headers::Headers;

/// Headers and termination metadata for a preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    /// Status for the short-circuited response.
    pub status: u16,
    /// Terminate the exchange here instead of forwarding it downstream.
    pub halt_response: bool,
}

/// Headers for a non-preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
}
