use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;

/// Write access to the outgoing response, as granted by the hosting server.
///
/// Faults reported by the writer propagate unchanged out of
/// [`apply_headers`] and [`CorsPolicy::dispatch`]; the engine never retries
/// or translates them.
pub trait ResponseWriter {
    type Error;

    /// Set a header, overwriting any existing value.
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Append to a header that accumulates values, such as `Vary`.
    fn append_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    fn set_status(&mut self, status: u16) -> Result<(), Self::Error>;
}

/// Outcome of dispatching a request through the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The exchange was terminated here; the downstream chain must not run.
    ShortCircuited,
    /// Headers are applied; control belongs to the downstream chain.
    Forwarded,
}

/// Applies composed headers to a response.
///
/// `Vary` is appended rather than set, so causes recorded here accumulate
/// with whatever the response already varies on.
pub fn apply_headers<W: ResponseWriter>(
    headers: &Headers,
    response: &mut W,
) -> Result<(), W::Error> {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            response.append_header(name, value)?;
        } else {
            response.set_header(name, value)?;
        }
    }
    Ok(())
}

impl CorsPolicy {
    /// Runs the full per-request protocol: compose directives, apply them
    /// to `response`, then report whether the exchange ends here.
    ///
    /// A preflight is terminated with the configured success status unless
    /// `preflight_continue` is set. Callers invoke their downstream chain
    /// iff the outcome is [`Dispatch::Forwarded`].
    pub fn dispatch<W: ResponseWriter>(
        &self,
        request: &RequestContext<'_>,
        response: &mut W,
    ) -> Result<Dispatch, W::Error> {
        match self.evaluate(request) {
            CorsDecision::Preflight(result) => {
                apply_headers(&result.headers, response)?;
                if result.halt_response {
                    response.set_status(result.status)?;
                    // Safari hangs on a bodyless 204 without an explicit
                    // Content-Length.
                    response.set_header(header::CONTENT_LENGTH, "0")?;
                    Ok(Dispatch::ShortCircuited)
                } else {
                    Ok(Dispatch::Forwarded)
                }
            }
            CorsDecision::Simple(result) => {
                apply_headers(&result.headers, response)?;
                Ok(Dispatch::Forwarded)
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
