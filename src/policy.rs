use crate::allowed_headers::AllowedHeaders;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::{Header, HeaderCollection};
use crate::options::CorsOptions;
use crate::origin::{Origin, OriginDecision};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

/// Immutable CORS policy that evaluates requests using [`CorsOptions`].
///
/// Construction happens once at setup time; evaluation is a pure function
/// of the policy and the request, safe to call from any number of
/// concurrent request tasks.
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    /// Resolves `options` into a policy. Resolution cannot fail: the
    /// `headers` alias folds into `allowed_headers` when the latter was
    /// left at its default, and an empty or `"*"` exact origin collapses
    /// to the wildcard rule.
    pub fn new(mut options: CorsOptions) -> Self {
        if let Some(headers_alias) = options.headers.take()
            && matches!(options.allowed_headers, AllowedHeaders::MirrorRequest)
        {
            options.allowed_headers = headers_alias;
        }

        if let Origin::Exact(value) = &options.origin
            && (value.is_empty() || value == "*")
        {
            options.origin = Origin::Any;
        }

        Self { options }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Classifies the request and composes its directive set.
    ///
    /// An `OPTIONS` request (any letter case) is a preflight; everything
    /// else takes the simple path.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            CorsDecision::Preflight(self.evaluate_preflight(request))
        } else {
            CorsDecision::Simple(self.evaluate_simple(request))
        }
    }

    fn evaluate_preflight(&self, request: &RequestContext<'_>) -> PreflightResult {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_headers(request));
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers(request));
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_exposed_headers());

        PreflightResult {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
            halt_response: !self.options.preflight_continue,
        }
    }

    fn evaluate_simple(&self, request: &RequestContext<'_>) -> SimpleResult {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_headers(request));
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_exposed_headers());

        SimpleResult {
            headers: headers.into_headers(),
        }
    }

    fn build_origin_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match self.options.origin.decide(request.origin) {
            OriginDecision::Any => {
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
            }
            OriginDecision::Exact(value) => {
                headers.add_vary(header::ORIGIN);
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, value));
            }
            OriginDecision::Reflect => {
                headers.add_vary(header::ORIGIN);
                if request.origin.is_empty() {
                    headers.push(Header::suppressed(header::ACCESS_CONTROL_ALLOW_ORIGIN));
                } else {
                    headers.push(Header::new(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN,
                        request.origin,
                    ));
                }
            }
            OriginDecision::Disallow => {
                headers.add_vary(header::ORIGIN);
                headers.push(Header::suppressed(header::ACCESS_CONTROL_ALLOW_ORIGIN));
            }
        }
        headers
    }

    fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.options.credentials {
            headers.push(Header::new(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                "true",
            ));
        }
        headers
    }

    fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !self.options.methods.is_empty() {
            headers.push(Header::new(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.options.methods.join(","),
            ));
        }
        headers
    }

    fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match &self.options.allowed_headers {
            AllowedHeaders::List(values) => {
                if !values.is_empty() {
                    headers.push(Header::new(
                        header::ACCESS_CONTROL_ALLOW_HEADERS,
                        values.join(","),
                    ));
                }
            }
            AllowedHeaders::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if !request.access_control_request_headers.is_empty() {
                    headers.push(Header::new(
                        header::ACCESS_CONTROL_ALLOW_HEADERS,
                        request.access_control_request_headers,
                    ));
                }
            }
        }
        headers
    }

    fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.options.max_age {
            headers.push(Header::new(
                header::ACCESS_CONTROL_MAX_AGE,
                value.to_string(),
            ));
        }
        headers
    }

    fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(values) = &self.options.exposed_headers
            && !values.is_empty()
        {
            headers.push(Header::new(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                values.join(","),
            ));
        }
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
