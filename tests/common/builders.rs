#![allow(dead_code)]

use preflight::constants::method;
use preflight::{
    AllowedHeaders, CorsDecision, CorsOptions, CorsPolicy, Origin, RequestContext,
};

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::default()
}

#[derive(Default)]
pub struct PolicyBuilder {
    origin: Option<Origin>,
    methods: Option<Vec<String>>,
    allowed_headers: Option<AllowedHeaders>,
    headers_alias: Option<AllowedHeaders>,
    exposed_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    preflight_continue: Option<bool>,
    options_success_status: Option<u16>,
}

impl PolicyBuilder {
    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn headers_alias(mut self, headers: AllowedHeaders) -> Self {
        self.headers_alias = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn preflight_continue(mut self, enabled: bool) -> Self {
        self.preflight_continue = Some(enabled);
        self
    }

    pub fn success_status(mut self, status: u16) -> Self {
        self.options_success_status = Some(status);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let defaults = CorsOptions::default();

        CorsPolicy::new(CorsOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            headers: self.headers_alias,
            exposed_headers: self.exposed_headers.or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.or(defaults.max_age),
            preflight_continue: self
                .preflight_continue
                .unwrap_or(defaults.preflight_continue),
            options_success_status: self
                .options_success_status
                .unwrap_or(defaults.options_success_status),
        })
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub struct RequestBuilder {
    method: String,
    origin: String,
    request_headers: String,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: String::new(),
            request_headers: String::new(),
        }
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn request_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.request_headers = headers.into();
        self
    }

    pub fn evaluate(&self, policy: &CorsPolicy) -> CorsDecision {
        policy.evaluate(&RequestContext {
            method: &self.method,
            origin: &self.origin,
            access_control_request_headers: &self.request_headers,
        })
    }
}
