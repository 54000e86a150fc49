use crate::allowed_headers::AllowedHeaders;
use crate::constants::method;
use crate::origin::Origin;

/// User-supplied CORS configuration.
///
/// Every field has a documented default; overlay the fields you care about
/// with struct-update syntax and hand the result to
/// [`CorsPolicy::new`](crate::CorsPolicy::new).
#[derive(Clone)]
pub struct CorsOptions {
    pub origin: Origin,
    /// Methods advertised on preflight responses, joined in the order given.
    pub methods: Vec<String>,
    /// Forward a handled preflight to downstream handlers instead of
    /// terminating the exchange.
    pub preflight_continue: bool,
    /// Status used to terminate a short-circuited preflight.
    pub options_success_status: u16,
    pub credentials: bool,
    pub allowed_headers: AllowedHeaders,
    /// Alias for `allowed_headers`; folded into it during policy resolution
    /// when `allowed_headers` is left at its default.
    pub headers: Option<AllowedHeaders>,
    pub exposed_headers: Option<Vec<String>>,
    /// Preflight cache lifetime in seconds.
    pub max_age: Option<u64>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            methods: vec![
                method::HEAD.into(),
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::PATCH.into(),
                method::DELETE.into(),
            ],
            preflight_continue: false,
            options_success_status: 204,
            credentials: false,
            allowed_headers: AllowedHeaders::default(),
            headers: None,
            exposed_headers: None,
            max_age: None,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
