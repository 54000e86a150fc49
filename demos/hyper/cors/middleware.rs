use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{CONTENT_LENGTH, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};
use preflight::constants::header;
use preflight::{
    CorsDecision, Headers, PreflightResult, RequestContext, ResponseWriter, apply_headers,
};

use super::SharedPolicy;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type DemoBody = Full<Bytes>;

/// Hyper middleware that mirrors the pattern described in the
/// official "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct CorsLayer<S> {
    inner: S,
    cors: SharedPolicy,
}

impl<S> CorsLayer<S> {
    pub fn new(cors: SharedPolicy, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsLayer<S>
where
    S: Service<Request<Incoming>, Response = Response<DemoBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<DemoBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let context = OwnedRequestContext::from_request(&req);

        match self.cors.evaluate(&context.as_request_context()) {
            CorsDecision::Preflight(result) if result.halt_response => {
                let response = preflight_response(&result);
                Box::pin(async move { Ok(response) })
            }
            CorsDecision::Preflight(result) => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    write_headers(&result.headers, &mut response);
                    Ok(response)
                })
            }
            CorsDecision::Simple(result) => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    write_headers(&result.headers, &mut response);
                    Ok(response)
                })
            }
        }
    }
}

fn preflight_response(result: &PreflightResult) -> Response<DemoBody> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::from_u16(result.status).unwrap_or(StatusCode::NO_CONTENT);
    write_headers(&result.headers, &mut response);
    response
        .headers_mut()
        .insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
    response
}

struct OwnedRequestContext {
    method: String,
    origin: String,
    access_control_request_headers: String,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        Self {
            method: request.method().as_str().to_owned(),
            origin: header_string(request, header::ORIGIN),
            access_control_request_headers: header_string(
                request,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: &self.origin,
            access_control_request_headers: &self.access_control_request_headers,
        }
    }
}

fn header_string(request: &Request<Incoming>, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

struct HyperResponseWriter<'a> {
    response: &'a mut Response<DemoBody>,
}

impl ResponseWriter for HyperResponseWriter<'_> {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            self.response.headers_mut().insert(name, value);
        }
        Ok(())
    }

    fn append_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            self.response.headers_mut().append(name, value);
        }
        Ok(())
    }

    fn set_status(&mut self, status: u16) -> Result<(), Self::Error> {
        if let Ok(status) = StatusCode::from_u16(status) {
            *self.response.status_mut() = status;
        }
        Ok(())
    }
}

fn write_headers(headers: &Headers, response: &mut Response<DemoBody>) {
    match apply_headers(headers, &mut HyperResponseWriter { response }) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
