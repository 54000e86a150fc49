use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use preflight::constants::header;
use preflight::{CorsDecision, Headers, RequestContext, ResponseWriter, apply_headers};
use std::convert::Infallible;

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let context = OwnedRequestContext::from_request(&request);

    match state.cors.evaluate(&context.as_request_context()) {
        CorsDecision::Preflight(result) if result.halt_response => {
            // Terminal preflight: the dispatcher writes status, headers and
            // the zero Content-Length in one pass; downstream never runs.
            let mut response = Response::new(Body::empty());
            match state
                .cors
                .dispatch(&context.as_request_context(), &mut AxumResponseWriter {
                    response: &mut response,
                }) {
                Ok(_) => response,
                Err(never) => match never {},
            }
        }
        CorsDecision::Preflight(result) => {
            let mut response = next.run(request).await;
            write_headers(&result.headers, &mut response);
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            write_headers(&result.headers, &mut response);
            response
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: String,
    access_control_request_headers: String,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
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

fn header_string(request: &Request, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

struct AxumResponseWriter<'a> {
    response: &'a mut Response,
}

impl ResponseWriter for AxumResponseWriter<'_> {
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

fn write_headers(headers: &Headers, response: &mut Response) {
    match apply_headers(headers, &mut AxumResponseWriter { response }) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
