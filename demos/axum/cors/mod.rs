use std::sync::Arc;

use preflight::{AllowedHeaders, CorsOptions, CorsPolicy, Origin};

pub type SharedPolicy = Arc<CorsPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedPolicy,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CorsOptions {
        origin: Origin::list(["http://api.example.com"]),
        methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allowed_headers: AllowedHeaders::list([
            "Content-Type",
            "X-Requested-With",
            "X-Example-Trace",
        ]),
        exposed_headers: Some(vec!["X-Example-Trace".into()]),
        credentials: true,
        max_age: Some(600),
        ..CorsOptions::default()
    };

    AppState {
        cors: Arc::new(CorsPolicy::new(options)),
        greeting: "Welcome to the axum CORS demo!",
    }
}

pub mod middleware;
