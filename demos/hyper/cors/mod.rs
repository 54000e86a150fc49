use std::sync::Arc;

use preflight::{AllowedHeaders, CorsOptions, CorsPolicy, Origin};

pub type SharedPolicy = Arc<CorsPolicy>;

pub struct AppState {
    pub cors: SharedPolicy,
    pub greeting: &'static str,
}

pub type SharedAppState = Arc<AppState>;

pub fn build_state() -> SharedAppState {
    let options = CorsOptions {
        origin: Origin::list(["http://api.example.com"]),
        methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allowed_headers: AllowedHeaders::list(["Content-Type", "X-Requested-With"]),
        exposed_headers: Some(vec!["X-Example-Trace".into()]),
        max_age: Some(600),
        ..CorsOptions::default()
    };

    Arc::new(AppState {
        cors: Arc::new(CorsPolicy::new(options)),
        greeting: "Welcome to the hyper CORS demo!",
    })
}

pub mod middleware;
