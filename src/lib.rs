pub mod constants;

mod allowed_headers;
mod context;
mod dispatch;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use context::RequestContext;
pub use dispatch::{Dispatch, ResponseWriter, apply_headers};
pub use headers::{Header, Headers};
pub use options::CorsOptions;
pub use origin::{Origin, OriginDecision, OriginMatcher, PatternError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
