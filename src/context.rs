/// Read-only view of the request fields the engine consults.
///
/// Absent headers are represented as empty strings; the engine treats the
/// two identically.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_headers: &'a str,
}
