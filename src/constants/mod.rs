/// Page served when a listing request does not name one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when a listing request does not name one.
pub const DEFAULT_LIMIT: i64 = 20;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
