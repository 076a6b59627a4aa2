//! Cross-origin policy.

use actix_cors::Cors;

/// Any origin, method and header is accepted.
pub fn cors() -> Cors {
    Cors::permissive()
}
