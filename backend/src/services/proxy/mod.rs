//! Forwards the export API to the configured export service.
//!
//! The browser client only knows relative `/api/...` paths. Everything under
//! that prefix is relayed with its method, query, body and end-to-end headers
//! (cookies included, so a server-side session survives the hop), and the
//! upstream status, headers and body come back the same way. Hop-by-hop
//! headers are dropped in both directions. When the upstream cannot be
//! reached the client gets a `502` with an `{error}` body, which it reports
//! like any other failure.

use actix_web::web::{route, scope};
use actix_web::Scope;

mod forward;

pub use forward::Upstream;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope relaying the export API.
pub fn configure_routes() -> Scope {
    scope(API_PATH).default_service(route().to(forward::process))
}
