//! Shared core of the export client.
//!
//! Everything in here is platform neutral: the browser frontend renders it,
//! the backend host borrows the wire types, and the tests drive it natively.

pub mod error;
pub mod model;
pub mod requests;
pub mod status;
pub mod workflow;
