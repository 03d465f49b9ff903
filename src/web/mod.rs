//! Actix plumbing for the SSR host.

mod middleware;

pub use middleware::{SECURITY_HEADERS, SecurityHeaders};
