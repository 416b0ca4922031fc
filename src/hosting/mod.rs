//! Session supervision and the HTTP/WebSocket surface.
//!
//! - [`Casino`]: Registry of sessions and their lifecycles
//! - [`SessionHandle`]: Registry entry holding a session's stop signal
//! - [`Server`]: actix-web routes bridging clients to sessions
mod casino;
mod handle;
mod request;
mod server;

pub use casino::*;
pub use handle::*;
pub use request::*;
pub use server::*;
