//! Per-session event pipeline.
//!
//! Raw engine messages are decoded into [`Event`]s, routed by the
//! [`Dispatcher`] against the session's [`Tracker`], and answered with
//! [`ServerMessage`]s pushed through the non-blocking [`Emitter`].
//!
//! - [`Session`]: Event loop owning one dispatcher and its engine feed
//! - [`Table`] / [`Lobby`]: Contract of the external table engine
mod command;
mod dispatcher;
mod emitter;
mod event;
mod fault;
mod message;
mod session;
mod stakes;
mod table;
mod tracker;

#[cfg(test)]
pub mod paper;

pub use command::*;
pub use dispatcher::*;
pub use emitter::*;
pub use event::*;
pub use fault::*;
pub use message::*;
pub use session::*;
pub use stakes::*;
pub use table::*;
pub use tracker::*;
