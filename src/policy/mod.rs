//! Precomputed action-value policy.
//!
//! - [`PolicyTable`]: Immutable mapping from [`StateKey`] to action values
//! - [`Engine`]: Greedy decision over one table snapshot
//! - [`Library`]: Process-wide, lazily loaded, atomically swapped table slot
//! - [`Store`]: Fetch contract for serialized artifacts ([`S3`], [`Disk`])
mod action;
mod disk;
mod engine;
mod key;
mod library;
mod s3;
mod store;
mod table;

pub use action::*;
pub use disk::*;
pub use engine::*;
pub use key::*;
pub use library::*;
pub use s3::*;
pub use store::*;
pub use table::*;

#[cfg(test)]
pub(crate) use store::memory;
