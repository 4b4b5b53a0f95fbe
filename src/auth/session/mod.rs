//! Session storage
//!
//! Sessions map opaque tokens to user indexes. The store is injected into the
//! auth service so the in-memory default can be swapped for a shared
//! external store when several processes serve the same users.

mod memory;
mod store;

pub use memory::InMemorySessionStore;
pub use store::SessionStore;

#[cfg(test)]
pub use store::MockSessionStore;
