//! # dealfinder-cache
//!
//! The result cache: hashes a normalized query to a cache key and
//! stores/retrieves structured result sets through the `ICacheStore`
//! contract. Freshness is not this crate's opinion: TTLs come from the
//! freshness engine, and callers re-validate hits against the 24-hour
//! ceiling themselves.

pub mod key;
mod memory_store;
mod result_cache;
pub mod retry;

pub use memory_store::MemoryStore;
pub use result_cache::ResultCache;
