//! # dealfinder-session
//!
//! Per-session state: the last ranked result set shown to the user, the
//! lookup indexes the resolver uses, and topical memory. State is fully
//! partitioned by session id; persistence goes through the cache store
//! under `session:{id}` and expires via store TTL.

mod manager;
mod state;

pub use manager::SessionManager;
pub use state::SessionState;
