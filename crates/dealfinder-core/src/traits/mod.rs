//! Capability traits at the external seams. The pipeline never talks to a
//! concrete store, provider, or model, only to these.

mod completion;
mod prober;
mod provider;
mod store;

pub use completion::ICompletion;
pub use prober::{IUrlProber, ProbeVerdict};
pub use provider::ISearchProvider;
pub use store::ICacheStore;
