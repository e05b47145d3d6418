//! Configuration: resolved runtime settings and the persistent key-value store
//! that records whether first-time setup has been completed.

mod settings;
mod store;

pub use settings::*;
pub use store::*;
