pub mod remote;
pub mod restore;
pub mod snapshot;
pub mod sync;

pub use sync::{SyncOutcome, Synchronizer};
