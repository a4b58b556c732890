// Analysis history: the bounded, append-only log of past gap analyses and the
// store backends that persist it.

pub mod file_store;
pub mod handlers;
pub mod log;
pub mod memory;
pub mod store;

pub use store::{AnalysisStore, StoreError};
