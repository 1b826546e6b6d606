//! Business logic. `stats`, `recommend` and `history` are pure functions
//! over in-memory snapshots; the `*Logic` types drive the storage layer.

pub mod backup;
pub mod history;
pub mod inventory;
pub mod log;
pub mod recommend;
pub mod stats;
pub mod tasting;
