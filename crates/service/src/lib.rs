//! Store and business logic for the persisted high score.
//! - `store` is the persistence boundary (file-backed and in-memory).
//! - `highscore` applies the compare-and-persist rule on top of a store.
//! - Provides clear error types so the HTTP layer only maps, never decides.

pub mod errors;
pub mod highscore;
pub mod store;
