//! Repository functions — one function per read.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, StoreError>`.
//! Listings are ordered by the table's `position` column; nothing here writes.

pub mod content;
pub mod research;
pub mod settings;
