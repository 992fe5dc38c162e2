//! Lucky Number — session storage.
//!
//! Sessions live only as long as the process; nothing is written to disk.

pub mod memory_repository;
