//! Core module tree: escape-time engine, errors, debug logging.

pub mod error;
pub mod titan;
#[macro_use]
pub mod debug; // gated debug logging (TITAN_DEBUG=1) provides debug_log! macro
