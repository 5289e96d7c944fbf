//! # Domain Models
//!
//! Pure data for the arcade: the training catalog, page addresses and views,
//! and the configuration tree. Only `serde` is allowed here; no I/O, no framework types.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod registry;
