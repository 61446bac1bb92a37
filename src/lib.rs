//! Pfoteneis — application core for "Eis für Pfoten", a map-based directory
//! of dog-friendly ice cream locations with durable bookmarks.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
