//! Shared utilities.
//!
//! Currently just color conversion helpers for the catalog resource.

pub mod color;
