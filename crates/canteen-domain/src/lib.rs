//! Domain types shared across all Canteen crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod contact;
pub mod date;
pub mod feedback;
pub mod food;
pub mod order;
pub mod role;
