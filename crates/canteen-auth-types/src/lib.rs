//! Auth types shared across Canteen crates.
//!
//! Provides role-scoped JWT signing and validation, bcrypt password hashing,
//! and the client-side `Session` model.

pub mod password;
pub mod session;
pub mod token;
