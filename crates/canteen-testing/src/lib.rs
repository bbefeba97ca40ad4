//! Test utilities for Canteen services.
//!
//! Provides `MockAuth` (signed bearer headers per role) and the JSON fixture
//! loader. Import in tests only; never in production code.

pub mod auth;
pub mod fixture;
