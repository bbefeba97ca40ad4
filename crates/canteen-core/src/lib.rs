//! Service plumbing shared by Canteen binaries: health checks, request-id and
//! trace layers, tracing setup, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
