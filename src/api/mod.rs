//! API Layer
//!
//! HTTP client, entity records, and document encoding.

pub mod client;
pub mod encode;
pub mod types;

pub use client::*;
