//! State Management
//!
//! Session store and global notice state.

pub mod global;
pub mod session;
