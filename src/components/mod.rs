//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod chat;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chat::ChatWidget;
pub use loading::{ListSkeleton, Loading};
pub use nav::DashboardHeader;
pub use toast::Toast;
