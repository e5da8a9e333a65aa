//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;
pub mod landing;

pub use auth::AuthPage;
pub use dashboard::Dashboard;
pub use landing::Landing;
