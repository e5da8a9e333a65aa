//! SecureBank Dashboard
//!
//! Browser frontend for the SecureBank retail banking service, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Public landing page with staff and branch directories
//! - Login / registration with optional NID document upload
//! - Authenticated dashboard: accounts, transactions, loans, cards, KYC
//! - Support chat widget
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the SecureBank REST API via HTTP; the
//! only durable client state is the session token in localStorage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
