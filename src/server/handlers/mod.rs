//! HTTP request handlers for the agenda server.

mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use pages::index;
pub use static_files::{serve_asset, serve_css};
