//! Marquee Web - Server-rendered movie search UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Renders the home page, search results and movie detail pages from data
//! fetched per request, plus a small JSON API over the same operations.

pub mod components;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use errors::WebError;
pub use server::{AppState, build_router, run_server};
