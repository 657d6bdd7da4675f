//! JSON API handlers

pub mod api;

pub use api::{SearchResponse, api_movie, api_search};
