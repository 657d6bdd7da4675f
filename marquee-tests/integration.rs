//! Integration tests for Marquee
//!
//! These tests drive the real TMDB client over HTTP against an in-process
//! fake movie database, and the full router on top of it.

#[path = "integration/fake_tmdb.rs"]
mod fake_tmdb;

#[path = "integration/movie_client.rs"]
mod movie_client;

#[path = "integration/web_pages.rs"]
mod web_pages;
