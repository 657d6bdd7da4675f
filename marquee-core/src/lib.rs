//! Marquee Core - Shared configuration and process setup
//!
//! This crate holds the pieces every other Marquee crate agrees on:
//! centralized configuration, the runtime mode switch, tracing setup
//! and the top-level error type.

pub mod config;
pub mod mode;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{MarqueeConfig, ServerConfig, TmdbConfig};
pub use mode::RuntimeMode;

/// Core errors raised while configuring or starting Marquee.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
