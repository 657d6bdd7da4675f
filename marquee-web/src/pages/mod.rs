//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses sharing one layout.

pub mod home;
pub mod movie;
pub mod search;

// Re-export page handlers
pub use home::home_page;
pub use movie::movie_page;
pub use search::{SearchParams, search_page};
