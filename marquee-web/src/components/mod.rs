//! Reusable HTML components for the Tailwind UI
//!
//! Components are server-rendered HTML fragments composed into full pages.
//! Every component escapes the text it interpolates.

pub mod layout;
pub mod movie;
pub mod text;

// Re-export main component functions
pub use layout::{card, nav_bar, notice, page_header, render_page};
pub use movie::{movie_card, movie_detail, movie_grid, poster};
pub use text::escape_html;
