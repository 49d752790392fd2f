// ABOUTME: Library module for the mdslides program.
// ABOUTME: Contains the slide splitting, block rendering and inline rendering engine.

// Reexport modules
pub mod block;
pub mod errors;
pub mod inline;
pub mod presentation;

// Reexport common types and functions
pub use block::render_slide;
pub use errors::{MarkupError, Result};
pub use inline::render_inline;
pub use presentation::{render_presentation, render_to_string, Slides};
