//! Renderer-facing collaborators: color strings, path outlines, and blank
//! surface detection. Nothing here draws.

mod path;
mod primitives;
mod surface;

pub use path::{PathCommand, RoundedRect, rounded_rect_path};
pub use primitives::{Color, hex_to_css};
pub use surface::{is_pixel_buffer_blank, is_rgba_buffer_blank};
