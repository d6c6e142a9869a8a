//! Cell-buffer rendering primitives shared by the field and its collaborators.

mod buffer;
mod cell;
mod rect;
mod style;
pub mod text;

pub use buffer::Buffer;
pub use cell::Cell;
pub use rect::Rect;
pub use style::{Brush, Palette, Rgb, TextStyle};
