//! Text rendering helpers: console colors, console line layouts, and positional message templates.

mod color;
mod layout;
pub mod template;

pub use color::{Color, colorize};
pub use layout::{DEFAULT_LAYOUT, LayoutSegment, LayoutValues, LineLayout, Placeholder};
pub use template::MessageTemplate;
