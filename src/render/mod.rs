mod command;
mod cull;

pub use command::{DrawCommand, DrawLayer};
pub use cull::{visible_range, VisibleRange};
