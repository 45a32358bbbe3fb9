pub mod commands;
pub mod traits;

pub use commands::{CommandBuffer, DrawCommand};
pub use traits::{ColorStop, ImageSource, Paint, RadialGradient, Rect, Surface};
