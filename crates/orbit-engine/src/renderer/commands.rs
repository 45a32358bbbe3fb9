use glam::Vec2;
use super::traits::{ImageSource, Paint, Rect, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    DrawImage { image: (f32, f32), dest: Rect },
}

/// Image stand-in for the command buffer: only its size matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl ImageSource for ImageSize {
    fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Surface that records draw calls instead of rasterizing them.
/// Used for headless runs and for asserting on frame output.
pub struct CommandBuffer {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(64),
        }
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for CommandBuffer {
    type Image = ImageSize;

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_image(&mut self, image: &ImageSize, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.dimensions(),
            dest,
        });
    }
}
