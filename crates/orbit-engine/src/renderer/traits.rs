//! Drawing surface contract.
//!
//! The engine never talks to a graphics API directly. Every frame is
//! expressed as a handful of calls on a [`Surface`]: the browser bridge
//! maps them onto `CanvasRenderingContext2d`, tests record them into a
//! [`CommandBuffer`](super::commands::CommandBuffer).

use glam::Vec2;
use crate::components::color::Color;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }
}

/// A single gradient stop. `offset` is in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

/// Two-circle radial gradient, same model as Canvas2D `createRadialGradient`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start: Vec2,
    pub start_radius: f32,
    pub end: Vec2,
    pub end_radius: f32,
    /// Stops in the order they were added.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(start: Vec2, start_radius: f32, end: Vec2, end_radius: f32) -> Self {
        Self {
            start,
            start_radius,
            end,
            end_radius,
            stops: Vec::with_capacity(3),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// Fill style for shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Radial(RadialGradient),
}

/// Anything that can be drawn as a background image.
pub trait ImageSource {
    /// Intrinsic (width, height) in pixels.
    fn dimensions(&self) -> (f32, f32);
}

/// Fixed-size 2D raster target.
pub trait Surface {
    /// Decoded image handle accepted by [`Surface::draw_image`].
    type Image: ImageSource;

    /// Surface (width, height) in surface units.
    fn size(&self) -> (f32, f32);

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill a full circle: begin path, arc 0..2π, fill, close path.
    /// Negative radii are passed through; implementations decide how to
    /// treat them (Canvas2D rejects them, which draws nothing).
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Draw an image scaled into `dest`.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = self.size();
        self.clear_rect(Rect::from_size(w, h));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_keeps_stop_order() {
        let g = RadialGradient::new(Vec2::ZERO, 0.0, Vec2::ONE, 10.0)
            .with_stop(0.0, Color::WHITE)
            .with_stop(0.3, Color::hsl(10.0, 70.0, 50.0))
            .with_stop(1.0, Color::BLACK);
        let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.3, 1.0]);
    }
}
