//! Canvas2D implementation of the engine's `Surface`.

use glam::Vec2;
use orbit_engine::{ImageSource, Paint, Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::BridgeError;

/// A decoded background image.
#[derive(Debug, Clone)]
pub struct CanvasImage(pub HtmlImageElement);

impl ImageSource for CanvasImage {
    fn dimensions(&self) -> (f32, f32) {
        (self.0.natural_width() as f32, self.0.natural_height() as f32)
    }
}

/// `Surface` backed by a `<canvas>` element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` and acquire its 2D context.
    pub fn from_canvas_id(id: &str) -> Result<Self, BridgeError> {
        let document = web_sys::window()
            .ok_or(BridgeError::NoWindow)?
            .document()
            .ok_or(BridgeError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| BridgeError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BridgeError::NotACanvas(id.to_string()))?;
        Self::from_canvas(canvas)
    }

    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, BridgeError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(BridgeError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BridgeError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    fn apply_paint(&self, paint: &Paint) -> Result<(), BridgeError> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::Radial(g) => {
                let gradient = self.ctx.create_radial_gradient(
                    g.start.x as f64,
                    g.start.y as f64,
                    g.start_radius as f64,
                    g.end.x as f64,
                    g.end.y as f64,
                    g.end_radius as f64,
                )?;
                for stop in &g.stops {
                    gradient.add_color_stop(stop.offset, &stop.color.to_string())?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn try_fill_circle(&self, center: Vec2, radius: f32, paint: &Paint) -> Result<(), BridgeError> {
        self.apply_paint(paint)?;
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    type Image = CanvasImage;

    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        // Canvas rejects negative radii and gradients with a negative end radius;
        // those sprites simply don't show up.
        if let Err(e) = self.try_fill_circle(center, radius, paint) {
            log::trace!("fill_circle skipped: {}", e);
        }
    }

    fn draw_image(&mut self, image: &CanvasImage, dest: Rect) {
        let result = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &image.0,
            dest.x as f64,
            dest.y as f64,
            dest.width as f64,
            dest.height as f64,
        );
        if let Err(e) = result {
            log::warn!("background draw failed: {}", BridgeError::from(e));
        }
    }
}
