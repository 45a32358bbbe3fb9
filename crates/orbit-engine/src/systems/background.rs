use crate::renderer::traits::{ImageSource, Rect, Surface};

/// Aspect-preserving "contain" fit of an image inside a surface, centered.
///
/// Fits to the surface width first; if that makes the image taller than the
/// surface, fits to the height instead. Returns `None` when either image
/// dimension is not positive, since no aspect ratio exists.
pub fn fit_contain(image: (f32, f32), surface: (f32, f32)) -> Option<Rect> {
    let (iw, ih) = image;
    let (sw, sh) = surface;
    if !(iw > 0.0 && ih > 0.0) {
        return None;
    }
    let aspect = iw / ih;
    let mut width = sw;
    let mut height = sw / aspect;
    if height > sh {
        height = sh;
        width = sh * aspect;
    }
    Some(Rect::new((sw - width) / 2.0, (sh - height) / 2.0, width, height))
}

/// Draw `image` letterboxed/pillarboxed to fit the surface.
/// Returns the destination rect, or `None` if nothing was drawn.
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, image: &S::Image) -> Option<Rect> {
    let dest = fit_contain(image.dimensions(), surface.size())?;
    surface.draw_image(image, dest);
    Some(dest)
}
