use crate::core::collection::SpriteSet;
use crate::renderer::traits::Surface;
use crate::systems::background::draw_background;

/// Render one frame: clear, background (if any), then every sprite.
/// Drawing advances each sprite's moon, so this mutates the set.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    background: Option<&S::Image>,
    sprites: &mut SpriteSet,
) {
    surface.clear();
    if let Some(image) = background {
        draw_background(surface, image);
    }
    sprites.draw_all(surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::api::types::SpriteId;
    use crate::components::color::Color;
    use crate::components::sprite::PlanetSprite;
    use crate::renderer::commands::{CommandBuffer, DrawCommand, ImageSize};
    use crate::renderer::traits::Rect;
    use crate::systems::rng::Rng;

    #[test]
    fn frame_order_is_clear_background_sprites() {
        let mut rng = Rng::new(11);
        let mut sprites = SpriteSet::new();
        sprites.add(PlanetSprite::new(SpriteId(1), Vec2::new(50.0, 50.0), 10.0, Color::WHITE, &mut rng));

        let mut buf = CommandBuffer::new(200.0, 100.0);
        let bg = ImageSize::new(200.0, 100.0);
        render_frame(&mut buf, Some(&bg), &mut sprites);

        let cmds = buf.commands();
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[0], DrawCommand::ClearRect(Rect::from_size(200.0, 100.0)));
        assert!(matches!(cmds[1], DrawCommand::DrawImage { .. }));
        assert!(matches!(cmds[2], DrawCommand::FillCircle { radius, .. } if radius == 10.0));
        assert!(matches!(cmds[3], DrawCommand::FillCircle { radius, .. } if radius == 5.0));
    }

    #[test]
    fn empty_frame_only_clears() {
        let mut sprites = SpriteSet::new();
        let mut buf = CommandBuffer::new(10.0, 10.0);
        render_frame(&mut buf, None, &mut sprites);
        assert_eq!(buf.commands().len(), 1);
    }
}
