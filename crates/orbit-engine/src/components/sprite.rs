use glam::Vec2;
use crate::api::types::SpriteId;
use crate::components::color::Color;
use crate::renderer::traits::{Paint, RadialGradient, Surface};
use crate::systems::rng::Rng;

/// Default moon disc radius.
pub const MOON_RADIUS: f32 = 5.0;
/// Default gap between the planet rim and the moon's orbit.
pub const ORBIT_OFFSET: f32 = 10.0;
/// Default orbit advance per draw, in radians.
pub const ORBIT_SPEED: f32 = 0.02;

/// Gradient stop where the base color sits between the white core and black rim.
const BASE_COLOR_STOP: f32 = 0.3;

/// A shaded planet disc with a single moon circling it.
///
/// The moon's angle advances every time the sprite is drawn: simulation
/// and rendering are one step, so a sprite that is never drawn never moves.
#[derive(Debug, Clone)]
pub struct PlanetSprite {
    /// Unique identifier.
    pub id: SpriteId,
    /// Center in surface coordinates.
    pub pos: Vec2,
    /// Planet disc radius. Not validated.
    pub radius: f32,
    /// Base color (middle gradient stop).
    pub color: Color,
    /// Moon disc radius.
    pub moon_radius: f32,
    /// Distance from planet center to moon center.
    pub orbit_radius: f32,
    /// Current moon angle in radians. Grows without wrapping.
    pub angle: f32,
    /// Radians added to `angle` per draw.
    pub orbit_speed: f32,
}

impl PlanetSprite {
    /// Create a sprite with the default orbit and a random starting angle in [0, 2π).
    pub fn new(id: SpriteId, pos: Vec2, radius: f32, color: Color, rng: &mut Rng) -> Self {
        Self {
            id,
            pos,
            radius,
            color,
            moon_radius: MOON_RADIUS,
            orbit_radius: radius + ORBIT_OFFSET,
            angle: rng.range(0.0, std::f32::consts::TAU),
            orbit_speed: ORBIT_SPEED,
        }
    }

    // -- Builder pattern --

    /// Override the moon size, orbit gap and speed.
    pub fn with_orbit(mut self, moon_radius: f32, orbit_offset: f32, orbit_speed: f32) -> Self {
        self.moon_radius = moon_radius;
        self.orbit_radius = self.radius + orbit_offset;
        self.orbit_speed = orbit_speed;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Euclidean distance from center ≤ radius. The rim counts as inside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.pos.distance(p) <= self.radius
    }

    /// Moon center for the current angle.
    pub fn moon_position(&self) -> Vec2 {
        self.pos + Vec2::new(self.angle.cos(), self.angle.sin()) * self.orbit_radius
    }

    /// Advance the moon one step. Returns the new angle.
    pub fn advance_orbit(&mut self) -> f32 {
        self.angle += self.orbit_speed;
        self.angle
    }

    /// Lit-sphere look: white highlight offset toward the upper-left,
    /// base color at 30%, black at the rim.
    pub fn body_paint(&self) -> Paint {
        let highlight = self.pos - Vec2::splat(self.radius / 3.0);
        Paint::Radial(
            RadialGradient::new(highlight, 0.0, self.pos, self.radius)
                .with_stop(0.0, Color::WHITE)
                .with_stop(BASE_COLOR_STOP, self.color)
                .with_stop(1.0, Color::BLACK),
        )
    }

    /// Draw the planet, advance the orbit, then draw the moon at the new angle.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, &self.body_paint());
        self.advance_orbit();
        surface.fill_circle(self.moon_position(), self.moon_radius, &Paint::Solid(Color::WHITE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::commands::{CommandBuffer, DrawCommand};

    fn sprite_at(x: f32, y: f32, r: f32) -> PlanetSprite {
        let mut rng = Rng::new(7);
        PlanetSprite::new(SpriteId(1), Vec2::new(x, y), r, Color::hsl(200.0, 70.0, 50.0), &mut rng)
    }

    #[test]
    fn new_uses_default_orbit() {
        let s = sprite_at(0.0, 0.0, 20.0);
        assert_eq!(s.moon_radius, 5.0);
        assert_eq!(s.orbit_radius, 30.0);
        assert_eq!(s.orbit_speed, 0.02);
        assert!(s.angle >= 0.0 && s.angle < std::f32::consts::TAU);
    }

    #[test]
    fn contains_point_is_boundary_inclusive() {
        let s = sprite_at(100.0, 100.0, 20.0);
        assert!(s.contains_point(Vec2::new(100.0, 100.0)));
        assert!(s.contains_point(Vec2::new(120.0, 100.0)));
        assert!(s.contains_point(Vec2::new(100.0, 80.0)));
        assert!(!s.contains_point(Vec2::new(120.5, 100.0)));
    }

    #[test]
    fn angle_accumulates_per_draw() {
        let mut s = sprite_at(50.0, 50.0, 15.0).with_angle(1.0);
        let mut expected = 1.0_f32;
        let mut buf = CommandBuffer::new(100.0, 100.0);
        for _ in 0..250 {
            s.draw(&mut buf);
            expected += ORBIT_SPEED;
        }
        assert_eq!(s.angle, expected);
    }

    #[test]
    fn moon_is_placed_after_advancing() {
        let mut s = sprite_at(0.0, 0.0, 20.0).with_angle(0.0);
        let mut buf = CommandBuffer::new(100.0, 100.0);
        s.draw(&mut buf);

        let cmds = buf.commands();
        assert_eq!(cmds.len(), 2);
        match &cmds[1] {
            DrawCommand::FillCircle { center, radius, paint } => {
                let expected = Vec2::new(0.02_f32.cos(), 0.02_f32.sin()) * 30.0;
                assert!((*center - expected).length() < 1e-5);
                assert_eq!(*radius, 5.0);
                assert_eq!(*paint, Paint::Solid(Color::WHITE));
            }
            other => panic!("Expected moon fill, got {:?}", other),
        }
    }

    #[test]
    fn body_gradient_matches_lit_sphere() {
        let s = sprite_at(90.0, 60.0, 30.0);
        match s.body_paint() {
            Paint::Radial(g) => {
                assert_eq!(g.start, Vec2::new(80.0, 50.0));
                assert_eq!(g.start_radius, 0.0);
                assert_eq!(g.end, Vec2::new(90.0, 60.0));
                assert_eq!(g.end_radius, 30.0);
                assert_eq!(g.stops.len(), 3);
                assert_eq!(g.stops[0].color, Color::WHITE);
                assert_eq!(g.stops[1].offset, 0.3);
                assert_eq!(g.stops[1].color, s.color);
                assert_eq!(g.stops[2].color, Color::BLACK);
            }
            other => panic!("Expected radial paint, got {:?}", other),
        }
    }

    #[test]
    fn negative_radius_is_drawn_as_given() {
        let mut s = sprite_at(10.0, 10.0, -4.0);
        let mut buf = CommandBuffer::new(100.0, 100.0);
        s.draw(&mut buf);
        match &buf.commands()[0] {
            DrawCommand::FillCircle { radius, .. } => assert_eq!(*radius, -4.0),
            other => panic!("Expected body fill, got {:?}", other),
        }
    }
}
