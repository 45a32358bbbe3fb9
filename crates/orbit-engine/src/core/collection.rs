use glam::Vec2;
use crate::api::types::SpriteId;
use crate::components::sprite::PlanetSprite;
use crate::renderer::traits::Surface;
use crate::systems::hit_test;

/// Live sprite storage using a flat Vec.
/// Membership is by `SpriteId`; iteration follows insertion order, which
/// callers must treat as an implementation detail rather than a contract.
pub struct SpriteSet {
    sprites: Vec<PlanetSprite>,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self {
            sprites: Vec::with_capacity(64),
        }
    }

    /// Add a sprite. A sprite whose id is already present replaces the old entry.
    pub fn add(&mut self, sprite: PlanetSprite) {
        match self.sprites.iter_mut().find(|s| s.id == sprite.id) {
            Some(existing) => *existing = sprite,
            None => self.sprites.push(sprite),
        }
    }

    /// Remove a sprite by ID. Absent ids are a no-op.
    pub fn remove(&mut self, id: SpriteId) -> Option<PlanetSprite> {
        let idx = self.sprites.iter().position(|s| s.id == id)?;
        // Ordered removal keeps hit-test tie-breaks stable for the survivors.
        Some(self.sprites.remove(idx))
    }

    pub fn get(&self, id: SpriteId) -> Option<&PlanetSprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut PlanetSprite> {
        self.sprites.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.get(id).is_some()
    }

    /// First sprite, in iteration order, containing the point.
    pub fn find_at(&self, p: Vec2) -> Option<SpriteId> {
        hit_test::first_hit(self.sprites.iter(), p)
    }

    /// Draw every member. Each draw advances that sprite's moon.
    pub fn draw_all<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for sprite in self.sprites.iter_mut() {
            sprite.draw(surface);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetSprite> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::new()
    }
}
