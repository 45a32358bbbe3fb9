//! Pointer interaction: selection, drag and deferred destroy.
//!
//! Selection is sticky: a press that misses every sprite keeps whatever
//! was selected before. The selection is held as a `SpriteId`, so it acts
//! as a weak reference: once the sprite leaves the set, drags and destroy
//! requests against it find nothing.

use glam::Vec2;
use crate::api::types::SpriteId;
use crate::core::collection::SpriteSet;
use crate::core::timer::DeferredRemovals;

/// The current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Nothing selected.
    Idle,
    /// A sprite is selected, pointer not held on it.
    Selected,
    /// The selected sprite follows the pointer.
    Dragging,
}

/// Result of processing one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionOutcome {
    /// Nothing changed.
    None,
    /// A press hit a sprite; it is now selected and being dragged.
    Selected { id: SpriteId, offset: Vec2 },
    /// The dragged sprite moved to `pos`.
    Moved { id: SpriteId, pos: Vec2 },
    /// The press ended.
    Released,
    /// A new sprite joined the set.
    Spawned { id: SpriteId },
    /// Removal of `id` was scheduled and the selection cleared.
    DestroyScheduled { id: SpriteId, delay: f32 },
    /// Destroy was requested with nothing selected.
    NothingSelected,
}

/// Selection and drag state. One per sandbox.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    selected: Option<SpriteId>,
    dragging: bool,
    /// Pointer position minus sprite center, captured on press.
    drag_offset: Vec2,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        match (self.selected, self.dragging) {
            (None, _) => InteractionMode::Idle,
            (Some(_), false) => InteractionMode::Selected,
            (Some(_), true) => InteractionMode::Dragging,
        }
    }

    /// Currently selected id. May refer to a sprite that has since been removed.
    pub fn selected(&self) -> Option<SpriteId> {
        self.selected
    }

    /// Handle pointer down event.
    pub fn on_pointer_down(&mut self, pos: Vec2, sprites: &SpriteSet) -> InteractionOutcome {
        let Some(id) = sprites.find_at(pos) else {
            return InteractionOutcome::None;
        };
        let Some(sprite) = sprites.get(id) else {
            return InteractionOutcome::None;
        };
        self.selected = Some(id);
        self.drag_offset = pos - sprite.pos;
        self.dragging = true;
        InteractionOutcome::Selected {
            id,
            offset: self.drag_offset,
        }
    }

    /// Handle pointer move event. No clamping to the surface.
    pub fn on_pointer_move(&mut self, pos: Vec2, sprites: &mut SpriteSet) -> InteractionOutcome {
        if !self.dragging {
            return InteractionOutcome::None;
        }
        let Some(id) = self.selected else {
            return InteractionOutcome::None;
        };
        match sprites.get_mut(id) {
            Some(sprite) => {
                sprite.pos = pos - self.drag_offset;
                InteractionOutcome::Moved { id, pos: sprite.pos }
            }
            None => InteractionOutcome::None,
        }
    }

    /// Handle pointer up event. The selection survives the release.
    pub fn on_pointer_up(&mut self) -> InteractionOutcome {
        self.dragging = false;
        InteractionOutcome::Released
    }

    /// Capture the selection, clear it, and queue its removal.
    pub fn on_destroy(&mut self, removals: &mut DeferredRemovals, delay: f32) -> InteractionOutcome {
        let Some(id) = self.selected.take() else {
            return InteractionOutcome::NothingSelected;
        };
        self.dragging = false;
        removals.schedule(id, delay);
        InteractionOutcome::DestroyScheduled { id, delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::sprite::PlanetSprite;
    use crate::systems::rng::Rng;

    fn set_with_a() -> SpriteSet {
        let mut rng = Rng::new(5);
        let mut set = SpriteSet::new();
        set.add(PlanetSprite::new(
            SpriteId(1),
            Vec2::new(100.0, 100.0),
            20.0,
            Color::hsl(0.0, 70.0, 50.0),
            &mut rng,
        ));
        set
    }

    #[test]
    fn press_on_sprite_selects_and_drags() {
        let set = set_with_a();
        let mut ix = Interaction::new();
        let out = ix.on_pointer_down(Vec2::new(105.0, 105.0), &set);
        assert_eq!(out, InteractionOutcome::Selected { id: SpriteId(1), offset: Vec2::new(5.0, 5.0) });
        assert_eq!(ix.mode(), InteractionMode::Dragging);
    }

    #[test]
    fn drag_keeps_grab_point() {
        let mut set = set_with_a();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(105.0, 105.0), &set);
        ix.on_pointer_move(Vec2::new(150.0, 130.0), &mut set);
        assert_eq!(set.get(SpriteId(1)).unwrap().pos, Vec2::new(145.0, 125.0));
    }

    #[test]
    fn drag_is_not_clamped() {
        let mut set = set_with_a();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(100.0, 100.0), &set);
        ix.on_pointer_move(Vec2::new(-500.0, 9000.0), &mut set);
        assert_eq!(set.get(SpriteId(1)).unwrap().pos, Vec2::new(-500.0, 9000.0));
    }

    #[test]
    fn release_keeps_selection() {
        let mut set = set_with_a();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(100.0, 100.0), &set);
        assert_eq!(ix.on_pointer_up(), InteractionOutcome::Released);
        assert_eq!(ix.mode(), InteractionMode::Selected);
        assert_eq!(ix.selected(), Some(SpriteId(1)));

        // Moves after release do nothing
        assert_eq!(ix.on_pointer_move(Vec2::new(0.0, 0.0), &mut set), InteractionOutcome::None);
        assert_eq!(set.get(SpriteId(1)).unwrap().pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn missed_press_keeps_previous_selection() {
        let set = set_with_a();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(100.0, 100.0), &set);
        ix.on_pointer_up();
        assert_eq!(ix.on_pointer_down(Vec2::new(400.0, 400.0), &set), InteractionOutcome::None);
        assert_eq!(ix.selected(), Some(SpriteId(1)));
        assert_eq!(ix.mode(), InteractionMode::Selected);
    }

    #[test]
    fn destroy_without_selection_is_noop() {
        let mut removals = DeferredRemovals::new();
        let mut ix = Interaction::new();
        assert_eq!(ix.on_destroy(&mut removals, 7.0), InteractionOutcome::NothingSelected);
        assert!(removals.is_empty());
    }

    #[test]
    fn destroy_clears_selection_and_schedules() {
        let set = set_with_a();
        let mut removals = DeferredRemovals::new();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(100.0, 100.0), &set);
        let out = ix.on_destroy(&mut removals, 7.0);
        assert_eq!(out, InteractionOutcome::DestroyScheduled { id: SpriteId(1), delay: 7.0 });
        assert_eq!(ix.mode(), InteractionMode::Idle);
        assert_eq!(removals.len(), 1);
        assert_eq!(removals.tick(7.0), vec![SpriteId(1)]);
    }

    #[test]
    fn dangling_selection_resolves_to_nothing() {
        let mut set = set_with_a();
        let mut ix = Interaction::new();
        ix.on_pointer_down(Vec2::new(100.0, 100.0), &set);
        set.remove(SpriteId(1));
        assert_eq!(ix.selected(), Some(SpriteId(1)));
        assert!(set.get(SpriteId(1)).is_none());
        assert_eq!(ix.on_pointer_move(Vec2::new(1.0, 1.0), &mut set), InteractionOutcome::None);
    }
}
