// core/timer.rs
//
// Deferred removals: fixed-delay, fire-once despawns keyed by SpriteId.
// There is no cancel. A removal fires when its delay elapses no matter
// what happened to the sprite in the meantime.
//
// Usage:
//   let mut removals = DeferredRemovals::new();
//   removals.schedule(id, 7.0);
//   for id in removals.tick(dt) { sprites.remove(id); }

use crate::api::types::SpriteId;

/// A removal waiting for its delay to run out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRemoval {
    /// Sprite captured at request time.
    pub id: SpriteId,
    /// Delay in seconds.
    pub delay: f32,
    /// Time accumulated since scheduling.
    pub elapsed: f32,
}

impl PendingRemoval {
    pub fn is_due(&self) -> bool {
        self.elapsed >= self.delay
    }
}

/// Queue of pending removals, advanced by frame time.
#[derive(Debug, Default)]
pub struct DeferredRemovals {
    pending: Vec<PendingRemoval>,
}

impl DeferredRemovals {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedule `id` for removal after `delay` seconds.
    /// Scheduling the same id twice yields two independent entries.
    pub fn schedule(&mut self, id: SpriteId, delay: f32) {
        self.pending.push(PendingRemoval {
            id,
            delay,
            elapsed: 0.0,
        });
    }

    /// Advance all timers by `dt` seconds and return the ids that came due,
    /// in scheduling order. Each entry is returned exactly once.
    pub fn tick(&mut self, dt: f32) -> Vec<SpriteId> {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            p.elapsed += dt;
            if p.is_due() {
                due.push(p.id);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
