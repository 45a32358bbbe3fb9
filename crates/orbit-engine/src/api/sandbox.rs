use glam::Vec2;
use crate::api::config::SandboxConfig;
use crate::api::types::SpriteId;
use crate::components::color::Color;
use crate::components::sprite::PlanetSprite;
use crate::core::collection::SpriteSet;
use crate::core::timer::DeferredRemovals;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::Surface;
use crate::systems::interaction::{Interaction, InteractionOutcome};
use crate::systems::render::render_frame;
use crate::systems::rng::Rng;

/// The whole scene: live sprites, selection/drag state, pending removals,
/// background image and spawn randomness.
///
/// `I` is the image type of the surface the sandbox renders into.
pub struct Sandbox<I> {
    config: SandboxConfig,
    sprites: SpriteSet,
    interaction: Interaction,
    removals: DeferredRemovals,
    input: InputQueue,
    background: Option<I>,
    rng: Rng,
    next_id: u32,
}

impl<I> Sandbox<I> {
    pub fn new(config: SandboxConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self {
            config,
            sprites: SpriteSet::new(),
            interaction: Interaction::new(),
            removals: DeferredRemovals::new(),
            input: InputQueue::new(),
            background: None,
            rng,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn removals(&self) -> &DeferredRemovals {
        &self.removals
    }

    /// Generate the next unique sprite ID.
    pub fn next_id(&mut self) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue an event for the next [`Sandbox::tick`].
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply `event` right away, after any events already queued so
    /// arrival order is kept.
    pub fn apply(&mut self, event: InputEvent) -> InteractionOutcome {
        self.flush_input();
        self.handle_input(event)
    }

    fn flush_input(&mut self) {
        for event in self.input.drain() {
            self.handle_input(event);
        }
    }

    /// Apply one event immediately, ignoring the queue.
    pub fn handle_input(&mut self, event: InputEvent) -> InteractionOutcome {
        let outcome = match event {
            InputEvent::PointerDown { x, y } => {
                self.interaction.on_pointer_down(Vec2::new(x, y), &self.sprites)
            }
            InputEvent::PointerMove { x, y } => {
                self.interaction.on_pointer_move(Vec2::new(x, y), &mut self.sprites)
            }
            InputEvent::PointerUp => self.interaction.on_pointer_up(),
            InputEvent::Spawn => InteractionOutcome::Spawned { id: self.spawn() },
            InputEvent::Destroy => self
                .interaction
                .on_destroy(&mut self.removals, self.config.destroy_delay),
        };

        match outcome {
            InteractionOutcome::Selected { id, offset } => {
                log::debug!("selected {} (grab offset {:.1}, {:.1})", id, offset.x, offset.y);
            }
            InteractionOutcome::DestroyScheduled { id, delay } => {
                log::info!("{} will be removed in {}s", id, delay);
            }
            InteractionOutcome::NothingSelected => {
                log::debug!("destroy ignored: nothing selected");
            }
            _ => {}
        }
        log::trace!("{:?} -> {:?}", event, self.interaction.mode());
        outcome
    }

    /// Spawn a sprite at a random position with random radius and hue.
    pub fn spawn(&mut self) -> SpriteId {
        let pos = Vec2::new(
            self.rng.range(0.0, self.config.width),
            self.rng.range(0.0, self.config.height),
        );
        let radius = self.rng.range(
            self.config.min_radius,
            self.config.min_radius + self.config.radius_range,
        );
        let color = Color::hsl(
            self.rng.range(0.0, 360.0),
            self.config.saturation,
            self.config.lightness,
        );
        self.spawn_at(pos, radius, color)
    }

    /// Spawn a sprite with explicit placement. Inputs are not validated.
    pub fn spawn_at(&mut self, pos: Vec2, radius: f32, color: Color) -> SpriteId {
        let id = self.next_id();
        let sprite = PlanetSprite::new(id, pos, radius, color, &mut self.rng).with_orbit(
            self.config.moon_radius,
            self.config.orbit_offset,
            self.config.orbit_speed,
        );
        self.sprites.add(sprite);
        log::debug!("spawned {} at ({:.1}, {:.1}) r={:.1}", id, pos.x, pos.y, radius);
        id
    }

    /// Replace the background image.
    pub fn set_background(&mut self, image: I) {
        self.background = Some(image);
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }

    pub fn background(&self) -> Option<&I> {
        self.background.as_ref()
    }

    /// Advance pending removals by `dt` seconds, then process queued input
    /// in arrival order. Returns the ids whose removal fired this tick.
    ///
    /// `dt` is time that passed before this call, so removals scheduled by
    /// the queued input start from zero and are not charged for it.
    pub fn tick(&mut self, dt: f32) -> Vec<SpriteId> {
        let due = self.removals.tick(dt);
        for &id in &due {
            match self.sprites.remove(id) {
                Some(_) => log::info!("removed {}", id),
                None => log::debug!("removal of {} found nothing to remove", id),
            }
        }

        self.flush_input();
        due
    }

    /// Draw the current state. Advances every sprite's moon.
    pub fn render<S>(&mut self, surface: &mut S)
    where
        S: Surface<Image = I> + ?Sized,
    {
        render_frame(surface, self.background.as_ref(), &mut self.sprites);
    }

    /// One full frame: timers, then queued input, then render.
    pub fn frame<S>(&mut self, dt: f32, surface: &mut S)
    where
        S: Surface<Image = I> + ?Sized,
    {
        self.tick(dt);
        self.render(surface);
    }
}

impl<I> Default for Sandbox<I> {
    fn default() -> Self {
        Self::new(SandboxConfig::default())
    }
}
