pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{SandboxConfig, ConfigError};
pub use api::sandbox::Sandbox;
pub use api::types::SpriteId;
pub use components::color::Color;
pub use components::sprite::PlanetSprite;
pub use core::collection::SpriteSet;
pub use core::timer::{DeferredRemovals, PendingRemoval};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::commands::{CommandBuffer, DrawCommand, ImageSize};
pub use renderer::traits::{ColorStop, ImageSource, Paint, RadialGradient, Rect, Surface};
pub use systems::background::fit_contain;
pub use systems::interaction::{Interaction, InteractionMode, InteractionOutcome};
pub use systems::render::render_frame;
pub use systems::rng::Rng;
