pub mod background;
pub mod interaction;
pub mod render;
pub mod rng;
