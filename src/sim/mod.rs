//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally driven ticks with an injected millisecond clock
//! - Seeded RNG only
//! - No rendering, input, or platform dependencies

pub mod actor;
pub mod anim;
pub mod obstacle;
pub mod rect;
pub mod scenery;
pub mod session;
pub mod spawn;

pub use actor::Actor;
pub use anim::Animation;
pub use obstacle::Obstacle;
pub use rect::Hitbox;
pub use scenery::{Cloud, ScrollingGround};
pub use session::{DrawFrame, GamePhase, GameSession, InputEvent, SpriteInstance};
pub use spawn::Spawner;
