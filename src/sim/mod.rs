//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only, advanced only by the spawner
//! - Stable iteration order (projectiles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod aabb;
pub mod animation;
pub mod collision;
pub mod game;
pub mod input;
pub mod level;
pub mod physics;
pub mod reset;
pub mod spawner;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use animation::{Animator, Facing, Pose, SpriteKey};
pub use collision::{CollisionReport, check};
pub use game::Game;
pub use input::{InputState, Intent};
pub use level::LevelGeometry;
pub use physics::{StepResult, integrate};
pub use state::{GameEvent, GameState, Player, Projectile, ResetCause, RunStats};
pub use tick::{FrameSnapshot, tick};
