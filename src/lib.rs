//! Bullet Dodge - survive a rain of falling bullets on a static platform map
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, physics, spawning, collisions, resets)
//! - `tuning`: Data-driven gameplay constants
//! - `audio`: Mapping from simulation events to sound cues
//!
//! Rendering, real audio playback, asset loading and window plumbing belong
//! to the host. The host calls [`sim::Game::on_tick`] once per frame and draws
//! the returned [`sim::FrameSnapshot`].

pub mod audio;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, AudioSink, LogAudio, SoundEffect};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame time. Velocities are expressed per nominal tick.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Level dimensions (pixels)
    pub const LEVEL_WIDTH: f32 = 1600.0;
    pub const LEVEL_HEIGHT: f32 = 900.0;

    /// Player movement (pixels per tick)
    pub const PLAYER_MOVEMENT_SPEED: f32 = 10.0;
    pub const GRAVITY: f32 = 1.0;
    pub const PLAYER_JUMP_SPEED: f32 = 30.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;

    /// Where the player (re)spawns
    pub const SPAWN_X: f32 = 800.0;
    pub const SPAWN_Y: f32 = 400.0;

    /// Falling below this y resets the run
    pub const FALL_LIMIT_Y: f32 = -100.0;

    /// Projectile (laser) size and fall speed
    pub const PROJECTILE_WIDTH: f32 = 9.0;
    pub const PROJECTILE_HEIGHT: f32 = 54.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Spawn odds: 1 in `threshold` each tick
    pub const INITIAL_SPAWN_THRESHOLD: f64 = 60.0;
    /// Threshold drop per tick (reaches the floor after 28,320 ticks)
    pub const SPAWN_THRESHOLD_DECAY: f64 = 1.0 / 480.0;
    /// The draw range `[0, floor(threshold))` must never be empty
    pub const SPAWN_THRESHOLD_FLOOR: f64 = 1.0;

    /// Run animation length and per-tick advance
    pub const RUN_FRAMES: usize = 6;
    pub const RUN_FRAME_STEP: f32 = 0.5;
}
