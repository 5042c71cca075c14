//! Data-driven gameplay constants
//!
//! Defaults match [`crate::consts`]. A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal speed while a direction is held (pixels/tick)
    pub player_speed: f32,
    /// Downward acceleration (pixels/tick²)
    pub gravity: f32,
    /// Upward velocity set by a grounded jump (pixels/tick)
    pub jump_speed: f32,
    /// Player bounding box size
    pub player_size: Vec2,
    /// Spawn and reset position (box center)
    pub spawn_point: Vec2,
    /// Player center below this y counts as falling off the level
    pub fall_limit_y: f32,

    // === Projectiles ===
    /// Fall speed (pixels/tick)
    pub projectile_speed: f32,
    /// Projectile bounding box size
    pub projectile_size: Vec2,

    // === Difficulty ramp ===
    /// Threshold at the start of a run and after every reset
    pub initial_spawn_threshold: f64,
    /// Amount subtracted from the threshold each tick
    pub spawn_threshold_decay: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_MOVEMENT_SPEED,
            gravity: GRAVITY,
            jump_speed: PLAYER_JUMP_SPEED,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            spawn_point: Vec2::new(SPAWN_X, SPAWN_Y),
            fall_limit_y: FALL_LIMIT_Y,

            projectile_speed: PROJECTILE_SPEED,
            projectile_size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),

            initial_spawn_threshold: INITIAL_SPAWN_THRESHOLD,
            spawn_threshold_decay: SPAWN_THRESHOLD_DECAY,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, then sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        if self.initial_spawn_threshold < SPAWN_THRESHOLD_FLOOR
            || !self.initial_spawn_threshold.is_finite()
        {
            log::warn!(
                "initial_spawn_threshold {} out of range, clamping to {}",
                self.initial_spawn_threshold,
                SPAWN_THRESHOLD_FLOOR
            );
            self.initial_spawn_threshold = SPAWN_THRESHOLD_FLOOR;
        }
        // A negative decay would make the threshold grow during a run
        if self.spawn_threshold_decay < 0.0 || !self.spawn_threshold_decay.is_finite() {
            self.spawn_threshold_decay = 0.0;
        }
        self.player_size = self.player_size.max(Vec2::ONE);
        self.projectile_size = self.projectile_size.max(Vec2::ONE);
        self
    }
}
