//! Host-facing entry points
//!
//! The host forwards key edges to [`Game::on_intent_changed`] and calls
//! [`Game::on_tick`] once per frame.

use super::input::Intent;
use super::level::LevelGeometry;
use super::state::{GameEvent, GameState};
use super::tick::{FrameSnapshot, tick};
use crate::tuning::Tuning;

/// A running game: state plus the level it is played on
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    level: LevelGeometry,
}

impl Game {
    pub fn new(seed: u64, level: LevelGeometry) -> Self {
        Self::with_tuning(seed, level, Tuning::default())
    }

    pub fn with_tuning(seed: u64, level: LevelGeometry, tuning: Tuning) -> Self {
        log::info!(
            "New game: seed={}, level {}x{} with {} solids",
            seed,
            level.width,
            level.height,
            level.solids.len()
        );
        Self {
            state: GameState::with_tuning(seed, tuning),
            level,
        }
    }

    /// Key pressed or released
    pub fn on_intent_changed(&mut self, intent: Intent, pressed: bool) {
        let speed = self.state.tuning.player_speed;
        self.state.input.set(intent, pressed, speed);
    }

    /// Release all held intents (window lost focus)
    pub fn release_all(&mut self) {
        self.state.input.clear();
    }

    /// Advance one frame and return what to draw
    pub fn on_tick(&mut self, dt: f32) -> FrameSnapshot {
        tick(&mut self.state, &self.level, dt);
        FrameSnapshot::capture(&self.state)
    }

    /// Events produced by the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> &LevelGeometry {
        &self.level
    }
}
