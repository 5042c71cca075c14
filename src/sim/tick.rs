//! Per-frame simulation step
//!
//! Fixed order every tick: input, physics, animation, fall check, spawn,
//! collision/cull, projectile motion, score, then at most one reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::SpriteKey;
use super::collision;
use super::level::LevelGeometry;
use super::physics;
use super::reset::{apply_pending_reset, fell_off, raise_failure};
use super::spawner::{advance_projectiles, spawn_step};
use super::state::{GameEvent, GameState, ResetCause};

/// What the renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub player_pos: Vec2,
    pub sprite: SpriteKey,
    pub projectiles: Vec<Vec2>,
    pub score: u64,
    pub spawn_threshold: f64,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            player_pos: state.player.pos,
            sprite: state.player.anim.key(),
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            score: state.score,
            spawn_threshold: state.spawn_threshold,
            events: state.events.clone(),
        }
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, level: &LevelGeometry, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    // Input: take this tick's jump press exactly once
    let jump = state.input.take_jump();
    let command_x = state.input.command_x();

    // Physics
    let step = physics::integrate(&mut state.player, level, &state.tuning, command_x, jump, dt);
    if step.jumped {
        log::debug!("Jump at tick {}", state.time_ticks);
        state.events.push(GameEvent::Jumped);
    }

    // Animation
    state.player.anim.update(state.player.vel);

    // Fell off the level
    if fell_off(&state.player, state.tuning.fall_limit_y) {
        state.events.push(GameEvent::FellOffLevel);
        raise_failure(state, ResetCause::Fell);
    }

    // Spawn
    spawn_step(state, level);

    // Collision and culling against this tick's player position
    let report = collision::check(&mut state.projectiles, &state.player.bounds());
    if report.any_hit() {
        let count = report.hits.len() as u32;
        log::debug!("Hit by {} projectile(s) at tick {}", count, state.time_ticks);
        state.events.push(GameEvent::HitByProjectile { count });
        raise_failure(state, ResetCause::Hit);
    }
    advance_projectiles(&mut state.projectiles, dt);

    // Score counts this tick even if a reset follows
    state.score += 1;

    apply_pending_reset(state);
}
