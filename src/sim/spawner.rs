//! Projectile spawning and the difficulty ramp
//!
//! Each tick the threshold drops a little, and a projectile spawns when a
//! uniform draw from `[0, floor(threshold))` comes up 0. Spawn odds climb
//! from 1 in 60 to 1 in 1 over a continuous run.

use glam::Vec2;
use rand::Rng;

use super::level::LevelGeometry;
use super::state::{GameState, Projectile};
use crate::consts::{SIM_DT, SPAWN_THRESHOLD_FLOOR};

/// Threshold after one more tick of ramp
#[inline]
pub fn decay_threshold(threshold: f64, decay: f64) -> f64 {
    (threshold - decay).max(SPAWN_THRESHOLD_FLOOR)
}

/// Closed form of the ramp: threshold after `ticks` uninterrupted ticks
pub fn threshold_after(initial: f64, decay: f64, ticks: u64) -> f64 {
    (initial - decay * ticks as f64).max(SPAWN_THRESHOLD_FLOOR)
}

/// Size of the spawn draw range for a threshold
///
/// The threshold is clamped again here so an empty range is unreachable.
#[inline]
pub fn draw_range(threshold: f64) -> u32 {
    debug_assert!(threshold >= SPAWN_THRESHOLD_FLOOR, "spawn threshold {threshold} below floor");
    threshold.max(SPAWN_THRESHOLD_FLOOR).floor() as u32
}

/// Ramp the threshold and maybe spawn one projectile
///
/// Returns true if a projectile was spawned.
pub fn spawn_step(state: &mut GameState, level: &LevelGeometry) -> bool {
    state.spawn_threshold = decay_threshold(state.spawn_threshold, state.tuning.spawn_threshold_decay);

    let range = draw_range(state.spawn_threshold);
    if state.rng.random_range(0..range) != 0 {
        return false;
    }

    let size = state.tuning.projectile_size;
    // Whole-pixel column anywhere across the level, like the tile grid
    let max_x = (level.width as u32).max(2);
    let x = state.rng.random_range(1..max_x) as f32;
    // Top edge flush with the top of the level
    let y = level.height - size.y / 2.0;

    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: Vec2::new(x, y),
        vel: Vec2::new(0.0, -state.tuning.projectile_speed),
        size,
    });
    state.stats.projectiles_spawned += 1;
    log::trace!("Spawned projectile {} at x={} (threshold {:.3})", id, x, state.spawn_threshold);

    true
}

/// Move every projectile by its velocity
pub fn advance_projectiles(projectiles: &mut [Projectile], dt: f32) {
    let scale = dt / SIM_DT;
    for p in projectiles.iter_mut() {
        p.pos += p.vel * scale;
    }
}
