//! Run failure and reset
//!
//! Failures are raised during the tick and applied once at its end, so a
//! fall and several hits in the same tick still produce a single reset.

use super::state::{GameEvent, GameState, Player, ResetCause};

/// Player center has dropped below the fall limit
#[inline]
pub fn fell_off(player: &Player, fall_limit_y: f32) -> bool {
    player.pos.y < fall_limit_y
}

/// Record a failure for this tick. The first cause raised wins.
pub fn raise_failure(state: &mut GameState, cause: ResetCause) {
    if state.failure.is_none() {
        state.failure = Some(cause);
    }
}

/// Apply the pending failure, if any
///
/// Returns the cause that was applied.
pub fn apply_pending_reset(state: &mut GameState) -> Option<ResetCause> {
    let cause = state.failure.take()?;
    reset_run(state, cause);
    Some(cause)
}

/// Restore player, score and threshold to their starting values
pub fn reset_run(state: &mut GameState, cause: ResetCause) {
    let score = state.score;
    state.stats.best_score = state.stats.best_score.max(score);
    match cause {
        ResetCause::Fell => state.stats.resets_fell += 1,
        ResetCause::Hit => state.stats.resets_hit += 1,
    }

    state.player.respawn(state.tuning.spawn_point);
    state.score = 0;
    state.spawn_threshold = state.tuning.initial_spawn_threshold;
    state.events.push(GameEvent::RunReset { cause, score });

    log::info!("Run reset ({:?}) after scoring {}", cause, score);
}
