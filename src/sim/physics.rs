//! Platformer physics against static geometry
//!
//! Per step: optional jump impulse, gravity, then a swept move along y
//! followed by a swept move along x. Each axis stops at the first solid face
//! in its path, so fast falls cannot tunnel through thin platforms.

use glam::Vec2;

use super::aabb::Aabb;
use super::level::LevelGeometry;
use super::state::Player;
use crate::consts::SIM_DT;
use crate::tuning::Tuning;

/// Distance a face may sit inside the box and still count as a contact
const CONTACT_EPSILON: f32 = 1e-3;

/// Result of one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepResult {
    /// Jump impulse was applied this step
    pub jumped: bool,
    /// Landed on or stayed on a surface this step
    pub grounded: bool,
    /// Hit a ceiling while moving up
    pub bumped_head: bool,
}

/// Advance the player by one step
///
/// `jump` is the latched press for this tick. It only takes effect if the
/// player was grounded at the end of the previous step.
pub fn integrate(
    player: &mut Player,
    level: &LevelGeometry,
    tuning: &Tuning,
    command_x: f32,
    jump: bool,
    dt: f32,
) -> StepResult {
    let mut result = StepResult::default();
    let scale = dt / SIM_DT;

    if jump && player.grounded {
        player.vel.y = tuning.jump_speed;
        result.jumped = true;
    }

    // Air control: horizontal follows the command unconditionally
    player.vel.x = command_x;
    player.vel.y -= tuning.gravity * scale;

    // Vertical
    let dy = player.vel.y * scale;
    let (moved_y, blocked_y) = sweep_y(&player.bounds(), dy, level.solids());
    player.pos.y += moved_y;
    if blocked_y {
        if dy <= 0.0 {
            result.grounded = true;
        } else {
            result.bumped_head = true;
        }
        player.vel.y = 0.0;
    }
    player.grounded = result.grounded;

    // Horizontal
    let dx = player.vel.x * scale;
    let (moved_x, _) = sweep_x(&player.bounds(), dx, level.solids());
    player.pos.x += moved_x;

    result
}

/// Move `b` by `dy`, stopping at the first horizontal face in the way
///
/// Returns the allowed displacement and whether a face stopped the move.
pub fn sweep_y(b: &Aabb, dy: f32, solids: &[Aabb]) -> (f32, bool) {
    let mut allowed = dy;
    let mut blocked = false;

    for solid in solids.iter().filter(|s| s.overlaps_x(b)) {
        if dy <= 0.0 {
            // Falling (or resting): land on tops between our bottom and bottom + dy
            let gap = solid.top() - b.bottom();
            if gap <= CONTACT_EPSILON && gap >= allowed {
                allowed = gap.min(0.0);
                blocked = true;
            }
        } else {
            let gap = solid.bottom() - b.top();
            if gap >= -CONTACT_EPSILON && gap <= allowed {
                allowed = gap.max(0.0);
                blocked = true;
            }
        }
    }

    (allowed, blocked)
}

/// Move `b` by `dx`, stopping at the first vertical face in the way
pub fn sweep_x(b: &Aabb, dx: f32, solids: &[Aabb]) -> (f32, bool) {
    if dx == 0.0 {
        return (0.0, false);
    }

    let mut allowed = dx;
    let mut blocked = false;

    for solid in solids.iter().filter(|s| s.overlaps_y(b)) {
        if dx > 0.0 {
            let gap = solid.left() - b.right();
            if gap >= -CONTACT_EPSILON && gap <= allowed {
                allowed = gap.max(0.0);
                blocked = true;
            }
        } else {
            let gap = solid.right() - b.left();
            if gap <= CONTACT_EPSILON && gap >= allowed {
                allowed = gap.min(0.0);
                blocked = true;
            }
        }
    }

    (allowed, blocked)
}
