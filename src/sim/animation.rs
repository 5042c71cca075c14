//! Sprite pose selection from velocity
//!
//! The renderer looks frames up by [`SpriteKey`], a (pose, facing) pair, so
//! there are no texture arrays indexed by magic numbers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{RUN_FRAMES, RUN_FRAME_STEP};

/// Direction the character sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Discrete animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Idle,
    /// Run cycle frame, `0..RUN_FRAMES`
    Run(u8),
    Jump,
    Fall,
}

/// Everything the renderer needs to pick a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteKey {
    pub pose: Pose,
    pub facing: Facing,
}

impl SpriteKey {
    /// Asset stem for this frame, e.g. `Dude_Monster_Run_3`
    ///
    /// Left-facing frames reuse the right-facing texture mirrored, so the
    /// name does not depend on facing.
    pub fn texture_name(&self) -> String {
        match self.pose {
            Pose::Idle => "Dude_Monster_Idle_0".to_string(),
            Pose::Run(frame) => format!("Dude_Monster_Run_{frame}"),
            Pose::Jump => "Dude_Monster_jump".to_string(),
            Pose::Fall => "Dude_Monster_fall".to_string(),
        }
    }

    /// Whether the texture must be drawn mirrored
    pub fn flipped(&self) -> bool {
        self.facing == Facing::Left
    }
}

/// Per-player animation state carried between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    pub facing: Facing,
    pub pose: Pose,
    /// Fractional run-cycle position in `[0, RUN_FRAMES)`
    pub run_cursor: f32,
}

impl Animator {
    /// Pick this tick's pose from the post-physics velocity
    pub fn update(&mut self, vel: Vec2) -> SpriteKey {
        self.facing = next_facing(self.facing, vel.x);

        self.pose = if vel.y > 0.0 {
            Pose::Jump
        } else if vel.y < 0.0 {
            Pose::Fall
        } else if vel.x == 0.0 {
            Pose::Idle
        } else {
            self.run_cursor = (self.run_cursor + RUN_FRAME_STEP) % RUN_FRAMES as f32;
            Pose::Run(self.run_cursor as u8)
        };

        self.key()
    }

    pub fn key(&self) -> SpriteKey {
        SpriteKey {
            pose: self.pose,
            facing: self.facing,
        }
    }
}

/// Facing only changes on a non-zero horizontal velocity
pub fn next_facing(current: Facing, vx: f32) -> Facing {
    if vx < 0.0 {
        Facing::Left
    } else if vx > 0.0 {
        Facing::Right
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_facing_sequence() {
        let mut anim = Animator::default();
        let facings: Vec<Facing> = [5.0, 5.0, 0.0, -5.0]
            .iter()
            .map(|&vx| anim.update(Vec2::new(vx, 0.0)).facing)
            .collect();
        assert_eq!(
            facings,
            vec![Facing::Right, Facing::Right, Facing::Right, Facing::Left]
        );
    }

    #[test]
    fn test_vertical_takes_priority() {
        let mut anim = Animator::default();
        assert_eq!(anim.update(Vec2::new(10.0, 3.0)).pose, Pose::Jump);
        assert_eq!(anim.update(Vec2::new(10.0, -3.0)).pose, Pose::Fall);
        assert_eq!(anim.update(Vec2::new(0.0, 0.0)).pose, Pose::Idle);
        assert!(matches!(anim.update(Vec2::new(-10.0, 0.0)).pose, Pose::Run(_)));
    }

    #[test]
    fn test_facing_updates_while_airborne() {
        let mut anim = Animator::default();
        let key = anim.update(Vec2::new(-10.0, 12.0));
        assert_eq!(key.pose, Pose::Jump);
        assert_eq!(key.facing, Facing::Left);
        assert!(key.flipped());
    }

    #[test]
    fn test_run_cycle_advances_half_frame_per_tick() {
        let mut anim = Animator::default();
        let frames: Vec<Pose> = (0..13)
            .map(|_| anim.update(Vec2::new(10.0, 0.0)).pose)
            .collect();
        let expected: Vec<Pose> = [0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 0, 0]
            .iter()
            .map(|&f| Pose::Run(f))
            .collect();
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_run_cursor_holds_while_idle() {
        let mut anim = Animator::default();
        anim.update(Vec2::new(10.0, 0.0));
        anim.update(Vec2::new(10.0, 0.0));
        let cursor = anim.run_cursor;
        anim.update(Vec2::ZERO);
        anim.update(Vec2::new(0.0, -4.0));
        assert_eq!(anim.run_cursor, cursor);
    }

    #[test]
    fn test_texture_names() {
        let key = SpriteKey {
            pose: Pose::Run(3),
            facing: Facing::Left,
        };
        assert_eq!(key.texture_name(), "Dude_Monster_Run_3");
        assert_eq!(SpriteKey::default().texture_name(), "Dude_Monster_Idle_0");
    }

    proptest! {
        #[test]
        fn prop_zero_velocity_keeps_facing(left in any::<bool>(), vy in -50.0f32..50.0) {
            let start = if left { Facing::Left } else { Facing::Right };
            let mut anim = Animator { facing: start, ..Default::default() };
            prop_assert_eq!(anim.update(Vec2::new(0.0, vy)).facing, start);
        }

        #[test]
        fn prop_run_frame_in_range(ticks in 1usize..500) {
            let mut anim = Animator::default();
            for _ in 0..ticks {
                if let Pose::Run(frame) = anim.update(Vec2::new(10.0, 0.0)).pose {
                    prop_assert!((frame as usize) < RUN_FRAMES);
                }
            }
        }
    }
}
