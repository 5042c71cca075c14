//! Player intents and the movement command derived from them

use serde::{Deserialize, Serialize};

/// A single directional intent driven by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    /// Jump
    Up,
    Down,
}

/// Currently held intents plus a latched jump request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Set on the press edge of `Up`, consumed by the next physics step
    jump_latched: bool,
    /// Horizontal velocity command (pixels/tick)
    command_x: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key edge and re-derive the movement command
    pub fn set(&mut self, intent: Intent, pressed: bool, speed: f32) {
        match intent {
            Intent::Left => self.left = pressed,
            Intent::Right => self.right = pressed,
            Intent::Up => {
                // Key repeat while held is not a new press
                if pressed && !self.up {
                    self.jump_latched = true;
                }
                self.up = pressed;
            }
            Intent::Down => self.down = pressed,
        }
        self.command_x = horizontal_command(self.left, self.right, speed);
    }

    /// Horizontal velocity the player should move at
    #[inline]
    pub fn command_x(&self) -> f32 {
        self.command_x
    }

    /// Take the jump request; it is cleared whether or not a jump happens
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_latched)
    }

    /// Release everything (used when the host loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Opposing directions cancel out
pub fn horizontal_command(left: bool, right: bool, speed: f32) -> f32 {
    match (left, right) {
        (true, false) => -speed,
        (false, true) => speed,
        _ => 0.0,
    }
}
