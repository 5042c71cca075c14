//! Game state and core simulation types
//!
//! Everything a run needs to be replayed lives here, including the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::animation::{Animator, Pose};
use super::input::InputState;
use crate::tuning::Tuning;

/// Why a run was reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetCause {
    /// Player dropped below the fall limit
    Fell,
    /// At least one projectile hit the player
    Hit,
}

/// Things that happened during a tick, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// `count` projectiles hit the player this tick
    HitByProjectile { count: u32 },
    FellOffLevel,
    /// Run was reset; `score` is what it reached before
    RunReset { cause: ResetCause, score: u64 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Box center
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    pub anim: Animator,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.spawn_point,
            vel: Vec2::ZERO,
            size: tuning.player_size,
            grounded: false,
            anim: Animator::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Put the player back at the spawn point, at rest
    pub fn respawn(&mut self, spawn_point: Vec2) {
        self.pos = spawn_point;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.anim.pose = Pose::Idle;
    }
}

/// A falling bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Box center
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Projectile {
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Entirely below the bottom edge of the level
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.bounds().top() < 0.0
    }
}

/// Counters for the current process (never persisted)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub resets_fell: u32,
    pub resets_hit: u32,
    pub best_score: u64,
    pub projectiles_spawned: u64,
}

impl RunStats {
    pub fn total_resets(&self) -> u32 {
        self.resets_fell + self.resets_hit
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, advanced only by the spawner
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Failure raised during the current tick, applied once at its end
    pub failure: Option<ResetCause>,
    /// Ticks survived in the current run
    pub score: u64,
    /// Exclusive upper bound of the spawn draw, never below 1
    pub spawn_threshold: f64,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    pub player: Player,
    pub input: InputState,
    /// Active projectiles, in spawn order
    pub projectiles: Vec<Projectile>,
    pub stats: RunStats,
    /// Events from the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            failure: None,
            score: 0,
            spawn_threshold: tuning.initial_spawn_threshold,
            time_ticks: 0,
            player: Player::new(&tuning),
            input: InputState::default(),
            projectiles: Vec::new(),
            stats: RunStats::default(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
