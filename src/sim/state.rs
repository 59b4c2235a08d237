//! Game state and core simulation types
//!
//! The level catalog, the player and the held touch input all live in one
//! owned `GameState`. The host drives it one frame at a time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use super::levels::build_levels;
use super::tick::tick;
use crate::tuning::Tuning;

/// A solid platform the player can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec3,
    /// Full extents
    pub size: Vec3,
    pub is_moving: bool,
    pub move_direction: Vec3,
    pub move_speed: f32,
    /// Anchor the travel range is measured from
    pub original_pos: Vec3,
    pub move_range: f32,
}

impl Platform {
    /// A static platform
    pub fn fixed(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            size,
            is_moving: false,
            move_direction: Vec3::ZERO,
            move_speed: 0.0,
            original_pos: Vec3::ZERO,
            move_range: 0.0,
        }
    }

    /// A platform ping-ponging within `range` of its spawn position
    pub fn moving(position: Vec3, size: Vec3, direction: Vec3, speed: f32, range: f32) -> Self {
        Self {
            position,
            size,
            is_moving: true,
            move_direction: direction,
            move_speed: speed,
            original_pos: position,
            move_range: range,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}

/// A hazard. Touching any obstacle is lethal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    /// Full extents
    pub size: Vec3,
    /// Render hint only, lethality does not depend on it
    pub is_spike: bool,
    pub is_moving: bool,
    pub move_direction: Vec3,
    pub move_speed: f32,
}

impl Obstacle {
    /// A stationary spike
    pub fn spike(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            size,
            is_spike: true,
            is_moving: false,
            move_direction: Vec3::ZERO,
            move_speed: 0.0,
        }
    }

    /// A spike sliding along x between the world-space bounds
    pub fn sliding_spike(position: Vec3, size: Vec3, speed: f32) -> Self {
        Self {
            is_moving: true,
            move_direction: Vec3::X,
            move_speed: speed,
            ..Self::spike(position, size)
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}

/// The player box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Full extents (fixed after construction)
    pub size: Vec3,
    /// True only if resolved against a platform this frame
    pub on_ground: bool,
    pub alive: bool,
    pub jump_force: f32,
    pub move_speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning, spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            size: tuning.player_size,
            on_ground: false,
            alive: true,
            jump_force: tuning.jump_force,
            move_speed: tuning.move_speed,
        }
    }

    /// Move to `spawn` at rest. Does not touch `alive`.
    pub fn respawn(&mut self, spawn: Vec3) {
        self.position = spawn;
        self.velocity = Vec3::ZERO;
        self.on_ground = false;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }
}

/// One entry of the level catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub start_position: Vec3,
    pub end_position: Vec3,
    /// Vertical acceleration (negative)
    pub gravity: f32,
    /// 1-based
    pub level_number: u32,
}

/// Held touch controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldInput {
    pub left: bool,
    pub right: bool,
    /// Consumed by the physics step when a jump fires
    pub jump: bool,
}

/// Why the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Touched the obstacle at this index of the level's obstacle list
    Obstacle { index: usize },
    /// Dropped below the void threshold
    FellOffWorld,
}

/// Events raised during a frame, returned by `update` for sound/visual cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    PlayerDied { cause: DeathCause },
    /// The given 1-based level was completed
    LevelCompleted { level: u32 },
    /// The last level was completed
    GameCompleted,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Constants the player was built from
    pub tuning: Tuning,
    /// Level catalog (built once)
    pub(crate) levels: Vec<Level>,
    pub(crate) player: Player,
    /// Index into `levels`; equal to `levels.len()` once the game is complete
    pub(crate) level_index: usize,
    /// Seconds simulated since the last reset
    pub(crate) game_time: f32,
    pub(crate) input: HeldInput,
    /// Events raised by the latest frame, plus any manual calls since
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Build the catalog and place the player at the first level's start
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        let levels = build_levels();
        let spawn = levels.first().map(|l| l.start_position).unwrap_or(Vec3::ZERO);
        let player = Player::new(&tuning, spawn);

        Self {
            tuning,
            levels,
            player,
            level_index: 0,
            game_time: 0.0,
            input: HeldInput::default(),
            events: Vec::new(),
        }
    }

    /// Advance one frame and return the events it raised.
    ///
    /// Skipped while the player is dead or the game is complete. Events left
    /// over from earlier frames are discarded, so the buffer never grows past
    /// one frame's worth.
    pub fn update(&mut self, dt: f32) -> &[GameEvent] {
        tick(self, dt);
        &self.events
    }

    /// Map a decoded touch to held controls.
    ///
    /// Releasing clears everything. A press left of centre holds left, right
    /// of centre holds right, and any press in the upper half holds jump.
    pub fn handle_input(&mut self, x: f32, y: f32, pressed: bool) {
        if !pressed {
            self.input = HeldInput::default();
            return;
        }

        if x < 0.0 {
            self.input.left = true;
            self.input.right = false;
        } else if x > 0.0 {
            self.input.right = true;
            self.input.left = false;
        }

        if y > 0.0 {
            self.input.jump = true;
        }
    }

    /// Full restart from level 1. The catalog is not rebuilt.
    pub fn reset(&mut self) {
        self.level_index = 0;
        if let Some(start) = self.levels.first().map(|l| l.start_position) {
            self.player.respawn(start);
        }
        self.player.alive = true;
        self.game_time = 0.0;
        log::info!("Game reset");
    }

    /// Advance to the next level and respawn there.
    ///
    /// Past the last level the game is complete and the player is left where it is.
    pub fn next_level(&mut self) {
        if self.is_game_complete() {
            return;
        }

        let finished = self.current_level_number();
        self.level_index += 1;
        self.events.push(GameEvent::LevelCompleted { level: finished });

        match self.levels.get(self.level_index) {
            Some(level) => {
                let start = level.start_position;
                self.player.respawn(start);
                log::info!("Level {} complete, starting level {}", finished, finished + 1);
            }
            None => {
                self.events.push(GameEvent::GameCompleted);
                log::info!("Final level complete after {:.1}s", self.game_time);
            }
        }
    }

    /// Respawn at the current level's start, keeping the level and clock
    pub fn restart_level(&mut self) {
        let Some(start) = self.current_level().map(|l| l.start_position) else {
            return;
        };
        self.player.respawn(start);
        self.player.alive = true;
        log::debug!("Restarting level {}", self.current_level_number());
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The level being played, or None once the game is complete
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.level_index)
    }

    /// 1-based level number (one past the catalog once complete)
    pub fn current_level_number(&self) -> u32 {
        self.level_index as u32 + 1
    }

    pub fn is_game_complete(&self) -> bool {
        self.level_index >= self.levels.len()
    }

    pub fn is_player_dead(&self) -> bool {
        !self.player.alive
    }

    /// Seconds simulated since the last reset
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn input(&self) -> HeldInput {
        self.input
    }

    /// Events raised by the latest frame and any manual calls since
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the pending events, leaving the buffer empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
