//! Game state and core simulation types
//!
//! All mutable simulation state lives in one [`SimulationState`] owned by the
//! simulation. Input handlers never touch it directly; they record an
//! [`InputIntent`] that the next tick consumes.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::random::RandomSource;
use super::terrain::Corridor;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for the first start
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended on a wall, waiting for a restart
    Ended,
}

impl GameMode {
    pub fn is_running(&self) -> bool {
        matches!(self, GameMode::Running)
    }
}

/// What the player wants, as of the latest input event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputIntent {
    /// Level signal: lift key is down
    pub lift_held: bool,
    /// Edge signal: a (re)start was requested and not yet consumed
    pub start_requested: bool,
}

impl InputIntent {
    /// Consume a pending start request
    pub fn take_start(&mut self) -> bool {
        std::mem::take(&mut self.start_requested)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current phase
    pub mode: GameMode,
    /// Ticks survived this run
    pub score: u64,
    /// Score of the most recent finished run
    pub last_score: Option<u64>,
    /// Vertical position of the player (pixels, down is positive)
    pub player_y: f32,
    /// Vertical velocity (pixels per tick)
    pub player_velocity: f32,
    /// When the current lift/no-lift state began
    pub lift_engaged_since: Option<Timestamp>,
    /// Lift edges seen so far (press, release, or a restamp on start)
    pub lift_edges: u64,
    /// Edge the velocity anchor belongs to
    pub anchor: Option<u64>,
    /// Velocity at the start of the current edge
    pub anchor_velocity: f32,
    /// Corridor walls
    pub corridor: Corridor,
    /// Slot the player occupies
    pub player_slot: usize,
    /// When the most recent run ended
    pub ended_at: Option<Timestamp>,
}

impl SimulationState {
    /// Title-screen state with a corridor already generated
    pub fn new(settings: &Settings, rng: &mut impl RandomSource) -> Self {
        Self {
            mode: GameMode::NotStarted,
            score: 0,
            last_score: None,
            player_y: settings.spawn_y(),
            player_velocity: 0.0,
            lift_engaged_since: None,
            lift_edges: 0,
            anchor: None,
            anchor_velocity: 0.0,
            corridor: Corridor::generate(settings, rng),
            player_slot: settings.player_slot,
            ended_at: None,
        }
    }

    /// Start a fresh run
    pub fn reset(&mut self, settings: &Settings, rng: &mut impl RandomSource, now: Timestamp) {
        self.mode = GameMode::Running;
        self.score = 0;
        self.player_y = settings.spawn_y();
        self.player_velocity = 0.0;
        self.anchor = None;
        self.anchor_velocity = 0.0;
        self.corridor = Corridor::generate(settings, rng);
        self.player_slot = settings.player_slot;
        // Keep a press that arrived with the start request; anything older
        // than the last game over belongs to the previous run
        let fresh = match (self.lift_engaged_since, self.ended_at) {
            (Some(stamp), Some(ended)) => stamp > ended,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if !fresh {
            self.mark_lift_edge(now);
        }
    }

    /// Finish the current run
    pub fn end(&mut self, now: Timestamp) {
        self.mode = GameMode::Ended;
        self.last_score = Some(self.score);
        self.ended_at = Some(now);
    }

    /// Record a lift edge at `now`
    pub fn mark_lift_edge(&mut self, now: Timestamp) {
        self.lift_engaged_since = Some(now);
        self.lift_edges += 1;
    }

    /// (upper, lower) wall thickness at the player's slot
    pub fn walls_at_player(&self) -> (f32, f32) {
        self.corridor.at(self.player_slot)
    }
}
