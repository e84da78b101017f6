//! Fixed timestep simulation tick
//!
//! [`Simulation`] owns the state, the pending input intent and the random
//! source. Input handlers call [`Simulation::set_lift`] and
//! [`Simulation::request_start`] between ticks; only [`Simulation::tick`]
//! advances the game.

use super::clock::Timestamp;
use super::collision::{Boundary, check_corridor};
use super::physics::integrate;
use super::random::{PcgSource, RandomSource};
use super::state::{GameMode, InputIntent, SimulationState};
use crate::settings::{Settings, SettingsError};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running and nothing requested
    Idle,
    /// A pending start request reset the game into a new run
    Started,
    /// The run advanced by one step
    Advanced,
    /// The player touched a wall this tick
    Ended { score: u64, boundary: Boundary },
}

/// The simulation core
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = PcgSource> {
    settings: Settings,
    state: SimulationState,
    intent: InputIntent,
    rng: R,
}

impl Simulation<PcgSource> {
    /// New simulation on the title screen. `settings` must already be valid.
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_source(settings, PcgSource::seeded(seed))
    }

    /// Validate `settings`, then build a simulation
    pub fn try_new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(settings, seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn with_source(settings: Settings, mut rng: R) -> Self {
        let state = SimulationState::new(&settings, &mut rng);
        Self {
            settings,
            state,
            intent: InputIntent::default(),
            rng,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Direct state access for harnesses that need to stage a scenario
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn intent(&self) -> &InputIntent {
        &self.intent
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    /// Level signal for lift. Repeats of the current level are ignored; a
    /// change stamps the moment it happened.
    pub fn set_lift(&mut self, held: bool, now: Timestamp) {
        if self.intent.lift_held == held {
            return;
        }
        self.intent.lift_held = held;
        self.state.mark_lift_edge(now);
    }

    /// Edge signal for (re)start. Ignored while a run is in progress.
    pub fn request_start(&mut self) {
        if !self.state.mode.is_running() {
            self.intent.start_requested = true;
        }
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        if !self.state.mode.is_running() {
            if !self.intent.take_start() {
                return TickOutcome::Idle;
            }
            self.state.reset(&self.settings, &mut self.rng, now);
            log::info!(
                "Run started ({} corridor, {} slots)",
                self.settings.corridor.as_str(),
                self.settings.wall_count
            );
            return TickOutcome::Started;
        }

        self.state.score += 1;

        self.state.corridor.scroll(&self.settings, &mut self.rng);

        integrate(
            &mut self.state,
            self.intent.lift_held,
            now,
            self.settings.integration,
        );

        let (upper, lower) = self.state.walls_at_player();
        if let Some(boundary) = check_corridor(
            self.state.player_y,
            self.settings.player_radius,
            self.settings.canvas_height,
            upper,
            lower,
        ) {
            self.state.end(now);
            log::info!("Run ended on {:?} wall, score {}", boundary, self.state.score);
            return TickOutcome::Ended {
                score: self.state.score,
                boundary,
            };
        }

        TickOutcome::Advanced
    }
}
