//! Demo-mode controller
//!
//! Steers toward the middle of the upcoming corridor by predicting where the
//! player will be a few ticks from now and lifting whenever that is below the
//! target line. Only decides `lift_held`; it goes through the same input path
//! as a human player.

use super::state::SimulationState;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Slots ahead of the player averaged into the target line
    pub lookahead_slots: usize,
    /// Ticks of current velocity used to predict position
    pub horizon_ticks: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead_slots: 6,
            horizon_ticks: 8.0,
        }
    }
}

impl Autopilot {
    /// Vertical line the controller aims for
    pub fn target_y(&self, state: &SimulationState, settings: &Settings) -> f32 {
        let first = state.player_slot;
        let last = (first + self.lookahead_slots).min(settings.wall_count.saturating_sub(1));
        let slots = last.saturating_sub(first) + 1;
        let sum: f32 = (first..=last)
            .map(|slot| {
                let (top, bottom) = state.corridor.gap_at(slot, settings.canvas_height);
                (top + bottom) / 2.0
            })
            .sum();
        sum / slots as f32
    }

    /// Should lift be held this tick?
    pub fn wants_lift(&self, state: &SimulationState, settings: &Settings) -> bool {
        let predicted = state.player_y + state.player_velocity * self.horizon_ticks;
        predicted > self.target_y(state, settings)
    }
}
