//! Vertical motion of the player
//!
//! Gravity and lift have equal magnitude: velocity changes by one unit per
//! second of wall-clock time since the last input edge, downwards (positive y)
//! without lift and upwards with it. Position then advances by one tick's worth
//! of velocity.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::state::SimulationState;

/// How elapsed time since the last input edge feeds into velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LiftIntegration {
    /// Velocity = velocity at the edge ∓ seconds since the edge.
    /// Independent of how many ticks ran in between.
    #[default]
    EdgeAnchored,
    /// Velocity ∓= seconds since the edge, every tick.
    /// Sustained input snowballs faster at higher tick rates.
    Accumulating,
}

/// Advance velocity and position by one tick
pub fn integrate(
    state: &mut SimulationState,
    lift_held: bool,
    now: Timestamp,
    integration: LiftIntegration,
) {
    let since = state.lift_engaged_since.unwrap_or(now);
    let elapsed = now.seconds_since(since).max(0.0) as f32;
    let delta = if lift_held { -elapsed } else { elapsed };

    match integration {
        LiftIntegration::EdgeAnchored => {
            if state.anchor != Some(state.lift_edges) {
                state.anchor = Some(state.lift_edges);
                state.anchor_velocity = state.player_velocity;
            }
            state.player_velocity = state.anchor_velocity + delta;
        }
        LiftIntegration::Accumulating => {
            state.player_velocity += delta;
        }
    }

    state.player_y += state.player_velocity;
}
