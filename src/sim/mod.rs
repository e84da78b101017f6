//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module reads a clock, draws
//! or listens for events:
//! - Time arrives as a [`Timestamp`] argument
//! - Randomness comes from a [`RandomSource`]
//! - Input arrives as intent between ticks

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod physics;
pub mod random;
pub mod state;
pub mod terrain;
pub mod tick;

pub use autopilot::Autopilot;
pub use clock::{FrameGate, Scheduler, Timestamp};
pub use collision::{Boundary, check_corridor, clearance};
pub use physics::{LiftIntegration, integrate};
pub use random::{PcgSource, RandomSource};
pub use state::{GameMode, InputIntent, SimulationState};
pub use terrain::{Corridor, Profile, WalkParams, extend_profile, init_profile};
pub use tick::{Simulation, TickOutcome};
