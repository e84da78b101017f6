//! Glidy Bird - A scrolling-corridor reflex game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (terrain, physics, collisions, game state)
//! - `game`: Scheduler-driven game loop composing simulation, input and renderer
//! - `renderer`: Stateless projection of simulation state, WebGPU back end
//! - `platform`: Keyboard input adapter
//! - `settings`: Validated, serializable game configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::{CorridorMode, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE_HZ: f64 = 60.0;

    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 900.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Number of corridor slots across the canvas
    pub const WALL_COUNT: usize = 90;
    /// Slot the player occupies (one third of the way across)
    pub const PLAYER_SLOT: usize = WALL_COUNT / 3;
    /// Player point radius
    pub const PLAYER_RADIUS: f32 = 5.0;

    /// Per-segment variation bound for the scrolling dual-wall corridor
    pub const SCROLLING_WALL_VARIATION: f32 = 8.0;
    /// Per-segment variation bound for the static single-wall corridor
    pub const STATIC_WALL_VARIATION: f32 = 2.0;
    /// Ceiling thickness for the static single-wall corridor
    pub const STATIC_CEILING_THICKNESS: f32 = 5.0;

    /// Key code that lifts the player and (re)starts a run
    pub const LIFT_KEY_CODE: &str = "Space";
}
