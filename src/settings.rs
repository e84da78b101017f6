//! Game settings
//!
//! Everything tunable about a run lives here. Settings are plain data: build
//! them in code (or parse them from JSON), call [`Settings::validate`], then hand
//! them to the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::LiftIntegration;

/// Corridor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CorridorMode {
    /// Two random-walk walls that scroll one slot per tick
    #[default]
    Scrolling,
    /// One random-walk floor under a flat ceiling, no scrolling
    Static,
}

impl CorridorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorridorMode::Scrolling => "Scrolling",
            CorridorMode::Static => "Static",
        }
    }

    /// Whether the corridor advances every tick
    pub fn scrolls(&self) -> bool {
        matches!(self, CorridorMode::Scrolling)
    }
}

/// Reasons a [`Settings`] value cannot drive a simulation
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("canvas must be finite and positive, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("corridor needs at least one wall slot")]
    EmptyCorridor,

    #[error("player slot {slot} is outside the corridor (wall count {wall_count})")]
    PlayerSlotOutOfRange { slot: usize, wall_count: usize },

    #[error("player radius {radius} must be positive and fit inside a canvas of height {height}")]
    InvalidRadius { radius: f32, height: f32 },

    #[error("tick rate {0} Hz must be finite and positive")]
    InvalidTickRate(f64),

    #[error("wall variation {0} must be finite and non-negative")]
    InvalidVariation(f32),

    #[error("{name} thickness {value} must be finite and non-negative")]
    InvalidThickness { name: &'static str, value: f32 },

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Logical canvas width (only affects on-screen segment width)
    pub canvas_width: f32,
    /// Logical canvas height (collision uses this)
    pub canvas_height: f32,

    // === Corridor ===
    /// Corridor variant
    pub corridor: CorridorMode,
    /// Number of slots in each corridor profile
    pub wall_count: usize,
    /// Maximum change in thickness between neighbouring slots
    pub wall_variation: f32,
    /// Optional upper bound on any wall segment
    pub max_wall_thickness: Option<f32>,
    /// Flat ceiling thickness (static corridor only)
    pub ceiling_thickness: f32,

    // === Player ===
    /// Slot the player occupies
    pub player_slot: usize,
    /// Player point radius
    pub player_radius: f32,
    /// How lift/gravity feed into velocity
    pub integration: LiftIntegration,

    // === Timing ===
    /// Target tick rate
    pub tick_rate_hz: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            corridor: CorridorMode::Scrolling,
            wall_count: WALL_COUNT,
            wall_variation: SCROLLING_WALL_VARIATION,
            max_wall_thickness: None,
            ceiling_thickness: STATIC_CEILING_THICKNESS,

            player_slot: PLAYER_SLOT,
            player_radius: PLAYER_RADIUS,
            integration: LiftIntegration::default(),

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Settings {
    /// The single-wall layout: narrower canvas, gentle floor, flat ceiling
    pub fn static_wall() -> Self {
        Self {
            canvas_width: 850.0,
            corridor: CorridorMode::Static,
            wall_variation: STATIC_WALL_VARIATION,
            ..Self::default()
        }
    }

    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Resize the corridor, keeping the player one third of the way across
    pub fn with_wall_count(mut self, wall_count: usize) -> Self {
        self.wall_count = wall_count;
        self.player_slot = wall_count / 3;
        self
    }

    pub fn with_variation(mut self, variation: f32) -> Self {
        self.wall_variation = variation;
        self
    }

    pub fn with_integration(mut self, integration: LiftIntegration) -> Self {
        self.integration = integration;
        self
    }

    /// Seconds between ticks
    pub fn tick_period(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }

    /// On-screen width of one corridor slot
    pub fn segment_width(&self) -> f32 {
        self.canvas_width / self.wall_count as f32
    }

    /// Vertical start position of the player
    pub fn spawn_y(&self) -> f32 {
        self.canvas_height / 2.0
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let canvas_ok = |v: f32| v.is_finite() && v > 0.0;
        if !canvas_ok(self.canvas_width) || !canvas_ok(self.canvas_height) {
            return Err(SettingsError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.wall_count == 0 {
            return Err(SettingsError::EmptyCorridor);
        }
        if self.player_slot >= self.wall_count {
            return Err(SettingsError::PlayerSlotOutOfRange {
                slot: self.player_slot,
                wall_count: self.wall_count,
            });
        }
        if !(self.player_radius.is_finite()
            && self.player_radius > 0.0
            && self.player_radius * 2.0 < self.canvas_height)
        {
            return Err(SettingsError::InvalidRadius {
                radius: self.player_radius,
                height: self.canvas_height,
            });
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(SettingsError::InvalidTickRate(self.tick_rate_hz));
        }
        if !(self.wall_variation.is_finite() && self.wall_variation >= 0.0) {
            return Err(SettingsError::InvalidVariation(self.wall_variation));
        }
        let thickness_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !thickness_ok(self.ceiling_thickness) {
            return Err(SettingsError::InvalidThickness {
                name: "ceiling",
                value: self.ceiling_thickness,
            });
        }
        if let Some(cap) = self.max_wall_thickness
            && !thickness_ok(cap)
        {
            return Err(SettingsError::InvalidThickness {
                name: "max wall",
                value: cap,
            });
        }
        Ok(())
    }

    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.segment_width(), 10.0);
        assert_eq!(settings.spawn_y(), 300.0);
        assert!(Settings::static_wall().validate().is_ok());
    }

    #[test]
    fn test_player_slot_must_be_inside_corridor() {
        let settings = Settings {
            player_slot: 90,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PlayerSlotOutOfRange { slot: 90, wall_count: 90 })
        ));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let bad_canvas = Settings::default().with_canvas(0.0, 600.0);
        assert!(matches!(bad_canvas.validate(), Err(SettingsError::InvalidCanvas { .. })));

        let bad_variation = Settings::default().with_variation(f32::NAN);
        assert!(matches!(bad_variation.validate(), Err(SettingsError::InvalidVariation(_))));

        let empty = Settings::default().with_wall_count(0);
        assert!(matches!(empty.validate(), Err(SettingsError::EmptyCorridor)));

        let huge_radius = Settings {
            player_radius: 300.0,
            ..Settings::default()
        };
        assert!(matches!(huge_radius.validate(), Err(SettingsError::InvalidRadius { .. })));
    }

    #[test]
    fn test_json_fills_missing_fields() {
        let settings = Settings::from_json(r#"{ "corridor": "Static", "wall_variation": 2.0 }"#)
            .expect("valid settings");
        assert_eq!(settings.corridor, CorridorMode::Static);
        assert_eq!(settings.wall_count, WALL_COUNT);

        let json = settings.to_json().expect("serializable");
        let back = Settings::from_json(&json).expect("round trip");
        assert_eq!(back, settings);
    }

    #[test]
    fn test_json_errors_are_reported() {
        assert!(matches!(Settings::from_json("not json"), Err(SettingsError::Json(_))));
        assert!(matches!(
            Settings::from_json(r#"{ "tick_rate_hz": -1.0 }"#),
            Err(SettingsError::InvalidTickRate(_))
        ));
    }

    #[test]
    fn test_corridor_mode_names() {
        assert_eq!(CorridorMode::Scrolling.as_str(), "Scrolling");
        assert_eq!(CorridorMode::Static.as_str(), "Static");
    }
}
