//! Corridor wall generation
//!
//! Each wall is a [`Profile`]: one thickness per horizontal slot. Thickness
//! follows a clamped random walk, so neighbouring slots never differ by more
//! than the configured variation and the corridor stays navigable while still
//! being unpredictable. Scrolling appends a slot at the far end and drops the
//! one that has passed the player.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::settings::{CorridorMode, Settings};

/// Random-walk parameters shared by every segment of a profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Maximum change between neighbouring segments
    pub variation: f32,
    /// Optional upper bound on thickness
    pub cap: Option<f32>,
}

impl WalkParams {
    pub fn new(variation: f32) -> Self {
        Self {
            variation,
            cap: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            variation: settings.wall_variation,
            cap: settings.max_wall_thickness,
        }
    }
}

/// Draw the segment that follows `prev`
pub fn next_segment(prev: f32, params: WalkParams, rng: &mut impl RandomSource) -> f32 {
    let drawn = rng
        .uniform(prev - params.variation, prev + params.variation)
        .max(0.0);
    match params.cap {
        Some(cap) => drawn.min(cap),
        None => drawn,
    }
}

/// Thickness of one wall at every slot, oldest (leftmost) first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    segments: VecDeque<f32>,
}

impl Profile {
    /// Constant-thickness profile
    pub fn flat(len: usize, thickness: f32) -> Self {
        Self {
            segments: std::iter::repeat_n(thickness, len).collect(),
        }
    }

    /// Build a profile from explicit segments
    pub fn from_segments(segments: impl IntoIterator<Item = f32>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Thickness at `slot` (0 past the end)
    pub fn get(&self, slot: usize) -> f32 {
        self.segments.get(slot).copied().unwrap_or(0.0)
    }

    /// Overwrite the thickness at `slot` (ignored past the end)
    pub fn set(&mut self, slot: usize, thickness: f32) {
        if let Some(segment) = self.segments.get_mut(slot) {
            *segment = thickness;
        }
    }

    pub fn last(&self) -> Option<f32> {
        self.segments.back().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.segments.iter().copied()
    }

    /// Largest thickness difference between neighbouring slots
    pub fn max_step(&self) -> f32 {
        self.segments
            .iter()
            .zip(self.segments.iter().skip(1))
            .map(|(a, b)| (b - a).abs())
            .fold(0.0, f32::max)
    }
}

/// Random-walk profile of `len` segments, starting flat at zero
pub fn init_profile(len: usize, params: WalkParams, rng: &mut impl RandomSource) -> Profile {
    let mut segments = VecDeque::with_capacity(len + 1);
    let mut prev = 0.0;
    for i in 0..len {
        if i > 0 {
            prev = next_segment(prev, params, rng);
        }
        segments.push_back(prev);
    }
    Profile { segments }
}

/// Scroll by one slot: append a new far segment, drop the oldest
pub fn extend_profile(profile: &mut Profile, params: WalkParams, rng: &mut impl RandomSource) {
    let Some(prev) = profile.last() else {
        return;
    };
    profile.segments.push_back(next_segment(prev, params, rng));
    profile.segments.pop_front();
}

/// Both walls of the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    /// Thickness hanging down from the top edge
    pub upper: Profile,
    /// Thickness rising from the bottom edge
    pub lower: Profile,
}

impl Corridor {
    /// Fresh corridor for a new run
    pub fn generate(settings: &Settings, rng: &mut impl RandomSource) -> Self {
        let params = WalkParams::from_settings(settings);
        match settings.corridor {
            CorridorMode::Scrolling => {
                let upper = init_profile(settings.wall_count, params, rng);
                let lower = init_profile(settings.wall_count, params, rng);
                Self { upper, lower }
            }
            CorridorMode::Static => Self {
                upper: Profile::flat(settings.wall_count, settings.ceiling_thickness),
                lower: init_profile(settings.wall_count, params, rng),
            },
        }
    }

    /// Advance one slot (no-op for static corridors)
    pub fn scroll(&mut self, settings: &Settings, rng: &mut impl RandomSource) {
        if !settings.corridor.scrolls() {
            return;
        }
        let params = WalkParams::from_settings(settings);
        extend_profile(&mut self.upper, params, rng);
        extend_profile(&mut self.lower, params, rng);
    }

    /// (upper, lower) thickness at `slot`
    pub fn at(&self, slot: usize) -> (f32, f32) {
        (self.upper.get(slot), self.lower.get(slot))
    }

    /// Open vertical gap at `slot`
    pub fn gap_at(&self, slot: usize, canvas_height: f32) -> (f32, f32) {
        let (upper, lower) = self.at(slot);
        (upper, canvas_height - lower)
    }
}
