//! Collision detection against the corridor walls
//!
//! The player is a circle at a fixed slot, so only the two wall thicknesses at
//! that slot matter.

/// Which wall was touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Hanging wall (top of the canvas)
    Upper,
    /// Rising wall (bottom of the canvas)
    Lower,
}

/// Check the player against the walls at its slot
///
/// `upper` and `lower` are wall thicknesses measured from the top and bottom
/// edges of a canvas of height `canvas_height`. Touching counts only once the
/// circle crosses into the wall; resting exactly on the edge is safe.
pub fn check_corridor(
    player_y: f32,
    radius: f32,
    canvas_height: f32,
    upper: f32,
    lower: f32,
) -> Option<Boundary> {
    if player_y + radius > canvas_height - lower {
        Some(Boundary::Lower)
    } else if player_y - radius < upper {
        Some(Boundary::Upper)
    } else {
        None
    }
}

/// Vertical room left before touching either wall (negative when touching)
pub fn clearance(player_y: f32, radius: f32, canvas_height: f32, upper: f32, lower: f32) -> f32 {
    let above = (player_y - radius) - upper;
    let below = (canvas_height - lower) - (player_y + radius);
    above.min(below)
}
