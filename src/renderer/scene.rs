//! Scene projection: simulation state to triangles
//!
//! Text is not drawn here; the [`Overlay`] tells the host page which message
//! (title, score, game over) to show on top of the canvas.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use super::{FrameView, Renderer};

/// Player circle tessellation
const PLAYER_SEGMENTS: u32 = 16;

/// Text the host should show over the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Nothing drawn yet
    #[default]
    Blank,
    /// Game title and start prompt
    Title,
    /// Running score
    Hud { score: u64 },
    /// Final score and restart prompt
    GameOver { score: u64 },
}

/// Builds one frame of vertices per draw call
#[derive(Debug, Default)]
pub struct SceneRenderer {
    vertices: Vec<Vertex>,
    overlay: Overlay,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last drawn frame (canvas pixels)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    fn begin(&mut self, view: &FrameView<'_>, overlay: Overlay) {
        self.vertices.clear();
        self.overlay = overlay;
        let size = Vec2::new(view.settings.canvas_width, view.settings.canvas_height);
        self.vertices
            .extend(shapes::rect(Vec2::ZERO, size, colors::BACKGROUND));
    }
}

impl Renderer for SceneRenderer {
    fn draw_title(&mut self, view: &FrameView<'_>) {
        self.begin(view, Overlay::Title);
    }

    fn draw_running(&mut self, view: &FrameView<'_>) {
        self.begin(view, Overlay::Hud { score: view.state.score });

        let settings = view.settings;
        let corridor = &view.state.corridor;
        let width = settings.segment_width();
        let height = settings.canvas_height;

        self.vertices.extend(shapes::wall(
            corridor.upper.iter(),
            width,
            height,
            true,
            colors::WALL,
        ));
        self.vertices.extend(shapes::wall(
            corridor.lower.iter(),
            width,
            height,
            false,
            colors::WALL,
        ));

        let player = Vec2::new(view.player_x(), view.state.player_y);
        self.vertices.extend(shapes::circle(
            player,
            settings.player_radius,
            colors::PLAYER,
            PLAYER_SEGMENTS,
        ));
    }

    fn draw_game_over(&mut self, view: &FrameView<'_>) {
        let score = view.state.last_score.unwrap_or(view.state.score);
        self.begin(view, Overlay::GameOver { score });
    }
}
