//! Rendering module
//!
//! Renderers are stateless projections of the simulation: they get a read-only
//! [`FrameView`] once per executed tick and pick one draw routine per
//! [`GameMode`]. [`SceneRenderer`] turns a view into colored triangles and
//! [`GpuRenderer`] pushes those through a WebGPU pipeline.

pub mod gpu;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use gpu::GpuRenderer;
pub use pipeline::{RenderSetupError, RenderState};
pub use scene::{Overlay, SceneRenderer};

use crate::settings::Settings;
use crate::sim::{GameMode, SimulationState};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub state: &'a SimulationState,
    pub settings: &'a Settings,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a SimulationState, settings: &'a Settings) -> Self {
        Self { state, settings }
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    /// Horizontal center of the player's slot
    pub fn player_x(&self) -> f32 {
        (self.state.player_slot as f32 + 0.5) * self.settings.segment_width()
    }
}

/// A draw routine per game mode
pub trait Renderer {
    fn draw_title(&mut self, view: &FrameView<'_>);
    fn draw_running(&mut self, view: &FrameView<'_>);
    fn draw_game_over(&mut self, view: &FrameView<'_>);
}

/// Dispatch a frame to the routine for the current mode
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, view: &FrameView<'_>) {
    match view.mode() {
        GameMode::NotStarted => renderer.draw_title(view),
        GameMode::Running => renderer.draw_running(view),
        GameMode::Ended => renderer.draw_game_over(view),
    }
}
