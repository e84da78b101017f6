//! Scene renderer bound to an optional WebGPU surface
//!
//! The surface may not exist yet (adapter still being requested) or may have
//! been lost. Frames are still projected so the overlay stays current, but
//! nothing is submitted until a surface is attached.

use super::pipeline::RenderState;
use super::scene::{Overlay, SceneRenderer};
use super::{FrameView, Renderer};

#[derive(Default)]
pub struct GpuRenderer {
    scene: SceneRenderer,
    target: Option<RenderState>,
}

impl GpuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, target: RenderState) {
        self.target = Some(target);
    }

    pub fn detach(&mut self) -> Option<RenderState> {
        self.target.take()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn target_mut(&mut self) -> Option<&mut RenderState> {
        self.target.as_mut()
    }

    pub fn overlay(&self) -> Overlay {
        self.scene.overlay()
    }

    fn present(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        match target.render(self.scene.vertices()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                target.resize(target.size.0, target.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl Renderer for GpuRenderer {
    fn draw_title(&mut self, view: &FrameView<'_>) {
        self.scene.draw_title(view);
        self.present();
    }

    fn draw_running(&mut self, view: &FrameView<'_>) {
        self.scene.draw_running(view);
        self.present();
    }

    fn draw_game_over(&mut self, view: &FrameView<'_>) {
        self.scene.draw_game_over(view);
        self.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_frame;
    use crate::settings::Settings;
    use crate::sim::{PcgSource, SimulationState};

    #[test]
    fn test_draw_without_surface_is_safe() {
        let settings = Settings::default();
        let state = SimulationState::new(&settings, &mut PcgSource::seeded(4));
        let mut renderer = GpuRenderer::new();
        assert!(!renderer.has_target());

        render_frame(&mut renderer, &FrameView::new(&state, &settings));
        assert_eq!(renderer.overlay(), Overlay::Title);
    }
}
