//! Game loop
//!
//! [`GameLoop`] is the piece a platform driver talks to: it owns the
//! simulation, the tick gate, the input adapter and (once one is attached) a
//! renderer. Drivers call [`Scheduler::on_tick`] from their frame callback and
//! forward key events; everything else happens here.

use crate::platform::InputAdapter;
use crate::renderer::{FrameView, Renderer, SceneRenderer, render_frame};
use crate::settings::{Settings, SettingsError};
use crate::sim::{
    Autopilot, FrameGate, GameMode, PcgSource, RandomSource, Scheduler, Simulation, TickOutcome,
    Timestamp,
};

pub struct GameLoop<D: Renderer = SceneRenderer, R: RandomSource = PcgSource> {
    sim: Simulation<R>,
    gate: FrameGate,
    input: InputAdapter,
    autopilot: Autopilot,
    renderer: Option<D>,
    ticks_run: u64,
}

impl<D: Renderer> GameLoop<D, PcgSource> {
    /// Validate settings and build a loop with no renderer attached yet
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        let sim = Simulation::try_new(settings, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self::from_simulation(sim))
    }
}

impl<D: Renderer, R: RandomSource> GameLoop<D, R> {
    pub fn from_simulation(sim: Simulation<R>) -> Self {
        let gate = FrameGate::new(sim.settings().tick_rate_hz);
        Self {
            sim,
            gate,
            input: InputAdapter::default(),
            autopilot: Autopilot::default(),
            renderer: None,
            ticks_run: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<R> {
        &mut self.sim
    }

    pub fn mode(&self) -> GameMode {
        self.sim.mode()
    }

    /// Ticks executed so far (gated calls excluded)
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn attach_renderer(&mut self, renderer: D) {
        self.renderer = Some(renderer);
    }

    pub fn detach_renderer(&mut self) -> Option<D> {
        self.renderer.take()
    }

    pub fn renderer(&self) -> Option<&D> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut D> {
        self.renderer.as_mut()
    }

    pub fn key_down(&mut self, code: &str, now: Timestamp) {
        self.input.key_down(code, now, &mut self.sim);
    }

    pub fn key_up(&mut self, code: &str, now: Timestamp) {
        self.input.key_up(code, now, &mut self.sim);
    }

    /// Window lost focus
    pub fn blur(&mut self, now: Timestamp) {
        self.input.release_all(now, &mut self.sim);
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.input.autopilot()
    }

    /// Toggle demo mode. Turning it off hands lift back to the physical key.
    pub fn set_autopilot(&mut self, enabled: bool, now: Timestamp) {
        self.input.set_autopilot(enabled);
        if !enabled {
            self.sim.set_lift(self.input.lift_down(), now);
        }
    }

    /// Run one gated step: tick the simulation and draw the result
    fn step(&mut self, now: Timestamp) -> TickOutcome {
        if self.input.autopilot() && self.sim.mode().is_running() {
            let lift = self
                .autopilot
                .wants_lift(self.sim.state(), self.sim.settings());
            self.sim.set_lift(lift, now);
        }

        let outcome = self.sim.tick(now);
        self.ticks_run += 1;

        if let Some(renderer) = self.renderer.as_mut() {
            let view = FrameView::new(self.sim.state(), self.sim.settings());
            render_frame(renderer, &view);
        }

        outcome
    }
}

impl<D: Renderer, R: RandomSource> Scheduler for GameLoop<D, R> {
    fn on_tick(&mut self, now: Timestamp) -> bool {
        if !self.gate.poll(now) {
            return false;
        }
        if let TickOutcome::Ended { score, boundary } = self.step(now) {
            log::debug!("Final score {} ({:?} wall) after {} ticks", score, boundary, self.ticks_run);
        }
        true
    }
}
