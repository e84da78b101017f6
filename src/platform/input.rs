//! Keyboard input adapter
//!
//! Turns key-down/key-up events into the two signals the simulation needs:
//! - lift: a level signal, stamped once per physical press and once per release
//! - start: an edge signal, raised by a fresh press while no run is in progress
//!
//! Browsers deliver auto-repeat key-downs while a key is held; those are ignored.

use crate::consts::LIFT_KEY_CODE;
use crate::sim::{RandomSource, Simulation, Timestamp};

#[derive(Debug, Clone)]
pub struct InputAdapter {
    lift_code: String,
    lift_down: bool,
    autopilot: bool,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(LIFT_KEY_CODE)
    }
}

impl InputAdapter {
    /// Adapter that treats `lift_code` (a `KeyboardEvent.code` value) as the lift key
    pub fn new(lift_code: impl Into<String>) -> Self {
        Self {
            lift_code: lift_code.into(),
            lift_down: false,
            autopilot: false,
        }
    }

    /// Whether the lift key is physically down
    pub fn lift_down(&self) -> bool {
        self.lift_down
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Hand lift control to (or take it back from) the demo controller
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    pub fn key_down<R: RandomSource>(&mut self, code: &str, now: Timestamp, sim: &mut Simulation<R>) {
        if code != self.lift_code || self.lift_down {
            return;
        }
        self.lift_down = true;
        if !sim.mode().is_running() {
            sim.request_start();
        }
        if !self.autopilot {
            sim.set_lift(true, now);
        }
    }

    pub fn key_up<R: RandomSource>(&mut self, code: &str, now: Timestamp, sim: &mut Simulation<R>) {
        if code != self.lift_code || !self.lift_down {
            return;
        }
        self.lift_down = false;
        if !self.autopilot {
            sim.set_lift(false, now);
        }
    }

    /// Release everything (window lost focus, so the key-up may never arrive)
    pub fn release_all<R: RandomSource>(&mut self, now: Timestamp, sim: &mut Simulation<R>) {
        if self.lift_down {
            self.lift_down = false;
            if !self.autopilot {
                sim.set_lift(false, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{GameMode, TickOutcome};

    fn sim() -> Simulation {
        Simulation::new(Settings::default(), 77)
    }

    #[test]
    fn test_press_starts_and_lifts() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        let t = Timestamp::from_secs(1.0);

        input.key_down("Space", t, &mut sim);
        assert!(sim.intent().start_requested);
        assert!(sim.intent().lift_held);
        assert_eq!(sim.state().lift_engaged_since, Some(t));

        assert_eq!(sim.tick(t.after_secs(0.02)), TickOutcome::Started);
        // The press stamp survives the reset
        assert_eq!(sim.state().lift_engaged_since, Some(t));
    }

    #[test]
    fn test_auto_repeat_is_ignored() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.key_down("Space", Timestamp::from_secs(1.0), &mut sim);
        sim.tick(Timestamp::from_secs(1.0));
        assert_eq!(sim.mode(), GameMode::Running);

        input.key_down("Space", Timestamp::from_secs(1.5), &mut sim);
        input.key_down("Space", Timestamp::from_secs(1.6), &mut sim);
        assert_eq!(sim.state().lift_engaged_since, Some(Timestamp::from_secs(1.0)));

        input.key_up("Space", Timestamp::from_secs(2.0), &mut sim);
        assert!(!sim.intent().lift_held);
        assert_eq!(sim.state().lift_engaged_since, Some(Timestamp::from_secs(2.0)));
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.key_down("KeyA", Timestamp::from_secs(1.0), &mut sim);
        input.key_up("KeyA", Timestamp::from_secs(1.1), &mut sim);
        assert!(!sim.intent().start_requested);
        assert!(!sim.intent().lift_held);
        assert_eq!(sim.state().lift_engaged_since, None);
    }

    #[test]
    fn test_press_while_running_does_not_restart() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.key_down("Space", Timestamp::from_secs(0.0), &mut sim);
        sim.tick(Timestamp::from_secs(0.0));
        input.key_up("Space", Timestamp::from_secs(0.1), &mut sim);

        input.key_down("Space", Timestamp::from_secs(0.2), &mut sim);
        assert!(!sim.intent().start_requested);
        assert!(sim.intent().lift_held);
    }

    #[test]
    fn test_held_key_through_game_over_needs_fresh_press() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.key_down("Space", Timestamp::from_secs(0.0), &mut sim);
        sim.tick(Timestamp::from_secs(0.0));
        sim.state_mut().player_y = 0.0;
        assert!(matches!(sim.tick(Timestamp::from_secs(0.0)), TickOutcome::Ended { .. }));

        // Still holding: repeats must not restart
        input.key_down("Space", Timestamp::from_secs(0.5), &mut sim);
        assert!(!sim.intent().start_requested);

        input.key_up("Space", Timestamp::from_secs(0.6), &mut sim);
        input.key_down("Space", Timestamp::from_secs(0.7), &mut sim);
        assert!(sim.intent().start_requested);
    }

    #[test]
    fn test_release_all_on_blur() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.key_down("Space", Timestamp::from_secs(0.0), &mut sim);
        input.release_all(Timestamp::from_secs(0.3), &mut sim);
        assert!(!input.lift_down());
        assert!(!sim.intent().lift_held);
        assert_eq!(sim.state().lift_engaged_since, Some(Timestamp::from_secs(0.3)));
    }

    #[test]
    fn test_autopilot_owns_lift() {
        let mut sim = sim();
        let mut input = InputAdapter::default();
        input.set_autopilot(true);
        input.key_down("Space", Timestamp::from_secs(0.0), &mut sim);
        // Still starts the game, but does not touch lift
        assert!(sim.intent().start_requested);
        assert!(!sim.intent().lift_held);
    }
}
