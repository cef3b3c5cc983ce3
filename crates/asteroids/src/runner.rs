//! Headless runner: scripted input in, log lines out

use crate::assets::SHIP_TEXTURE;
use crate::config::{Controls, GameConfig};
use crate::error::GameError;
use crate::game::{AsteroidsGame, GameSnapshot};
use arcade_engine::audio::backend::create_backend;
use arcade_engine::prelude::*;
use arcade_engine::render::Presenter;
use std::collections::HashSet;

/// Frames in one autopilot pattern
const PATTERN_LENGTH: u64 = 240;

/// Scripted pilot that turns, thrusts and fires on a fixed pattern
#[derive(Debug, Clone)]
pub struct Autopilot {
    controls: Controls,
    held: HashSet<KeyCode>,
}

impl Autopilot {
    /// Pilot using the given bindings
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            held: HashSet::new(),
        }
    }

    /// Keys held during `frame`
    pub fn keys_for(&self, frame: u64) -> Vec<KeyCode> {
        let step = frame % PATTERN_LENGTH;
        let mut keys = Vec::new();

        match step {
            0..=39 => keys.push(self.controls.left),
            40..=69 | 150..=169 => keys.push(self.controls.thrust),
            120..=149 => keys.push(self.controls.right),
            _ => {}
        }
        // Tap fire: down for two frames out of every twenty
        if frame % 20 < 2 {
            keys.push(self.controls.fire);
        }
        keys
    }

    /// Press and release events that move the held set to this frame's keys
    pub fn events(&mut self, frame: u64) -> Vec<AppEvent> {
        let wanted: HashSet<KeyCode> = self.keys_for(frame).into_iter().collect();
        let bindings = [self.controls.left, self.controls.right, self.controls.thrust, self.controls.fire];

        let mut events = Vec::new();
        for key in bindings {
            let want = wanted.contains(&key);
            if want != self.held.contains(&key) {
                events.push(AppEvent::KeyInput { key, pressed: want });
            }
        }
        self.held = wanted;
        events
    }
}

/// Logs a one-line summary of the HUD every `interval` frames
#[derive(Debug)]
pub struct LogPresenter {
    interval: u64,
    presented: u64,
}

impl LogPresenter {
    /// Report every `interval` frames (at least 1)
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            presented: 0,
        }
    }

    /// Frames seen so far
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &RenderList) {
        self.presented += 1;
        if self.presented % self.interval != 0 {
            return;
        }

        let score = frame.texts().next().unwrap_or("-");
        let lives = frame
            .commands()
            .iter()
            .filter(|command| {
                matches!(command, DrawCommand::Sprite { texture, scale, .. }
                    if texture == SHIP_TEXTURE && *scale < 1.0)
            })
            .count();
        let game_over = frame.texts().any(|text| text == "GAME OVER");

        log::info!(
            "frame {:>6}: score {} lives {} ({} draw commands){}",
            self.presented,
            score,
            lives,
            frame.len(),
            if game_over { " GAME OVER" } else { "" }
        );
    }
}

/// Frame driver for runs without a window
#[derive(Debug)]
pub struct HeadlessDriver {
    max_frames: u64,
    autopilot: Option<Autopilot>,
    presenter: LogPresenter,
}

impl HeadlessDriver {
    /// Run `max_frames` frames, optionally under autopilot
    pub fn new(max_frames: u64, autopilot: Option<Autopilot>, presenter: LogPresenter) -> Self {
        Self {
            max_frames,
            autopilot,
            presenter,
        }
    }
}

impl Presenter for HeadlessDriver {
    fn present(&mut self, frame: &RenderList) {
        self.presenter.present(frame);
    }
}

impl FrameDriver for HeadlessDriver {
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent> {
        self.autopilot
            .as_mut()
            .map_or_else(Vec::new, |pilot| pilot.events(frame))
    }

    fn keep_running(&self) -> bool {
        self.presenter.presented() < self.max_frames
    }
}

/// Play `frames` frames headless and return the final state
pub fn run(config: GameConfig, frames: u64, autopilot: bool) -> Result<GameSnapshot, GameError> {
    config.validate()?;

    let engine_config = config.engine_config();
    let frames_per_second = (1.0 / engine_config.timestep).round().max(1.0) as u64;
    let pilot = autopilot.then(|| Autopilot::new(config.controls.resolve()));
    let mut driver = HeadlessDriver::new(frames, pilot, LogPresenter::new(frames_per_second));

    let backend = create_backend(engine_config.audio.enabled);
    let mut game = AsteroidsGame::new(config);
    let engine = Engine::run(&engine_config, backend, &mut game, &mut driver)?;

    Ok(game.snapshot(&engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autopilot_taps_fire() {
        let mut pilot = Autopilot::new(Controls::default());

        let first = pilot.events(0);
        assert!(first.contains(&AppEvent::KeyInput { key: KeyCode::Z, pressed: true }));
        assert!(first.contains(&AppEvent::KeyInput { key: KeyCode::Left, pressed: true }));

        // Still held on frame 1: no repeat press
        assert!(pilot.events(1).is_empty());

        let third = pilot.events(2);
        assert_eq!(third, vec![AppEvent::KeyInput { key: KeyCode::Z, pressed: false }]);
    }

    #[test]
    fn test_autopilot_switches_to_thrust() {
        let mut pilot = Autopilot::new(Controls::default());
        for frame in 0..40 {
            pilot.events(frame);
        }
        let events = pilot.events(40);
        assert!(events.contains(&AppEvent::KeyInput { key: KeyCode::Left, pressed: false }));
        assert!(events.contains(&AppEvent::KeyInput { key: KeyCode::Up, pressed: true }));
    }

    #[test]
    fn test_driver_stops_after_frame_budget() {
        let mut driver = HeadlessDriver::new(2, None, LogPresenter::new(1));
        assert!(driver.keep_running());
        driver.present(&RenderList::new());
        driver.present(&RenderList::new());
        assert!(!driver.keep_running());
        assert!(driver.poll_events(0).is_empty());
    }
}
