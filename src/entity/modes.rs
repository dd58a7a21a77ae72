//! The cat behaviour state machine.
//!
//! [`MainMode`] cycles scatter and chase forever. [`ModeController`] layers the
//! frightened and respawn overrides on top of it; while neither override is active the
//! controller simply mirrors the main cycle.

use strum_macros::AsRefStr;
use tracing::trace;

use crate::constants::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Mode {
    Scatter,
    Chase,
    Frightened,
    Respawn,
}

/// The endless scatter/chase cycle.
#[derive(Debug, Clone)]
pub struct MainMode {
    pub mode: Mode,
    pub time: f32,
    pub timer: f32,
}

impl Default for MainMode {
    fn default() -> Self {
        Self {
            mode: Mode::Scatter,
            time: timing::SCATTER,
            timer: 0.0,
        }
    }
}

impl MainMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.time {
            match self.mode {
                Mode::Scatter => self.chase(),
                Mode::Chase => self.scatter(),
                _ => {}
            }
        }
    }

    pub fn scatter(&mut self) {
        self.mode = Mode::Scatter;
        self.time = timing::SCATTER;
        self.timer = 0.0;
    }

    pub fn chase(&mut self) {
        self.mode = Mode::Chase;
        self.time = timing::CHASE;
        self.timer = 0.0;
    }
}

/// Per-cat mode: the main cycle plus the frightened and respawn overrides.
#[derive(Debug, Clone)]
pub struct ModeController {
    pub current: Mode,
    pub main_mode: MainMode,
    pub timer: f32,
    /// Length of the frightened window while one is running.
    pub time: Option<f32>,
}

impl Default for ModeController {
    fn default() -> Self {
        let main_mode = MainMode::new();
        Self {
            current: main_mode.mode,
            main_mode,
            timer: 0.0,
            time: None,
        }
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the timers. `at_spawn` tells the controller whether its cat is standing on
    /// its spawn node.
    ///
    /// Returns `true` when an override ended this tick and the cat must return to normal.
    #[must_use]
    pub fn update(&mut self, dt: f32, at_spawn: bool) -> bool {
        self.main_mode.update(dt);

        match self.current {
            Mode::Frightened => {
                self.timer += dt;
                if self.time.is_some_and(|time| self.timer >= time) {
                    self.time = None;
                    self.current = self.main_mode.mode;
                    trace!(mode = self.current.as_ref(), "Frightened window over");
                    return true;
                }
                false
            }
            Mode::Scatter | Mode::Chase => {
                self.current = self.main_mode.mode;
                false
            }
            Mode::Respawn => {
                if at_spawn {
                    self.current = self.main_mode.mode;
                    trace!(mode = self.current.as_ref(), "Respawn complete");
                    return true;
                }
                false
            }
        }
    }

    /// Starts a frightened window, or restarts the running one.
    pub fn set_frightened_mode(&mut self) {
        match self.current {
            Mode::Scatter | Mode::Chase => {
                self.timer = 0.0;
                self.time = Some(timing::FRIGHTENED);
                self.current = Mode::Frightened;
            }
            Mode::Frightened => self.timer = 0.0,
            Mode::Respawn => {}
        }
    }

    /// Sends a frightened cat home. Has no effect in any other mode.
    pub fn set_respawn_mode(&mut self) {
        if self.current == Mode::Frightened {
            self.current = Mode::Respawn;
        }
    }
}
