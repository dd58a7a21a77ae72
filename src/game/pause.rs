//! A pause flag with an optional deadline and a deferred command.
//!
//! The pause never runs anything itself: when its deadline passes, [`Pause::update`]
//! hands the armed command back to the caller.

use tracing::trace;

/// Pause state carrying a deferred command of type `C`.
#[derive(Debug, Clone)]
pub struct Pause<C> {
    pub paused: bool,
    timer: f32,
    pause_time: Option<f32>,
    command: Option<C>,
}

impl<C> Default for Pause<C> {
    fn default() -> Self {
        Self {
            paused: false,
            timer: 0.0,
            pause_time: None,
            command: None,
        }
    }
}

impl<C> Pause<C> {
    pub fn new(paused: bool) -> Self {
        Self {
            paused,
            ..Self::default()
        }
    }

    /// Counts toward the deadline; returns the armed command once it is reached.
    ///
    /// Reaching the deadline unpauses and disarms, even if no command was armed.
    pub fn update(&mut self, dt: f32) -> Option<C> {
        let deadline = self.pause_time?;
        self.timer += dt;
        if self.timer < deadline {
            return None;
        }

        self.timer = 0.0;
        self.paused = false;
        self.pause_time = None;
        self.command.take()
    }

    /// Arms a new request, replacing any pending one.
    ///
    /// A `player_paused` request toggles the pause flag, as the pause key does. Any other
    /// request always pauses, so two events armed in the same frame cannot cancel out.
    pub fn set_pause(&mut self, player_paused: bool, pause_time: Option<f32>, command: Option<C>) {
        self.timer = 0.0;
        self.command = command;
        self.pause_time = pause_time;
        if player_paused {
            self.flip();
        } else {
            self.paused = true;
        }
        trace!(player_paused, ?pause_time, paused = self.paused, "Pause armed");
    }

    pub fn flip(&mut self) {
        self.paused = !self.paused;
    }

    /// Seconds left until the deadline, if one is armed.
    pub fn remaining(&self) -> Option<f32> {
        self.pause_time.map(|deadline| (deadline - self.timer).max(0.0))
    }

    /// The command that will fire at the deadline.
    pub fn pending(&self) -> Option<&C> {
        self.command.as_ref()
    }
}
