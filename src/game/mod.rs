//! This module contains the main game logic and state.

use std::ops::ControlFlow;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::Config;
use crate::error::GameResult;
use crate::game::events::EventResolver;
use crate::game::hud::{Hud, TextGroup, TextId};
use crate::game::level::{LevelManager, Transition};
use crate::game::pause::Pause;
use crate::game::stage::Stage;
use crate::input::{Bindings, Controls, InputEvent};

pub mod events;
pub mod hud;
pub mod level;
pub mod pause;
pub mod stage;

/// The `Game` struct drives one frame at a time.
///
/// It owns the loaded level, the progression state, the pause and the HUD, and hands each
/// subsystem exactly the pieces it works on.
pub struct Game<H: Hud = TextGroup> {
    pub stage: Stage,
    pub levels: LevelManager,
    pub pause: Pause<Transition>,
    pub events: EventResolver,
    pub bindings: Bindings,
    pub controls: Controls,
    pub hud: H,
    rng: SmallRng,
    freeze_player_while_paused: bool,
}

impl<H: Hud> Game<H> {
    /// Starts a new game on level 0, paused behind the ready prompt.
    pub fn new(config: &Config, mut hud: H) -> GameResult<Self> {
        let mut levels = LevelManager::new(config.starting_lives);
        levels.reset_game_state(&mut hud);
        let stage = Stage::load(levels.level)?;
        hud.show_text(TextId::Ready);

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Ok(Self {
            stage,
            levels,
            pause: Pause::new(true),
            events: EventResolver::new(),
            bindings: Bindings::default(),
            controls: Controls::default(),
            hud,
            rng,
            freeze_player_while_paused: config.freeze_player_while_paused,
        })
    }

    /// Runs one frame of `dt` seconds with the input polled since the last frame.
    ///
    /// Returns `Break` once a quit event has been seen.
    pub fn update(&mut self, dt: f32, input: &[InputEvent]) -> GameResult<ControlFlow<()>> {
        self.hud.update(dt);
        self.stage.collectibles.update(dt);

        if !self.pause.paused {
            let mouse = self.stage.mouse.position();
            self.stage.cats.update(dt, &mut self.stage.graph, mouse, &mut self.rng);
            self.events
                .resolve_collectibles(&mut self.stage, &mut self.levels, &mut self.pause, &mut self.hud);
            self.events
                .resolve_collisions(&mut self.stage, &mut self.levels, &mut self.pause, &mut self.hud);
        }

        // The mouse runs through pauses so its death plays out during the freeze
        let mouse_moves = !self.stage.mouse.alive || !self.pause.paused || !self.freeze_player_while_paused;
        if mouse_moves {
            self.stage.mouse.update(dt, &self.stage.graph, self.controls.held());
        }

        self.stage.flash.update(dt);

        if let Some(transition) = self.pause.update(dt) {
            debug!(?transition, "Running deferred transition");
            self.levels
                .run(transition, &mut self.stage, &mut self.pause, &mut self.hud)?;
        }

        for &event in input {
            self.controls.handle(&self.bindings, event);
        }
        Ok(self
            .events
            .check_events(input, &self.bindings, &mut self.stage, &mut self.pause, &mut self.hud))
    }
}
