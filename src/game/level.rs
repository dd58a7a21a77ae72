//! Score, lives and level progression.

use tracing::{debug, info};

use crate::constants::STARTING_LIVES;
use crate::error::GameResult;
use crate::game::hud::{Hud, TextId};
use crate::game::pause::Pause;
use crate::game::stage::Stage;

/// A deferred level transition, armed on the pause and run when its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Reveal the mouse and cats after the freeze that follows eating a cat.
    ShowEntities,
    NextLevel,
    /// Restart the current level after the mouse lost a life.
    ResetLevel,
    /// Start over from level 0 after the last life was lost.
    RestartGame,
}

#[derive(Debug, Clone)]
pub struct LevelManager {
    pub lives: u32,
    pub level: u32,
    pub score: u32,
    starting_lives: u32,
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

impl LevelManager {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            lives: starting_lives,
            level: 0,
            score: 0,
            starting_lives,
        }
    }

    pub fn reset_game_state(&mut self, hud: &mut dyn Hud) {
        self.lives = self.starting_lives;
        self.level = 0;
        self.score = 0;
        hud.reset_lives(self.lives);
        hud.update_score(self.score);
        hud.update_level(self.level);
    }

    pub fn add_score(&mut self, points: u32, hud: &mut dyn Hud) {
        self.score += points;
        hud.update_score(self.score);
    }

    /// Takes one life and its icon; returns the lives left.
    pub fn lose_life(&mut self, hud: &mut dyn Hud) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        hud.remove_life_icon();
        info!(lives = self.lives, "Life lost");
        self.lives
    }

    /// Advances to the next level's maze, paused until the player resumes.
    pub fn next_level(&mut self, stage: &mut Stage, pause: &mut Pause<Transition>, hud: &mut dyn Hud) -> GameResult<()> {
        stage.show_entities();
        self.level += 1;
        pause.paused = true;
        *stage = Stage::load(self.level)?;
        hud.update_level(self.level);
        info!(level = self.level, score = self.score, "Next level");
        Ok(())
    }

    /// Starts a fresh game on level 0.
    pub fn restart_game(&mut self, stage: &mut Stage, pause: &mut Pause<Transition>, hud: &mut dyn Hud) -> GameResult<()> {
        pause.paused = true;
        self.reset_game_state(hud);
        *stage = Stage::load(self.level)?;
        hud.show_text(TextId::Ready);
        info!("Game restarted");
        Ok(())
    }

    /// Restarts the current level's entities without touching the board or score.
    pub fn reset_level(&mut self, stage: &mut Stage, pause: &mut Pause<Transition>, hud: &mut dyn Hud) {
        pause.paused = true;
        stage.reset_entities();
        hud.show_text(TextId::Ready);
        debug!(level = self.level, lives = self.lives, "Level reset");
    }

    /// Performs a transition handed back by the pause.
    pub fn run(&mut self, transition: Transition, stage: &mut Stage, pause: &mut Pause<Transition>, hud: &mut dyn Hud) -> GameResult<()> {
        match transition {
            Transition::ShowEntities => stage.show_entities(),
            Transition::NextLevel => self.next_level(stage, pause, hud)?,
            Transition::ResetLevel => self.reset_level(stage, pause, hud),
            Transition::RestartGame => self.restart_game(stage, pause, hud)?,
        }
        Ok(())
    }
}
