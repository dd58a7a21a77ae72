use std::time::Duration;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::info;

use cheese_chase::config::{load_config, Config};
use cheese_chase::formatter;
use cheese_chase::game::hud::TextGroup;
use cheese_chase::game::Game;
use cheese_chase::input::{InputEvent, Key};
use cheese_chase::logging::setup_logging;

/// Frames between the autopilot's direction changes.
const STEER_INTERVAL: u64 = 12;

const DIRECTION_KEYS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

/// Plays the game without a keyboard: resumes whenever the game waits for the player and
/// holds a random direction key, changing it every few frames.
struct Autopilot {
    rng: SmallRng,
    held: Option<Key>,
}

impl Autopilot {
    fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_os_rng(),
        };
        Self { rng, held: None }
    }

    fn poll(&mut self, game: &Game, frame: u64) -> SmallVec<[InputEvent; 3]> {
        let mut events = SmallVec::new();

        // Paused with nothing scheduled means the game is waiting on the pause key
        if game.pause.paused && game.pause.remaining().is_none() && game.stage.mouse.alive {
            events.push(InputEvent::KeyDown(Key::Space));
        }

        if frame % STEER_INTERVAL == 0 {
            if let Some(key) = self.held.take() {
                events.push(InputEvent::KeyUp(key));
            }
            if let Some(&key) = DIRECTION_KEYS.choose(&mut self.rng) {
                events.push(InputEvent::KeyDown(key));
                self.held = Some(key);
            }
        }

        events
    }
}

fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    setup_logging(&config);

    let mut game = Game::new(&config, TextGroup::new()).context("Failed to start the game")?;
    let mut autopilot = Autopilot::new(&config);
    let dt = config.frame_time();

    info!(frame_rate = config.frame_rate, max_frames = config.max_frames, "Starting headless session");

    let mut frames = 0;
    while frames < config.max_frames {
        let input = autopilot.poll(&game, frames);
        let flow = game.update(dt, &input).context("Frame update failed")?;
        frames += 1;
        formatter::increment_frame();
        if flow.is_break() {
            break;
        }
        if config.realtime {
            spin_sleep::sleep(Duration::from_secs_f32(dt));
        }
    }

    info!(
        frames,
        score = %game.hud.score_text(),
        level = game.levels.level,
        lives = game.levels.lives,
        "Session finished"
    );
    Ok(())
}
