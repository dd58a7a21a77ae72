use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::STARTING_LIVES;
use crate::error::GameResult;

/// Prefix shared by every environment variable the game reads.
pub const ENV_PREFIX: &str = "CHEESE_CHASE_";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct Config {
    /// Fixed frames per second of the game loop
    pub frame_rate: u32,
    /// Lives granted when a game starts
    pub starting_lives: u32,
    /// Seed for the cats' random wandering; `None` draws from the OS
    pub seed: Option<u64>,
    /// Frames the headless runner simulates before exiting
    pub max_frames: u64,
    /// Sleep between frames to run at wall-clock speed
    pub realtime: bool,
    /// Default level for this crate's log output
    pub log_level: String,
    /// Hold the living mouse still while the game is paused
    pub freeze_player_while_paused: bool,
}

impl Config {
    /// Length of one frame in seconds.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

/// Raw configuration loaded directly from environment variables
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_frame_rate")]
    frame_rate: u32,
    #[serde(default = "default_starting_lives")]
    starting_lives: u32,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_max_frames")]
    max_frames: u64,
    #[serde(default)]
    realtime: bool,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    freeze_player_while_paused: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            starting_lives: default_starting_lives(),
            seed: None,
            max_frames: default_max_frames(),
            realtime: false,
            log_level: default_log_level(),
            freeze_player_while_paused: false,
        }
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Config {
            // A zero frame rate would make every frame infinitely long
            frame_rate: raw.frame_rate.max(1),
            starting_lives: raw.starting_lives.max(1),
            seed: raw.seed,
            max_frames: raw.max_frames,
            realtime: raw.realtime,
            log_level: raw.log_level,
            freeze_player_while_paused: raw.freeze_player_while_paused,
        }
    }
}

/// Loads the configuration from `CHEESE_CHASE_*` environment variables.
pub fn load_config() -> GameResult<Config> {
    Ok(Figment::new().merge(Env::prefixed(ENV_PREFIX)).extract()?)
}

fn default_frame_rate() -> u32 {
    30
}

fn default_starting_lives() -> u32 {
    STARTING_LIVES
}

fn default_max_frames() -> u64 {
    1800
}

fn default_log_level() -> String {
    "info".to_string()
}
