//! This module contains all the constants used in the game.

/// The size of a single maze tile, in pixels.
pub const TILE_WIDTH: f32 = 16.0;
pub const TILE_HEIGHT: f32 = 16.0;

/// Number of tile columns and rows in a maze layout.
pub const NCOLS: usize = 28;
pub const NROWS: usize = 36;

/// Per-axis tolerance used by [`crate::vector::Vector2`] equality.
pub const VECTOR_EPSILON: f32 = 1e-6;

/// Base speeds, in tiles-per-second units scaled by `TILE_WIDTH / 16`.
pub mod speed {
    pub const NORMAL: f32 = 100.0;
    pub const FRIGHTENED: f32 = 50.0;
    pub const RESPAWN: f32 = 150.0;
}

/// Collision radii, in pixels.
pub mod radius {
    use super::TILE_WIDTH;

    pub const MOUSE: f32 = 5.0;
    pub const CAT: f32 = 5.0;
    pub const CHEESE: f32 = 2.0 * TILE_WIDTH / 16.0;
}

/// Point values awarded for collecting or eating things.
pub mod points {
    pub const CHEESE: u32 = 10;
    pub const POWER_CHEESE: u32 = 50;
    /// Value of the first cat eaten in a frightened window; doubles with every subsequent cat.
    pub const CAT_BASE: u32 = 200;
}

/// Mode durations and other timers, in seconds.
pub mod timing {
    pub const SCATTER: f32 = 7.0;
    pub const CHASE: f32 = 20.0;
    pub const FRIGHTENED: f32 = 7.0;
    pub const POWER_FLASH: f32 = 0.4;
    pub const BACKGROUND_FLASH: f32 = 0.2;
    /// Delay before the next level, a level reset, or a full restart.
    pub const TRANSITION_DELAY: f32 = 3.0;
    /// Freeze after a cat is eaten.
    pub const EAT_CAT_DELAY: f32 = 1.0;
    /// Lifetime of the floating score label for an eaten cat.
    pub const SCORE_LABEL_TTL: f32 = 1.0;
}

/// Collected-count thresholds that open a pen exit for a cat.
pub const CAT3_RELEASE_THRESHOLD: u32 = 30;
pub const CAT4_RELEASE_THRESHOLD: u32 = 70;

/// Lives granted at the start of a game.
pub const STARTING_LIVES: u32 = 5;

/// Symbols that create a graph node.
pub const NODE_SYMBOLS: [char; 3] = ['+', 'P', 'n'];
/// Symbols that are passable but do not create a node.
pub const PATH_SYMBOLS: [char; 4] = ['.', '-', '|', 'p'];

/// The home pen template, laid out at a fractional tile offset.
pub const HOME_PEN: [[char; 5]; 5] = [
    ['X', 'X', '+', 'X', 'X'],
    ['X', 'X', '.', 'X', 'X'],
    ['+', 'X', '.', 'X', '+'],
    ['+', '.', '+', '.', '+'],
    ['+', 'X', 'X', 'X', '+'],
];

/// RGB color passed to the HUD for floating labels.
pub type Color = (u8, u8, u8);
pub const WHITE: Color = (255, 255, 255);
pub const RED: Color = (255, 0, 0);
