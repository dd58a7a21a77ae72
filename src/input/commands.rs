use crate::map::direction::Direction;

/// What a bound key asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    TogglePause,
    Exit,
}
