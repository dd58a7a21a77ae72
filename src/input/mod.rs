//! Raw input events, key bindings, and the set of held direction keys.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::trace;

use crate::input::commands::GameCommand;
use crate::map::direction::Direction;

pub mod commands;

/// A physical key, as reported by whatever polls the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Character(char),
}

/// One polled input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The window was closed; ends the game loop.
    Quit,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Key, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Key::Up, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Key::Character('w'), GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Key::Down, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Key::Character('s'), GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Key::Left, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Key::Character('a'), GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Key::Right, GameCommand::MovePlayer(Direction::Right));
        key_bindings.insert(Key::Character('d'), GameCommand::MovePlayer(Direction::Right));

        // Game actions
        key_bindings.insert(Key::Space, GameCommand::TogglePause);

        Self { key_bindings }
    }
}

impl Bindings {
    /// The command bound to `key`, if any.
    pub fn command(&self, key: Key) -> Option<GameCommand> {
        let command = self.key_bindings.get(&key).copied();
        if command.is_none() {
            trace!(?key, "Ignoring unbound key");
        }
        command
    }

    /// The command a whole event maps to. Only key presses and quit produce commands.
    pub fn translate(&self, event: InputEvent) -> Option<GameCommand> {
        match event {
            InputEvent::Quit => Some(GameCommand::Exit),
            InputEvent::KeyDown(key) => self.command(key),
            InputEvent::KeyUp(_) => None,
        }
    }
}

/// Direction keys currently held down, most recently pressed first.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    held: SmallVec<[Direction; 4]>,
}

impl Controls {
    pub fn press(&mut self, direction: Direction) {
        self.release(direction);
        self.held.insert(0, direction);
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.retain(|held| *held != direction);
    }

    /// Folds one input event into the held set.
    pub fn handle(&mut self, bindings: &Bindings, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                if let Some(GameCommand::MovePlayer(direction)) = bindings.key_bindings.get(&key) {
                    self.press(*direction);
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some(GameCommand::MovePlayer(direction)) = bindings.key_bindings.get(&key) {
                    self.release(*direction);
                }
            }
            InputEvent::Quit => {}
        }
    }

    pub fn held(&self) -> &[Direction] {
        &self.held
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
