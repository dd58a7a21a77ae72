#![allow(dead_code)]

use cheese_chase::entity::collectible::CollectibleKind;
use cheese_chase::game::events::EventResolver;
use cheese_chase::game::hud::TextGroup;
use cheese_chase::game::level::{LevelManager, Transition};
use cheese_chase::game::pause::Pause;
use cheese_chase::game::stage::Stage;
use cheese_chase::map::graph::{MazeGraph, NodeId};
use cheese_chase::map::parser::SymbolGrid;

/// Four junctions on a rectangle, three tiles wide and two tall:
///
/// ```text
/// + . . +
/// . X X .
/// + . . +
/// ```
pub const RECTANGLE: &str = "+ . . +\n. X X .\n+ . . +\n";

/// A plus-shaped junction with every arm one step long (two tiles):
pub const PLUS: &str = "X X + X X\nX X . X X\n+ . + . +\nX X . X X\nX X + X X\n";

pub fn graph_from(text: &str) -> MazeGraph {
    MazeGraph::from_grid(&SymbolGrid::parse(text).unwrap())
}

pub fn node(graph: &MazeGraph, col: f32, row: f32) -> NodeId {
    graph.node_at(col, row).unwrap()
}

/// Everything the per-frame rules operate on, for level 0, unpaused.
pub struct World {
    pub stage: Stage,
    pub levels: LevelManager,
    pub pause: Pause<Transition>,
    pub hud: TextGroup,
    pub events: EventResolver,
}

impl World {
    pub fn new() -> Self {
        let mut hud = TextGroup::new();
        let mut levels = LevelManager::default();
        levels.reset_game_state(&mut hud);
        Self {
            stage: Stage::load(0).unwrap(),
            levels,
            pause: Pause::new(false),
            hud,
            events: EventResolver::new(),
        }
    }

    pub fn resolve_collectibles(&mut self) {
        self.events
            .resolve_collectibles(&mut self.stage, &mut self.levels, &mut self.pause, &mut self.hud);
    }

    pub fn resolve_collisions(&mut self) {
        self.events
            .resolve_collisions(&mut self.stage, &mut self.levels, &mut self.pause, &mut self.hud);
    }

    /// Moves the mouse onto the first remaining collectible of `kind` and eats it.
    pub fn eat(&mut self, kind: CollectibleKind) {
        let position = self
            .stage
            .collectibles
            .iter()
            .find(|item| item.kind == kind)
            .map(|item| item.position)
            .expect("no collectible of that kind left");
        self.stage.mouse.mover.position = position;
        self.resolve_collectibles();
    }

    /// Eats whatever collectible comes first in scan order.
    pub fn eat_any(&mut self) {
        let position = self.stage.collectibles.iter().next().map(|item| item.position).unwrap();
        self.stage.mouse.mover.position = position;
        self.resolve_collectibles();
    }
}
