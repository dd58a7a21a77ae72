//! The per-level world: the maze graph and everything standing on it.

use tracing::info;

use crate::constants::timing;
use crate::entity::cat::CatGroup;
use crate::entity::collectible::CollectibleGroup;
use crate::entity::kind::EntityKind;
use crate::entity::mouse::Mouse;
use crate::error::{GameResult, MapError};
use crate::map::direction::Direction;
use crate::map::graph::{MazeGraph, NodeId};
use crate::map::layout::{MazeLayout, Tile};
use crate::map::parser::MazeGrids;

/// Where each cat starts, relative to the home pen's corner.
const CAT_STARTS: [(EntityKind, Tile); 4] = [
    (EntityKind::Cat1, (2.0, 0.0)),
    (EntityKind::Cat2, (2.0, 3.0)),
    (EntityKind::Cat3, (0.0, 3.0)),
    (EntityKind::Cat4, (4.0, 3.0)),
];

/// Toggles the maze background while a cleared level is celebrated.
#[derive(Debug, Clone, Default)]
pub struct BackgroundFlash {
    pub active: bool,
    /// Whether the alternate background is showing.
    pub flashed: bool,
    timer: f32,
}

impl BackgroundFlash {
    pub fn start(&mut self) {
        self.active = true;
        self.timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.timer += dt;
        if self.timer >= timing::BACKGROUND_FLASH {
            self.timer = 0.0;
            self.flashed = !self.flashed;
        }
    }
}

/// One loaded level.
#[derive(Debug)]
pub struct Stage {
    pub layout: &'static MazeLayout,
    pub grids: MazeGrids,
    pub graph: MazeGraph,
    pub mouse: Mouse,
    pub cats: CatGroup,
    pub collectibles: CollectibleGroup,
    pub flash: BackgroundFlash,
}

impl Stage {
    /// Builds the maze for `level` and places every entity with its starting access rules.
    ///
    /// # Errors
    ///
    /// Fails if the maze grids are malformed or the layout names a tile without a node.
    pub fn load(level: u32) -> GameResult<Self> {
        let layout = MazeLayout::for_level(level);
        let grids = layout.grids()?;

        let mut graph = MazeGraph::from_grid(&grids.tiles);
        layout.set_portal_pairs(&mut graph);
        layout.connect_home_nodes(&mut graph);

        let mouse = Mouse::new(node_for(&graph, layout.mouse_start)?, &graph);
        let collectibles = CollectibleGroup::from_grid(&grids.tiles);

        let mut cats = CatGroup::new(graph.start_temp_node().ok_or(MapError::NoNodes)?, &graph);
        for (kind, (x, y)) in CAT_STARTS {
            let node = node_for(&graph, layout.add_offset(x, y))?;
            if let Some(cat) = cats.get_mut(kind) {
                cat.mover.set_start_node(node, &graph);
            }
        }
        let (x, y) = layout.add_offset(2.0, 3.0);
        cats.set_spawn_node(node_for(&graph, (x, y))?);

        graph.deny_home_access(EntityKind::Mouse);
        graph.deny_home_access_list(&EntityKind::CATS);
        for (kind, direction) in [(EntityKind::Cat3, Direction::Right), (EntityKind::Cat4, Direction::Left)] {
            if let Some(cat) = cats.get(kind) {
                graph.deny_access_at(cat.mover.start_node, direction, kind);
            }
        }
        layout.deny_cats_access(&mut graph, &EntityKind::CATS);

        info!(
            level,
            maze = layout.name,
            nodes = graph.len(),
            cheese = collectibles.len(),
            "Level loaded"
        );

        Ok(Self {
            layout,
            grids,
            graph,
            mouse,
            cats,
            collectibles,
            flash: BackgroundFlash::default(),
        })
    }

    pub fn show_entities(&mut self) {
        self.mouse.mover.visible = true;
        self.cats.show();
    }

    pub fn hide_entities(&mut self) {
        self.mouse.mover.visible = false;
        self.cats.hide();
    }

    /// Puts the mouse and cats back on their start nodes; the board and gates are kept.
    ///
    /// Cats caught mid-respawn had the pen gate opened for them, so it is closed again.
    pub fn reset_entities(&mut self) {
        self.mouse.reset(&self.graph);
        self.cats.reset(&self.graph);
        self.graph.deny_home_access_list(&EntityKind::CATS);
    }
}

fn node_for(graph: &MazeGraph, (col, row): Tile) -> GameResult<NodeId> {
    graph.node_at(col, row).ok_or_else(|| MapError::MissingNode { col, row }.into())
}
