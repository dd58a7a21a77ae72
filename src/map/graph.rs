use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::constants::{HOME_PEN, NODE_SYMBOLS, PATH_SYMBOLS, TILE_HEIGHT, TILE_WIDTH};
use crate::entity::kind::{Access, EntityKind};
use crate::map::direction::Direction;
use crate::map::parser::SymbolGrid;
use crate::vector::Vector2;

/// A unique identifier for a node, represented by its index in the graph's storage.
pub type NodeId = usize;

/// Lookup key for a node: its pixel position, quantized to whole pixels.
pub type TileKey = (i32, i32);

/// A junction in the maze.
#[derive(Debug, Clone)]
pub struct Node {
    /// Pixel position of the junction.
    pub position: Vector2,
    neighbors: [Option<NodeId>; 4],
    portal: Option<NodeId>,
    access: [Access; 4],
}

impl Node {
    fn new(position: Vector2) -> Self {
        Self {
            position,
            neighbors: [None; 4],
            portal: None,
            access: [Access::default(); 4],
        }
    }

    /// The adjacent node in `direction`, if an edge leaves this node that way.
    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        self.neighbors[direction.as_usize()]
    }

    /// The portal partner of this node. Portals are never gated.
    pub fn portal(&self) -> Option<NodeId> {
        self.portal
    }

    /// The kinds allowed to leave this node in `direction`.
    pub fn access(&self, direction: Direction) -> Access {
        self.access[direction.as_usize()]
    }

    /// Whether `kind` may leave this node in `direction` along an existing edge.
    pub fn can_traverse(&self, direction: Direction, kind: EntityKind) -> bool {
        self.neighbor(direction).is_some() && self.access(direction).permits(kind)
    }
}

/// The maze as a graph of junctions with per-direction, per-kind access gating.
///
/// Nodes are stored in a vector and addressed by [`NodeId`]; a second map resolves
/// tile coordinates to nodes. The whole graph is rebuilt on every level load.
#[derive(Debug, Default)]
pub struct MazeGraph {
    nodes: Vec<Node>,
    lookup: HashMap<TileKey, NodeId>,
    home: Option<NodeId>,
}

impl MazeGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for a symbol grid.
    ///
    /// A node is created at every node symbol. Nodes on the same row or column are
    /// connected when every cell between them is a path symbol.
    pub fn from_grid(grid: &SymbolGrid) -> Self {
        let mut graph = Self::new();
        graph.build(grid.cols(), grid.rows(), |col, row| grid.get(col, row).unwrap_or('X'), 0.0, 0.0);
        debug!(nodes = graph.nodes.len(), cols = grid.cols(), rows = grid.rows(), "Maze graph built");
        graph
    }

    fn build(&mut self, cols: usize, rows: usize, symbol: impl Fn(usize, usize) -> char, x_offset: f32, y_offset: f32) {
        for row in 0..rows {
            for col in 0..cols {
                if NODE_SYMBOLS.contains(&symbol(col, row)) {
                    self.add_node(col as f32 + x_offset, row as f32 + y_offset);
                }
            }
        }

        // Horizontal pass: link each node to the previous node on the row while the run stays passable
        for row in 0..rows {
            let mut previous = None;
            for col in 0..cols {
                let current = symbol(col, row);
                if NODE_SYMBOLS.contains(&current) {
                    let id = self.lookup[&Self::tile_key(col as f32 + x_offset, row as f32 + y_offset)];
                    if let Some(previous) = previous {
                        self.connect(previous, id, Direction::Right);
                    }
                    previous = Some(id);
                } else if !PATH_SYMBOLS.contains(&current) {
                    previous = None;
                }
            }
        }

        for col in 0..cols {
            let mut previous = None;
            for row in 0..rows {
                let current = symbol(col, row);
                if NODE_SYMBOLS.contains(&current) {
                    let id = self.lookup[&Self::tile_key(col as f32 + x_offset, row as f32 + y_offset)];
                    if let Some(previous) = previous {
                        self.connect(previous, id, Direction::Down);
                    }
                    previous = Some(id);
                } else if !PATH_SYMBOLS.contains(&current) {
                    previous = None;
                }
            }
        }
    }

    /// Adds a node at a (possibly fractional) tile coordinate, reusing an existing one.
    fn add_node(&mut self, col: f32, row: f32) -> NodeId {
        let key = Self::tile_key(col, row);
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(Vector2::new(col * TILE_WIDTH, row * TILE_HEIGHT)));
        self.lookup.insert(key, id);
        id
    }

    /// Links `from` to `to` in `direction`, and `to` back to `from` in the opposite direction.
    ///
    /// Any neighbor previously set in those slots is replaced.
    pub fn connect(&mut self, from: NodeId, to: NodeId, direction: Direction) {
        self.nodes[from].neighbors[direction.as_usize()] = Some(to);
        self.nodes[to].neighbors[direction.opposite().as_usize()] = Some(from);
    }

    /// Converts a tile coordinate to its lookup key.
    pub fn tile_key(col: f32, row: f32) -> TileKey {
        ((col * TILE_WIDTH).round() as i32, (row * TILE_HEIGHT).round() as i32)
    }

    /// Resolves a tile coordinate to a node. Returns `None` when no node lives there.
    pub fn node_at(&self, col: f32, row: f32) -> Option<NodeId> {
        self.lookup.get(&Self::tile_key(col, row)).copied()
    }

    /// Returns the node for an id handed out by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn position(&self, id: NodeId) -> Vector2 {
        self.nodes[id].position
    }

    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.nodes[id].neighbor(direction)
    }

    /// The first node created while scanning the grid; entities are parked here before placement.
    pub fn start_temp_node(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// The home pen entrance, once [`MazeGraph::create_home_nodes`] has run.
    pub fn home_node(&self) -> Option<NodeId> {
        self.home
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node with its id.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Links two nodes as portal partners. Returns `false` if either tile has no node.
    pub fn set_portal_pair(&mut self, a: (f32, f32), b: (f32, f32)) -> bool {
        match (self.node_at(a.0, a.1), self.node_at(b.0, b.1)) {
            (Some(first), Some(second)) => {
                self.nodes[first].portal = Some(second);
                self.nodes[second].portal = Some(first);
                trace!(?a, ?b, "Portal pair linked");
                true
            }
            _ => {
                warn!(?a, ?b, "Portal pair references a missing node");
                false
            }
        }
    }

    /// Builds the home pen at a tile offset and returns its entrance node.
    pub fn create_home_nodes(&mut self, x_offset: f32, y_offset: f32) -> NodeId {
        self.build(5, 5, |col, row| HOME_PEN[row][col], x_offset, y_offset);
        let entrance = self.lookup[&Self::tile_key(x_offset + 2.0, y_offset)];
        self.home = Some(entrance);
        entrance
    }

    /// Links the home entrance to the node at `other` in `direction`, and back.
    ///
    /// Returns `false` if `other` has no node.
    pub fn connect_home_nodes(&mut self, home: NodeId, other: (f32, f32), direction: Direction) -> bool {
        match self.node_at(other.0, other.1) {
            Some(other) => {
                self.connect(home, other, direction);
                true
            }
            None => {
                warn!(tile = ?other, direction = direction.as_ref(), "Home pen connection references a missing node");
                false
            }
        }
    }

    /// Forbids `kind` from leaving `node` in `direction`.
    pub fn deny_access_at(&mut self, node: NodeId, direction: Direction, kind: EntityKind) {
        self.nodes[node].access[direction.as_usize()].remove(kind.access());
    }

    /// Permits `kind` to leave `node` in `direction`.
    pub fn allow_access_at(&mut self, node: NodeId, direction: Direction, kind: EntityKind) {
        self.nodes[node].access[direction.as_usize()].insert(kind.access());
    }

    /// Tile-addressed [`MazeGraph::deny_access_at`]; missing tiles are ignored.
    pub fn deny_access(&mut self, col: f32, row: f32, direction: Direction, kind: EntityKind) {
        if let Some(node) = self.node_at(col, row) {
            self.deny_access_at(node, direction, kind);
        }
    }

    /// Tile-addressed [`MazeGraph::allow_access_at`]; missing tiles are ignored.
    pub fn allow_access(&mut self, col: f32, row: f32, direction: Direction, kind: EntityKind) {
        if let Some(node) = self.node_at(col, row) {
            self.allow_access_at(node, direction, kind);
        }
    }

    pub fn deny_access_list(&mut self, col: f32, row: f32, direction: Direction, kinds: &[EntityKind]) {
        for &kind in kinds {
            self.deny_access(col, row, direction, kind);
        }
    }

    pub fn allow_access_list(&mut self, col: f32, row: f32, direction: Direction, kinds: &[EntityKind]) {
        for &kind in kinds {
            self.allow_access(col, row, direction, kind);
        }
    }

    /// Closes the pen gate (the entrance's DOWN edge) for `kind`.
    pub fn deny_home_access(&mut self, kind: EntityKind) {
        if let Some(home) = self.home {
            self.deny_access_at(home, Direction::Down, kind);
        }
    }

    /// Opens the pen gate for `kind`.
    pub fn allow_home_access(&mut self, kind: EntityKind) {
        if let Some(home) = self.home {
            self.allow_access_at(home, Direction::Down, kind);
        }
    }

    pub fn deny_home_access_list(&mut self, kinds: &[EntityKind]) {
        for &kind in kinds {
            self.deny_home_access(kind);
        }
    }

    pub fn allow_home_access_list(&mut self, kinds: &[EntityKind]) {
        for &kind in kinds {
            self.allow_home_access(kind);
        }
    }
}
