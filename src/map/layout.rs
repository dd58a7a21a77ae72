//! Static per-level maze metadata.
//!
//! Each layout pairs an embedded maze grid with the tile coordinates the level setup
//! needs: portals, where the home pen sits and how it attaches, where the mouse starts,
//! and which junction exits are closed to cats.

use crate::entity::kind::EntityKind;
use crate::error::ParseError;
use crate::map::direction::Direction;
use crate::map::graph::{MazeGraph, NodeId};
use crate::map::parser::MazeGrids;

/// A tile coordinate; fractional values address home pen nodes.
pub type Tile = (f32, f32);

/// Cats may not leave any of `tiles` in `direction`.
#[derive(Debug, Clone, Copy)]
pub struct DenyRule {
    pub direction: Direction,
    pub tiles: &'static [Tile],
}

#[derive(Debug)]
pub struct MazeLayout {
    pub name: &'static str,
    tiles: &'static str,
    rotation: &'static str,
    pub portal_pairs: &'static [(Tile, Tile)],
    pub home_offset: Tile,
    pub home_connect_left: Tile,
    pub home_connect_right: Tile,
    pub mouse_start: Tile,
    pub cat_deny: &'static [DenyRule],
}

pub const MAZE1: MazeLayout = MazeLayout {
    name: "maze1",
    tiles: include_str!("../../assets/maze1.txt"),
    rotation: include_str!("../../assets/maze1_rotation.txt"),
    portal_pairs: &[((0.0, 17.0), (27.0, 17.0))],
    home_offset: (11.5, 14.0),
    home_connect_left: (12.0, 14.0),
    home_connect_right: (15.0, 14.0),
    mouse_start: (15.0, 26.0),
    cat_deny: &[
        DenyRule {
            direction: Direction::Up,
            tiles: &[(12.0, 14.0), (15.0, 14.0), (12.0, 26.0), (15.0, 26.0)],
        },
        // The spawn node, home offset + (2, 3)
        DenyRule {
            direction: Direction::Left,
            tiles: &[(13.5, 17.0)],
        },
        DenyRule {
            direction: Direction::Right,
            tiles: &[(13.5, 17.0)],
        },
    ],
};

pub const MAZE2: MazeLayout = MazeLayout {
    name: "maze2",
    tiles: include_str!("../../assets/maze2.txt"),
    rotation: include_str!("../../assets/maze2_rotation.txt"),
    portal_pairs: &[((0.0, 4.0), (27.0, 4.0)), ((0.0, 26.0), (27.0, 26.0))],
    home_offset: (11.5, 14.0),
    home_connect_left: (9.0, 14.0),
    home_connect_right: (18.0, 14.0),
    mouse_start: (16.0, 26.0),
    cat_deny: &[
        DenyRule {
            direction: Direction::Up,
            tiles: &[(9.0, 14.0), (18.0, 14.0), (11.0, 23.0), (16.0, 23.0)],
        },
        DenyRule {
            direction: Direction::Left,
            tiles: &[(13.5, 17.0)],
        },
        DenyRule {
            direction: Direction::Right,
            tiles: &[(13.5, 17.0)],
        },
    ],
};

/// All layouts, cycled through by level index.
pub static LAYOUTS: [MazeLayout; 2] = [MAZE1, MAZE2];

impl MazeLayout {
    /// Returns the layout for a level, wrapping around the table.
    pub fn for_level(level: u32) -> &'static MazeLayout {
        &LAYOUTS[level as usize % LAYOUTS.len()]
    }

    /// Parses the embedded tile and rotation grids.
    pub fn grids(&self) -> Result<MazeGrids, ParseError> {
        MazeGrids::parse(self.tiles, self.rotation)
    }

    /// A tile relative to the home pen's top-left corner.
    pub fn add_offset(&self, x: f32, y: f32) -> Tile {
        (self.home_offset.0 + x, self.home_offset.1 + y)
    }

    pub fn set_portal_pairs(&self, graph: &mut MazeGraph) {
        for &(a, b) in self.portal_pairs {
            graph.set_portal_pair(a, b);
        }
    }

    /// Builds the home pen and attaches its entrance to the maze on both sides.
    pub fn connect_home_nodes(&self, graph: &mut MazeGraph) -> NodeId {
        let home = graph.create_home_nodes(self.home_offset.0, self.home_offset.1);
        graph.connect_home_nodes(home, self.home_connect_left, Direction::Left);
        graph.connect_home_nodes(home, self.home_connect_right, Direction::Right);
        home
    }

    /// Closes the spawn node's side exits and applies the layout's deny table for `cats`.
    pub fn deny_cats_access(&self, graph: &mut MazeGraph, cats: &[EntityKind]) {
        let (col, row) = self.add_offset(2.0, 3.0);
        graph.deny_access_list(col, row, Direction::Left, cats);
        graph.deny_access_list(col, row, Direction::Right, cats);

        for rule in self.cat_deny {
            for &(col, row) in rule.tiles {
                graph.deny_access_list(col, row, rule.direction, cats);
            }
        }
    }
}
