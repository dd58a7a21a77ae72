use tracing::debug;

use crate::constants::radius;
use crate::entity::cat::Cat;
use crate::entity::collectible::CollectibleGroup;
use crate::entity::kind::EntityKind;
use crate::entity::mover::Mover;
use crate::map::direction::Direction;
use crate::map::graph::{MazeGraph, NodeId};
use crate::vector::Vector2;

/// The player character.
#[derive(Debug, Clone)]
pub struct Mouse {
    pub mover: Mover,
    pub alive: bool,
}

impl Mouse {
    /// Creates the mouse on `node`, facing left.
    pub fn new(node: NodeId, graph: &MazeGraph) -> Self {
        let mut mover = Mover::new(EntityKind::Mouse, node, graph, radius::MOUSE);
        mover.direction = Some(Direction::Left);
        Self { mover, alive: true }
    }

    pub fn position(&self) -> Vector2 {
        self.mover.position
    }

    /// Advances one tick, steering by the held direction keys (most recent first).
    ///
    /// At a junction the first held key that leads somewhere wins; otherwise the mouse keeps
    /// its heading, or stops if that is blocked too. Between junctions a held key opposite
    /// to the heading turns the mouse around immediately.
    pub fn update(&mut self, dt: f32, graph: &MazeGraph, held: &[Direction]) {
        let mover = &mut self.mover;
        mover.step(dt);

        if mover.overshot_target(graph) {
            let overshoot = mover.arrive(graph);

            let requested = held.iter().copied().find(|&d| mover.valid_direction(graph, Some(d)));
            let target = mover.new_target(graph, requested);
            if target != mover.node {
                mover.direction = requested;
                mover.target = target;
            } else {
                mover.target = mover.new_target(graph, mover.direction);
                if mover.target == mover.node {
                    mover.direction = None;
                }
            }

            mover.carry(graph, overshoot);
        } else if mover.is_opposite(held.first().copied()) {
            mover.reverse_direction();
        }
    }

    /// Returns the index of the first collectible the mouse overlaps.
    pub fn eat_cheese(&self, collectibles: &CollectibleGroup) -> Option<usize> {
        collectibles
            .iter()
            .position(|item| self.mover.collides_with(item.position, item.collide_radius))
    }

    pub fn collide_cat(&self, cat: &Cat) -> bool {
        self.mover.collides_with(cat.mover.position, cat.mover.collide_radius)
    }

    pub fn die(&mut self) {
        debug!(position = %self.mover.position, "Mouse died");
        self.alive = false;
        self.mover.direction = None;
    }

    /// Back to the start node, facing left, alive and visible.
    pub fn reset(&mut self, graph: &MazeGraph) {
        self.mover.reset(graph);
        self.mover.direction = Some(Direction::Left);
        self.alive = true;
    }
}
