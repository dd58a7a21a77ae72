//! Movement along the maze graph, shared by the mouse and the cats.
//!
//! A mover sits on an edge from `node` to `target` and interpolates its position toward
//! the target. When it reaches or passes the target it re-plans: it arrives at the target,
//! follows a portal if the way ahead is a dead end, picks a new direction and carries the
//! leftover distance onto the new edge.

use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{speed, TILE_WIDTH};
use crate::entity::kind::EntityKind;
use crate::map::direction::Direction;
use crate::map::graph::{MazeGraph, NodeId};
use crate::vector::Vector2;

/// How a mover picks its next direction at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// Head for the neighbor closest to `goal`.
    Goal,
    /// Pick uniformly among the allowed directions.
    Random,
}

/// Candidate directions at a junction; never more than four.
pub type Directions = SmallVec<[Direction; 4]>;

#[derive(Debug, Clone)]
pub struct Mover {
    pub kind: EntityKind,
    pub node: NodeId,
    pub target: NodeId,
    pub start_node: NodeId,
    pub position: Vector2,
    /// `None` while stopped.
    pub direction: Option<Direction>,
    /// Pixels per second.
    pub speed: f32,
    pub visible: bool,
    pub collide_radius: f32,
    pub goal: Vector2,
    pub policy: DirectionPolicy,
}

impl Mover {
    pub fn new(kind: EntityKind, node: NodeId, graph: &MazeGraph, collide_radius: f32) -> Self {
        let mut mover = Self {
            kind,
            node,
            target: node,
            start_node: node,
            position: graph.position(node),
            direction: None,
            speed: 0.0,
            visible: true,
            collide_radius,
            goal: Vector2::ZERO,
            policy: DirectionPolicy::Goal,
        };
        mover.set_speed(speed::NORMAL);
        mover
    }

    /// Makes `node` the start node and parks the mover on it.
    pub fn set_start_node(&mut self, node: NodeId, graph: &MazeGraph) {
        self.node = node;
        self.start_node = node;
        self.target = node;
        self.set_position(graph);
    }

    /// Snaps the position onto the current node.
    pub fn set_position(&mut self, graph: &MazeGraph) {
        self.position = graph.position(self.node);
    }

    /// Sets the speed from a base value, scaled to the tile size.
    pub fn set_speed(&mut self, base: f32) {
        self.speed = base * TILE_WIDTH / 16.0;
    }

    /// Whether the mover may leave its current node in `direction`.
    pub fn valid_direction(&self, graph: &MazeGraph, direction: Option<Direction>) -> bool {
        direction.is_some_and(|direction| graph.node(self.node).can_traverse(direction, self.kind))
    }

    /// The neighbor in `direction` if that move is valid, otherwise the current node.
    pub fn new_target(&self, graph: &MazeGraph, direction: Option<Direction>) -> NodeId {
        match direction {
            Some(d) if self.valid_direction(graph, direction) => graph.neighbor(self.node, d).unwrap_or(self.node),
            _ => self.node,
        }
    }

    /// True once the mover is at least as far from `node` as `target` is.
    pub fn overshot_target(&self, graph: &MazeGraph) -> bool {
        let origin = graph.position(self.node);
        let edge = graph.position(self.target) - origin;
        let travelled = self.position - origin;
        travelled.magnitude_squared() >= edge.magnitude_squared()
    }

    /// Turns around on the current edge.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.map(Direction::opposite);
        std::mem::swap(&mut self.node, &mut self.target);
    }

    /// Whether `direction` is the reverse of the current heading.
    pub fn is_opposite(&self, direction: Option<Direction>) -> bool {
        matches!((self.direction, direction), (Some(current), Some(d)) if d == current.opposite())
    }

    /// Allowed directions out of the current node, excluding a U-turn unless nothing else is possible.
    pub fn valid_directions(&self, graph: &MazeGraph) -> Directions {
        let mut directions: Directions = Direction::DIRECTIONS
            .into_iter()
            .filter(|&d| self.valid_direction(graph, Some(d)) && !self.is_opposite(Some(d)))
            .collect();

        if directions.is_empty() {
            if let Some(back) = self.direction.map(Direction::opposite) {
                if self.valid_direction(graph, Some(back)) {
                    directions.push(back);
                }
            }
        }

        directions
    }

    /// The candidate whose neighbor lies closest to the goal; ties keep priority order.
    pub fn goal_direction(&self, graph: &MazeGraph, candidates: &[Direction]) -> Option<Direction> {
        candidates
            .iter()
            .filter_map(|&d| graph.neighbor(self.node, d).map(|n| (d, graph.position(n).distance_squared(self.goal))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(d, _)| d)
    }

    pub fn random_direction<R: Rng + ?Sized>(candidates: &[Direction], rng: &mut R) -> Option<Direction> {
        candidates.choose(rng).copied()
    }

    pub fn choose_direction<R: Rng + ?Sized>(&self, graph: &MazeGraph, candidates: &[Direction], rng: &mut R) -> Option<Direction> {
        match self.policy {
            DirectionPolicy::Goal => self.goal_direction(graph, candidates),
            DirectionPolicy::Random => Self::random_direction(candidates, rng),
        }
    }

    /// Moves along the current heading by `speed * dt`.
    pub fn step(&mut self, dt: f32) {
        if let Some(direction) = self.direction {
            self.position += direction.as_vector() * (self.speed * dt);
        }
    }

    /// Arrives at the target node and returns the distance travelled past it.
    ///
    /// Teleports through a portal when the current heading has nowhere else to go.
    pub fn arrive(&mut self, graph: &MazeGraph) -> f32 {
        let overshoot = (self.position - graph.position(self.target)).magnitude();
        self.node = self.target;

        let node = graph.node(self.node);
        if let (Some(portal), Some(direction)) = (node.portal(), self.direction) {
            if node.neighbor(direction).is_none() {
                self.node = portal;
            }
        }

        self.target = self.node;
        self.set_position(graph);
        overshoot
    }

    /// Places the mover `distance` pixels along its new edge, never past the target.
    pub fn carry(&mut self, graph: &MazeGraph, distance: f32) {
        self.set_position(graph);
        if let (Some(direction), true) = (self.direction, self.target != self.node) {
            let edge = graph.position(self.node).distance_squared(graph.position(self.target)).sqrt();
            self.position += direction.as_vector() * distance.min(edge);
        }
    }

    /// Advances one tick using the mover's direction policy.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, graph: &MazeGraph, rng: &mut R) {
        self.step(dt);
        if !self.overshot_target(graph) {
            return;
        }

        let overshoot = self.arrive(graph);
        let candidates = self.valid_directions(graph);
        let chosen = self.choose_direction(graph, &candidates, rng);

        let target = self.new_target(graph, chosen);
        if target != self.node {
            self.direction = chosen;
            self.target = target;
        } else {
            self.target = self.new_target(graph, self.direction);
        }

        self.carry(graph, overshoot);
    }

    /// Circle overlap test without a square root.
    pub fn collides_with(&self, position: Vector2, radius: f32) -> bool {
        let reach = self.collide_radius + radius;
        self.position.distance_squared(position) <= reach * reach
    }

    /// Back to the start node, stopped, at normal speed and visible.
    pub fn reset(&mut self, graph: &MazeGraph) {
        self.set_start_node(self.start_node, graph);
        self.direction = None;
        self.set_speed(speed::NORMAL);
        self.visible = true;
    }
}
