use rand::Rng;
use tracing::debug;

use crate::constants::{points, radius, speed};
use crate::entity::kind::EntityKind;
use crate::entity::modes::{Mode, ModeController};
use crate::entity::mover::{DirectionPolicy, Mover};
use crate::map::graph::{MazeGraph, NodeId};
use crate::vector::Vector2;

/// A pursuing adversary.
#[derive(Debug, Clone)]
pub struct Cat {
    pub mover: Mover,
    pub mode: ModeController,
    /// Points awarded for eating this cat right now.
    pub points: u32,
    pub spawn_node: NodeId,
}

impl Cat {
    pub fn new(kind: EntityKind, node: NodeId, graph: &MazeGraph) -> Self {
        Self {
            mover: Mover::new(kind, node, graph, radius::CAT),
            mode: ModeController::new(),
            points: points::CAT_BASE,
            spawn_node: node,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.mover.kind
    }

    pub fn position(&self) -> Vector2 {
        self.mover.position
    }

    /// Advances the mode timers, refreshes the goal and moves one tick.
    ///
    /// Takes the graph mutably because returning to normal closes the pen gate again.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, graph: &mut MazeGraph, mouse: Vector2, rng: &mut R) {
        if self.mode.update(dt, self.mover.node == self.spawn_node) {
            self.normal_mode(graph);
        }

        match self.mode.current {
            Mode::Scatter => self.mover.goal = Vector2::ZERO,
            Mode::Chase => self.mover.goal = mouse,
            Mode::Frightened | Mode::Respawn => {}
        }

        self.mover.advance(dt, graph, rng);
    }

    /// Enters (or extends) the frightened window: slow, aimless, and turned around.
    pub fn start_frightened(&mut self) {
        let was_frightened = self.mode.current == Mode::Frightened;
        self.mode.set_frightened_mode();
        if self.mode.current == Mode::Frightened {
            self.mover.set_speed(speed::FRIGHTENED);
            self.mover.policy = DirectionPolicy::Random;
            if !was_frightened {
                self.mover.reverse_direction();
            }
        }
    }

    /// Sends an eaten cat racing back to its spawn node.
    pub fn start_respawn(&mut self, graph: &MazeGraph) {
        self.mode.set_respawn_mode();
        if self.mode.current == Mode::Respawn {
            self.mover.set_speed(speed::RESPAWN);
            self.mover.policy = DirectionPolicy::Goal;
            self.mover.goal = graph.position(self.spawn_node);
            self.mover.reverse_direction();
            debug!(cat = self.kind().as_ref(), "Cat respawning");
        }
    }

    /// Back to normal speed and goal seeking, with the pen gate closed behind it.
    pub fn normal_mode(&mut self, graph: &mut MazeGraph) {
        self.mover.set_speed(speed::NORMAL);
        self.mover.policy = DirectionPolicy::Goal;
        graph.deny_home_access(self.kind());
    }

    pub fn set_spawn_node(&mut self, node: NodeId) {
        self.spawn_node = node;
    }

    pub fn reset(&mut self, graph: &MazeGraph) {
        self.mover.reset(graph);
        self.mode = ModeController::new();
        self.points = points::CAT_BASE;
        self.mover.policy = DirectionPolicy::Goal;
    }
}

/// The four cats, operated on as a unit.
#[derive(Debug, Clone)]
pub struct CatGroup {
    cats: [Cat; 4],
}

impl CatGroup {
    /// Creates all four cats parked on `node`.
    pub fn new(node: NodeId, graph: &MazeGraph) -> Self {
        Self {
            cats: EntityKind::CATS.map(|kind| Cat::new(kind, node, graph)),
        }
    }

    pub fn get(&self, kind: EntityKind) -> Option<&Cat> {
        self.cats.iter().find(|cat| cat.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: EntityKind) -> Option<&mut Cat> {
        self.cats.iter_mut().find(|cat| cat.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cat> {
        self.cats.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cat> {
        self.cats.iter_mut()
    }

    pub fn kinds(&self) -> [EntityKind; 4] {
        EntityKind::CATS
    }

    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, graph: &mut MazeGraph, mouse: Vector2, rng: &mut R) {
        for cat in &mut self.cats {
            cat.update(dt, graph, mouse, rng);
        }
    }

    /// Frightens every cat and restarts the combo at the base value.
    pub fn start_frightened(&mut self) {
        for cat in &mut self.cats {
            cat.start_frightened();
        }
        self.reset_points();
    }

    pub fn set_spawn_node(&mut self, node: NodeId) {
        for cat in &mut self.cats {
            cat.set_spawn_node(node);
        }
    }

    /// Doubles every cat's value after one is eaten.
    pub fn update_points(&mut self) {
        for cat in &mut self.cats {
            cat.points *= 2;
        }
    }

    pub fn reset_points(&mut self) {
        for cat in &mut self.cats {
            cat.points = points::CAT_BASE;
        }
    }

    pub fn hide(&mut self) {
        for cat in &mut self.cats {
            cat.mover.visible = false;
        }
    }

    pub fn show(&mut self) {
        for cat in &mut self.cats {
            cat.mover.visible = true;
        }
    }

    pub fn reset(&mut self, graph: &MazeGraph) {
        for cat in &mut self.cats {
            cat.reset(graph);
        }
    }
}
