use cheese_chase::entity::cat::{Cat, CatGroup};
use cheese_chase::entity::kind::EntityKind;
use cheese_chase::entity::modes::Mode;
use cheese_chase::entity::mover::DirectionPolicy;
use cheese_chase::map::direction::Direction;
use cheese_chase::map::graph::{MazeGraph, NodeId};
use cheese_chase::vector::Vector2;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

mod common;

use common::node;

/// A bare home pen; its spawn node sits at (2, 3).
fn pen() -> (MazeGraph, NodeId) {
    let mut graph = MazeGraph::new();
    graph.create_home_nodes(0.0, 0.0);
    let spawn = node(&graph, 2.0, 3.0);
    (graph, spawn)
}

fn can_enter_pen(graph: &MazeGraph, kind: EntityKind) -> bool {
    let home = graph.home_node().unwrap();
    graph.node(home).access(Direction::Down).permits(kind)
}

#[test]
fn test_new_cat() {
    let (graph, spawn) = pen();
    let cat = Cat::new(EntityKind::Cat2, spawn, &graph);

    assert_eq!(cat.kind(), EntityKind::Cat2);
    assert_eq!(cat.points, 200);
    assert_eq!(cat.mode.current, Mode::Scatter);
    assert_eq!(cat.mover.speed, 100.0);
    assert_eq!(cat.position(), Vector2::new(32.0, 48.0));
}

#[test]
fn test_frightened_slows_and_reverses_once() {
    let (graph, spawn) = pen();
    let right = node(&graph, 4.0, 3.0);
    let mut cat = Cat::new(EntityKind::Cat1, spawn, &graph);
    cat.mover.direction = Some(Direction::Right);
    cat.mover.target = right;

    cat.start_frightened();
    assert_eq!(cat.mode.current, Mode::Frightened);
    assert_eq!(cat.mover.speed, 50.0);
    assert_eq!(cat.mover.policy, DirectionPolicy::Random);
    assert_eq!(cat.mover.direction, Some(Direction::Left));
    assert_eq!(cat.mover.node, right);
    assert_eq!(cat.mover.target, spawn);

    cat.start_frightened();
    assert_eq!(cat.mover.direction, Some(Direction::Left));
    assert_eq!(cat.mover.node, right);
}

#[test]
fn test_respawn_requires_frightened() {
    let (graph, spawn) = pen();
    let mut cat = Cat::new(EntityKind::Cat1, spawn, &graph);

    cat.start_respawn(&graph);
    assert_eq!(cat.mode.current, Mode::Scatter);
    assert_eq!(cat.mover.speed, 100.0);

    cat.start_frightened();
    cat.start_respawn(&graph);
    assert_eq!(cat.mode.current, Mode::Respawn);
    assert_eq!(cat.mover.speed, 150.0);
    assert_eq!(cat.mover.policy, DirectionPolicy::Goal);
    assert_eq!(cat.mover.goal, graph.position(spawn));
}

#[test]
fn test_normal_mode_closes_pen() {
    let (mut graph, spawn) = pen();
    let mut cat = Cat::new(EntityKind::Cat3, spawn, &graph);
    cat.start_frightened();
    graph.allow_home_access(EntityKind::Cat3);

    cat.normal_mode(&mut graph);

    assert_that(&can_enter_pen(&graph, EntityKind::Cat3)).is_false();
    assert_eq!(cat.mover.speed, 100.0);
    assert_eq!(cat.mover.policy, DirectionPolicy::Goal);
}

#[test]
fn test_respawn_completes_on_spawn_node() {
    let (mut graph, spawn) = pen();
    let mut cat = Cat::new(EntityKind::Cat1, spawn, &graph);
    cat.set_spawn_node(spawn);
    cat.start_frightened();
    cat.start_respawn(&graph);
    graph.allow_home_access(EntityKind::Cat1);

    cat.update(0.01, &mut graph, Vector2::ZERO, &mut SmallRng::seed_from_u64(1));

    assert_eq!(cat.mode.current, Mode::Scatter);
    assert_eq!(cat.mover.speed, 100.0);
    assert_that(&can_enter_pen(&graph, EntityKind::Cat1)).is_false();
}

#[test]
fn test_goal_tracks_mode() {
    let (mut graph, spawn) = pen();
    let mut rng = SmallRng::seed_from_u64(1);
    let mouse = Vector2::new(5.0, 5.0);
    let mut cat = Cat::new(EntityKind::Cat1, spawn, &graph);
    cat.mover.goal = Vector2::new(9.0, 9.0);

    cat.update(0.01, &mut graph, mouse, &mut rng);
    assert_eq!(cat.mode.current, Mode::Scatter);
    assert_eq!(cat.mover.goal, Vector2::ZERO);

    cat.update(7.0, &mut graph, mouse, &mut rng);
    assert_eq!(cat.mode.current, Mode::Chase);
    assert_eq!(cat.mover.goal, mouse);
}

#[test]
fn test_frightened_goal_untouched() {
    let (mut graph, spawn) = pen();
    let mut cat = Cat::new(EntityKind::Cat1, spawn, &graph);
    cat.mover.goal = Vector2::new(9.0, 9.0);
    cat.start_frightened();

    cat.update(0.01, &mut graph, Vector2::new(5.0, 5.0), &mut SmallRng::seed_from_u64(1));
    assert_eq!(cat.mover.goal, Vector2::new(9.0, 9.0));
}

#[test]
fn test_group_kinds_in_order() {
    let (graph, spawn) = pen();
    let cats = CatGroup::new(spawn, &graph);

    let kinds: Vec<_> = cats.iter().map(Cat::kind).collect();
    assert_eq!(kinds, EntityKind::CATS.to_vec());
    assert_eq!(cats.kinds(), EntityKind::CATS);
    assert_that(&cats.get(EntityKind::Mouse)).is_none();
}

#[test]
fn test_group_points_combo() {
    let (graph, spawn) = pen();
    let mut cats = CatGroup::new(spawn, &graph);

    cats.update_points();
    cats.update_points();
    assert_that(&cats.iter().all(|cat| cat.points == 800)).is_true();

    cats.start_frightened();
    assert_that(&cats.iter().all(|cat| cat.points == 200)).is_true();
    assert_that(&cats.iter().all(|cat| cat.mode.current == Mode::Frightened)).is_true();

    cats.update_points();
    cats.reset_points();
    assert_that(&cats.iter().all(|cat| cat.points == 200)).is_true();
}

#[test]
fn test_group_visibility() {
    let (graph, spawn) = pen();
    let mut cats = CatGroup::new(spawn, &graph);

    cats.hide();
    assert_that(&cats.iter().any(|cat| cat.mover.visible)).is_false();
    cats.show();
    assert_that(&cats.iter().all(|cat| cat.mover.visible)).is_true();
}

#[test]
fn test_group_reset() {
    let (mut graph, spawn) = pen();
    let mut cats = CatGroup::new(spawn, &graph);
    let mut rng = SmallRng::seed_from_u64(3);
    cats.start_frightened();
    cats.update_points();
    cats.update(0.2, &mut graph, Vector2::ZERO, &mut rng);
    cats.hide();

    cats.reset(&graph);

    for cat in cats.iter() {
        assert_eq!(cat.mode.current, Mode::Scatter);
        assert_eq!(cat.points, 200);
        assert_eq!(cat.mover.node, spawn);
        assert_eq!(cat.mover.direction, None);
        assert_eq!(cat.mover.speed, 100.0);
        assert_eq!(cat.mover.policy, DirectionPolicy::Goal);
        assert_that(&cat.mover.visible).is_true();
    }
}
