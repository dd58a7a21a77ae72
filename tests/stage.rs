use cheese_chase::entity::kind::EntityKind;
use cheese_chase::game::stage::{BackgroundFlash, Stage};
use cheese_chase::map::direction::Direction;
use cheese_chase::vector::Vector2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn permits(stage: &Stage, tile: (f32, f32), direction: Direction, kind: EntityKind) -> bool {
    let node = stage.graph.node_at(tile.0, tile.1).unwrap();
    stage.graph.node(node).access(direction).permits(kind)
}

#[test]
fn test_load_level_zero() {
    let stage = Stage::load(0).unwrap();

    assert_eq!(stage.layout.name, "maze1");
    assert_eq!(stage.mouse.position(), Vector2::new(240.0, 416.0));
    assert_eq!(stage.collectibles.len(), 246);
    assert_eq!(stage.collectibles.power_cheeses().count(), 4);
    assert_that(&stage.flash.active).is_false();
}

#[test]
fn test_load_level_one() {
    let stage = Stage::load(1).unwrap();

    assert_eq!(stage.layout.name, "maze2");
    assert_eq!(stage.mouse.position(), Vector2::new(256.0, 416.0));
    assert_eq!(stage.collectibles.len(), 256);
}

#[test]
fn test_cats_placed_around_pen() {
    let stage = Stage::load(0).unwrap();
    let expected = [
        (EntityKind::Cat1, (13.5, 14.0)),
        (EntityKind::Cat2, (13.5, 17.0)),
        (EntityKind::Cat3, (11.5, 17.0)),
        (EntityKind::Cat4, (15.5, 17.0)),
    ];
    let spawn = stage.graph.node_at(13.5, 17.0).unwrap();

    for (kind, (col, row)) in expected {
        let cat = stage.cats.get(kind).unwrap();
        assert_eq!(Some(cat.mover.node), stage.graph.node_at(col, row), "{}", kind.as_ref());
        assert_eq!(cat.mover.start_node, cat.mover.node);
        assert_eq!(cat.spawn_node, spawn);
    }
    assert_eq!(stage.cats.get(EntityKind::Cat1).map(|cat| cat.mover.node), stage.graph.home_node());
}

#[test]
fn test_pen_gates_closed() {
    let stage = Stage::load(0).unwrap();
    let entrance = (13.5, 14.0);

    assert_that(&permits(&stage, entrance, Direction::Down, EntityKind::Mouse)).is_false();
    for kind in EntityKind::CATS {
        assert_that(&permits(&stage, entrance, Direction::Down, kind)).is_false();
        assert_that(&permits(&stage, (13.5, 17.0), Direction::Left, kind)).is_false();
        assert_that(&permits(&stage, (13.5, 17.0), Direction::Right, kind)).is_false();
        assert_that(&permits(&stage, (12.0, 14.0), Direction::Up, kind)).is_false();
    }

    assert_that(&permits(&stage, (11.5, 17.0), Direction::Right, EntityKind::Cat3)).is_false();
    assert_that(&permits(&stage, (11.5, 17.0), Direction::Right, EntityKind::Cat1)).is_true();
    assert_that(&permits(&stage, (15.5, 17.0), Direction::Left, EntityKind::Cat4)).is_false();
    assert_that(&permits(&stage, (15.5, 17.0), Direction::Left, EntityKind::Cat2)).is_true();
}

#[test]
fn test_hide_and_show_entities() {
    let mut stage = Stage::load(0).unwrap();

    stage.hide_entities();
    assert_that(&stage.mouse.mover.visible).is_false();
    assert_that(&stage.cats.iter().any(|cat| cat.mover.visible)).is_false();

    stage.show_entities();
    assert_that(&stage.mouse.mover.visible).is_true();
    assert_that(&stage.cats.iter().all(|cat| cat.mover.visible)).is_true();
}

#[test]
fn test_reset_entities_keeps_board() {
    let mut stage = Stage::load(0).unwrap();
    let start = stage.mouse.position();
    stage.collectibles.collect(0);
    stage.mouse.mover.position = Vector2::new(1.0, 1.0);
    stage.mouse.die();
    stage.graph.allow_home_access(EntityKind::Cat2);

    stage.reset_entities();

    assert_that(&stage.mouse.alive).is_true();
    assert_eq!(stage.mouse.position(), start);
    assert_eq!(stage.collectibles.len(), 245);
    assert_that(&permits(&stage, (13.5, 14.0), Direction::Down, EntityKind::Cat2)).is_false();
}

#[test]
fn test_background_flash_toggles() {
    let mut flash = BackgroundFlash::default();
    flash.update(1.0);
    assert_that(&flash.flashed).is_false();

    flash.start();
    flash.update(0.125);
    assert_that(&flash.flashed).is_false();
    flash.update(0.125);
    assert_that(&flash.flashed).is_true();
    flash.update(0.25);
    assert_that(&flash.flashed).is_false();
}
