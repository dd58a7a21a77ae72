use cheese_chase::entity::kind::EntityKind;
use cheese_chase::map::direction::Direction;
use cheese_chase::map::graph::MazeGraph;
use cheese_chase::map::layout::{MazeLayout, LAYOUTS};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn build(layout: &MazeLayout) -> MazeGraph {
    let grids = layout.grids().unwrap();
    let mut graph = MazeGraph::from_grid(&grids.tiles);
    layout.set_portal_pairs(&mut graph);
    layout.connect_home_nodes(&mut graph);
    graph
}

#[test]
fn test_layout_for_level_cycles() {
    assert_eq!(MazeLayout::for_level(0).name, "maze1");
    assert_eq!(MazeLayout::for_level(1).name, "maze2");
    assert_eq!(MazeLayout::for_level(2).name, "maze1");
    assert_eq!(MazeLayout::for_level(7).name, "maze2");
}

#[test]
fn test_grids_parse() {
    for layout in &LAYOUTS {
        let grids = layout.grids().unwrap();
        assert_eq!(grids.tiles.cols(), 28, "{}", layout.name);
        assert_eq!(grids.tiles.rows(), 36, "{}", layout.name);
        assert_eq!(grids.rotation.len(), 36, "{}", layout.name);
        assert_that(&grids.rotation.iter().all(|row| row.len() == 28)).is_true();
    }
}

#[test]
fn test_registry_tiles_resolve() {
    for layout in &LAYOUTS {
        let graph = build(layout);
        let mut tiles = vec![layout.mouse_start, layout.home_connect_left, layout.home_connect_right];
        tiles.extend(layout.portal_pairs.iter().flat_map(|&(a, b)| [a, b]));
        tiles.extend(layout.cat_deny.iter().flat_map(|rule| rule.tiles.iter().copied()));
        for (x, y) in [(2.0, 0.0), (2.0, 3.0), (0.0, 3.0), (4.0, 3.0)] {
            tiles.push(layout.add_offset(x, y));
        }

        for (col, row) in tiles {
            assert_that(&graph.node_at(col, row))
                .named(&format!("{} ({col}, {row})", layout.name))
                .is_some();
        }
    }
}

#[test]
fn test_portals_linked() {
    for layout in &LAYOUTS {
        let graph = build(layout);
        for &((ac, ar), (bc, br)) in layout.portal_pairs {
            let a = graph.node_at(ac, ar).unwrap();
            let b = graph.node_at(bc, br).unwrap();
            assert_eq!(graph.node(a).portal(), Some(b));
            assert_eq!(graph.node(b).portal(), Some(a));
        }
    }
}

#[test]
fn test_home_connected_both_ways() {
    for layout in &LAYOUTS {
        let graph = build(layout);
        let home = graph.home_node().unwrap();
        let left = graph.node_at(layout.home_connect_left.0, layout.home_connect_left.1);
        let right = graph.node_at(layout.home_connect_right.0, layout.home_connect_right.1);

        assert_eq!(graph.neighbor(home, Direction::Left), left);
        assert_eq!(graph.neighbor(home, Direction::Right), right);
        assert_eq!(left.and_then(|left| graph.neighbor(left, Direction::Right)), Some(home));
        assert_eq!(right.and_then(|right| graph.neighbor(right, Direction::Left)), Some(home));
    }
}

#[test]
fn test_deny_cats_access() {
    let layout = MazeLayout::for_level(0);
    let mut graph = build(layout);
    layout.deny_cats_access(&mut graph, &EntityKind::CATS);

    let spawn = graph.node_at(13.5, 17.0).unwrap();
    for kind in EntityKind::CATS {
        assert_that(&graph.node(spawn).can_traverse(Direction::Left, kind)).is_false();
        assert_that(&graph.node(spawn).can_traverse(Direction::Right, kind)).is_false();
    }
    assert_that(&graph.node(spawn).can_traverse(Direction::Up, EntityKind::Cat1)).is_true();

    let junction = graph.node_at(12.0, 26.0).unwrap();
    assert_that(&graph.node(junction).can_traverse(Direction::Up, EntityKind::Cat2)).is_false();
    assert_that(&graph.node(junction).can_traverse(Direction::Up, EntityKind::Mouse)).is_true();
}
