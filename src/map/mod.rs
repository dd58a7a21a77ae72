//! The maze: symbol grids, the junction graph built from them, and per-level layouts.

pub mod direction;
pub mod graph;
pub mod layout;
pub mod parser;
