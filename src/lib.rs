//! Maze-chase game core: a mouse collects cheese while four cats patrol, pursue, flee and regroup.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod vector;
