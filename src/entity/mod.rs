//! Everything that lives on the maze: the mouse, the cats and the cheese.

pub mod cat;
pub mod collectible;
pub mod kind;
pub mod modes;
pub mod mouse;
pub mod mover;
