use crate::constants::{points, radius, timing, TILE_HEIGHT, TILE_WIDTH};
use crate::map::parser::SymbolGrid;
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Normal,
    Power,
}

impl CollectibleKind {
    /// The kind of collectible a grid symbol places, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '+' => Some(CollectibleKind::Normal),
            'P' | 'p' => Some(CollectibleKind::Power),
            _ => None,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            CollectibleKind::Normal => points::CHEESE,
            CollectibleKind::Power => points::POWER_CHEESE,
        }
    }
}

/// A piece of cheese waiting to be eaten.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub col: usize,
    pub row: usize,
    pub position: Vector2,
    pub points: u32,
    pub visible: bool,
    pub collide_radius: f32,
    flash_timer: f32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, col: usize, row: usize) -> Self {
        Self {
            kind,
            col,
            row,
            position: Vector2::new(col as f32 * TILE_WIDTH, row as f32 * TILE_HEIGHT),
            points: kind.points(),
            visible: true,
            collide_radius: radius::CHEESE,
            flash_timer: 0.0,
        }
    }

    /// Power cheese blinks; normal cheese does nothing.
    pub fn update(&mut self, dt: f32) {
        if self.kind != CollectibleKind::Power {
            return;
        }
        self.flash_timer += dt;
        if self.flash_timer >= timing::POWER_FLASH {
            self.visible = !self.visible;
            self.flash_timer = 0.0;
        }
    }
}

/// Every collectible still on the board, in grid scan order.
#[derive(Debug, Clone, Default)]
pub struct CollectibleGroup {
    items: Vec<Collectible>,
    pub num_collected: u32,
}

impl CollectibleGroup {
    pub fn from_grid(grid: &SymbolGrid) -> Self {
        let items = grid
            .cells()
            .filter_map(|(col, row, symbol)| CollectibleKind::from_symbol(symbol).map(|kind| Collectible::new(kind, col, row)))
            .collect();
        Self { items, num_collected: 0 }
    }

    pub fn update(&mut self, dt: f32) {
        for item in &mut self.items {
            item.update(dt);
        }
    }

    /// Takes a collectible off the board and counts it.
    pub fn collect(&mut self, index: usize) -> Option<Collectible> {
        if index >= self.items.len() {
            return None;
        }
        self.num_collected += 1;
        Some(self.items.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    pub fn power_cheeses(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter().filter(|item| item.kind == CollectibleKind::Power)
    }
}
