//! The heads-up display as seen from the game logic.
//!
//! Drawing is someone else's job; the game only tells the HUD what changed.
//! [`TextGroup`] is the in-memory model a renderer (or a test) reads from.

use strum_macros::AsRefStr;
use thousands::Separable;
use tracing::trace;

use crate::constants::Color;
use crate::vector::Vector2;

/// The status texts, of which at most one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum TextId {
    Ready,
    Paused,
    GameOver,
}

impl TextId {
    pub fn text(self) -> &'static str {
        match self {
            TextId::Ready => "READY!",
            TextId::Paused => "PAUSED!",
            TextId::GameOver => "GAMEOVER!",
        }
    }
}

/// A free-floating text, such as the points for an eaten cat.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub value: String,
    pub color: Color,
    pub position: Vector2,
    pub size: u32,
    /// Seconds until the label disappears; `None` keeps it forever.
    pub ttl: Option<f32>,
}

/// Everything the game logic tells the HUD.
pub trait Hud {
    /// Ages transient labels.
    fn update(&mut self, _dt: f32) {}
    fn update_score(&mut self, score: u32);
    fn update_level(&mut self, level: u32);
    fn show_text(&mut self, id: TextId);
    fn hide_text(&mut self);
    /// Adds a floating label and returns its id.
    fn add_text(&mut self, label: Label) -> usize;
    /// Drops one life icon.
    fn remove_life_icon(&mut self);
    /// Shows `lives` life icons.
    fn reset_lives(&mut self, lives: u32);
}

/// In-memory HUD state.
#[derive(Debug, Default)]
pub struct TextGroup {
    pub score: u32,
    pub level: u32,
    pub status: Option<TextId>,
    pub life_icons: u32,
    labels: Vec<(usize, Label)>,
    next_id: usize,
}

impl TextGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// The score as shown on screen, with thousands separators.
    pub fn score_text(&self) -> String {
        self.score.separate_with_commas()
    }

    /// The level as shown on screen; levels are counted from one.
    pub fn level_text(&self) -> String {
        (self.level + 1).to_string()
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().map(|(_, label)| label)
    }

    pub fn remove_text(&mut self, id: usize) {
        self.labels.retain(|(label_id, _)| *label_id != id);
    }
}

impl Hud for TextGroup {
    fn update(&mut self, dt: f32) {
        for (_, label) in &mut self.labels {
            if let Some(ttl) = &mut label.ttl {
                *ttl -= dt;
            }
        }
        self.labels.retain(|(_, label)| label.ttl.is_none_or(|ttl| ttl > 0.0));
    }

    fn update_score(&mut self, score: u32) {
        self.score = score;
    }

    fn update_level(&mut self, level: u32) {
        self.level = level;
    }

    fn show_text(&mut self, id: TextId) {
        trace!(text = id.as_ref(), "Showing status text");
        self.status = Some(id);
    }

    fn hide_text(&mut self) {
        self.status = None;
    }

    fn add_text(&mut self, label: Label) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.labels.push((id, label));
        id
    }

    fn remove_life_icon(&mut self) {
        self.life_icons = self.life_icons.saturating_sub(1);
    }

    fn reset_lives(&mut self, lives: u32) {
        self.life_icons = lives;
    }
}
