//! Per-frame game rules: eating cheese, meeting cats, and the pause key.

use std::ops::ControlFlow;

use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, trace};

use crate::constants::{timing, CAT3_RELEASE_THRESHOLD, CAT4_RELEASE_THRESHOLD, RED};
use crate::entity::collectible::CollectibleKind;
use crate::entity::kind::EntityKind;
use crate::entity::modes::Mode;
use crate::game::hud::{Hud, Label, TextId};
use crate::game::level::{LevelManager, Transition};
use crate::game::pause::Pause;
use crate::game::stage::Stage;
use crate::input::commands::GameCommand;
use crate::input::{Bindings, InputEvent};
use crate::map::direction::Direction;

/// Opens `direction` at `cat`'s start node once exactly `threshold` collectibles are eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlock {
    pub threshold: u32,
    pub cat: EntityKind,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct EventResolver {
    unlocks: SmallVec<[Unlock; 2]>,
}

impl Default for EventResolver {
    fn default() -> Self {
        Self {
            unlocks: smallvec![
                Unlock {
                    threshold: CAT3_RELEASE_THRESHOLD,
                    cat: EntityKind::Cat3,
                    direction: Direction::Right,
                },
                Unlock {
                    threshold: CAT4_RELEASE_THRESHOLD,
                    cat: EntityKind::Cat4,
                    direction: Direction::Left,
                },
            ],
        }
    }
}

impl EventResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlocks(&self) -> &[Unlock] {
        &self.unlocks
    }

    /// Eats at most one collectible under the mouse and applies its consequences.
    pub fn resolve_collectibles(&self, stage: &mut Stage, levels: &mut LevelManager, pause: &mut Pause<Transition>, hud: &mut dyn Hud) {
        let Some(index) = stage.mouse.eat_cheese(&stage.collectibles) else {
            return;
        };
        let Some(item) = stage.collectibles.collect(index) else {
            return;
        };

        levels.add_score(item.points, hud);
        let collected = stage.collectibles.num_collected;
        trace!(collected, col = item.col, row = item.row, kind = ?item.kind, "Collectible eaten");

        // Strict equality: each gate opens exactly once, on the pickup that reaches its count
        for unlock in self.unlocks.iter().filter(|unlock| unlock.threshold == collected) {
            if let Some(cat) = stage.cats.get(unlock.cat) {
                stage.graph.allow_access_at(cat.mover.start_node, unlock.direction, unlock.cat);
                info!(cat = unlock.cat.as_ref(), collected, "Cat released from the pen");
            }
        }

        if item.kind == CollectibleKind::Power {
            stage.cats.start_frightened();
            debug!("Cats frightened");
        }

        if stage.collectibles.is_empty() {
            stage.flash.start();
            stage.hide_entities();
            pause.set_pause(false, Some(timing::TRANSITION_DELAY), Some(Transition::NextLevel));
            info!(level = levels.level, score = levels.score, "Level cleared");
        }
    }

    /// Checks every cat against the mouse.
    ///
    /// A frightened cat is eaten; any other cat that is not respawning kills a living mouse.
    pub fn resolve_collisions(&self, stage: &mut Stage, levels: &mut LevelManager, pause: &mut Pause<Transition>, hud: &mut dyn Hud) {
        for kind in EntityKind::CATS {
            let Some(cat) = stage.cats.get(kind) else {
                continue;
            };
            if !stage.mouse.collide_cat(cat) {
                continue;
            }

            let mode = cat.mode.current;
            match mode {
                Mode::Frightened => {
                    let (points, position) = (cat.points, cat.position());
                    stage.mouse.mover.visible = false;
                    levels.add_score(points, hud);
                    hud.add_text(Label {
                        value: points.to_string(),
                        color: RED,
                        position,
                        size: 8,
                        ttl: Some(timing::SCORE_LABEL_TTL),
                    });
                    stage.cats.update_points();
                    pause.set_pause(false, Some(timing::EAT_CAT_DELAY), Some(Transition::ShowEntities));

                    if let Some(cat) = stage.cats.get_mut(kind) {
                        cat.mover.visible = false;
                        cat.start_respawn(&stage.graph);
                    }
                    stage.graph.allow_home_access(kind);
                    info!(cat = kind.as_ref(), points, score = levels.score, "Cat eaten");
                }
                Mode::Respawn => {}
                Mode::Scatter | Mode::Chase => {
                    if !stage.mouse.alive {
                        continue;
                    }
                    let lives = levels.lose_life(hud);
                    stage.mouse.die();
                    stage.cats.hide();

                    if lives == 0 {
                        hud.show_text(TextId::GameOver);
                        pause.set_pause(false, Some(timing::TRANSITION_DELAY), Some(Transition::RestartGame));
                        info!(score = levels.score, level = levels.level, "Game over");
                    } else {
                        pause.set_pause(false, Some(timing::TRANSITION_DELAY), Some(Transition::ResetLevel));
                    }
                }
            }
        }
    }

    /// Handles quit and the pause key.
    ///
    /// Returns `Break` when a quit event arrives; nothing after it is processed.
    pub fn check_events(
        &self,
        events: &[InputEvent],
        bindings: &Bindings,
        stage: &mut Stage,
        pause: &mut Pause<Transition>,
        hud: &mut dyn Hud,
    ) -> ControlFlow<()> {
        for &event in events {
            match bindings.translate(event) {
                Some(GameCommand::Exit) => {
                    info!("Quit requested");
                    return ControlFlow::Break(());
                }
                Some(GameCommand::TogglePause) if stage.mouse.alive => {
                    pause.set_pause(true, None, None);
                    if pause.paused {
                        hud.show_text(TextId::Paused);
                    } else {
                        hud.hide_text();
                        stage.show_entities();
                    }
                }
                _ => {}
            }
        }
        ControlFlow::Continue(())
    }
}
