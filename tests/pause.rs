use cheese_chase::game::level::Transition;
use cheese_chase::game::pause::Pause;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_deadline_fires_command_once() {
    let mut pause = Pause::new(false);
    pause.set_pause(false, Some(3.0), Some(Transition::NextLevel));
    assert_that(&pause.paused).is_true();
    assert_eq!(pause.pending(), Some(&Transition::NextLevel));

    assert_eq!(pause.update(1.0), None);
    assert_eq!(pause.remaining(), Some(2.0));

    assert_eq!(pause.update(2.0), Some(Transition::NextLevel));
    assert_that(&pause.paused).is_false();
    assert_eq!(pause.remaining(), None);
    assert_eq!(pause.update(10.0), None);
}

#[test]
fn test_deadline_without_command_unpauses() {
    let mut pause: Pause<Transition> = Pause::new(false);
    pause.set_pause(false, Some(1.0), None);

    assert_eq!(pause.update(1.0), None);
    assert_that(&pause.paused).is_false();
}

#[test]
fn test_new_request_replaces_pending() {
    let mut pause = Pause::new(false);
    pause.set_pause(false, Some(1.0), Some(Transition::ShowEntities));
    pause.update(0.5);
    pause.set_pause(false, Some(3.0), Some(Transition::ResetLevel));

    assert_eq!(pause.update(1.0), None);
    assert_eq!(pause.update(2.0), Some(Transition::ResetLevel));
}

#[test]
fn test_event_request_never_unpauses() {
    let mut pause = Pause::new(true);
    pause.set_pause(false, Some(1.0), Some(Transition::ShowEntities));
    assert_that(&pause.paused).is_true();
}

#[test]
fn test_player_toggle() {
    let mut pause: Pause<Transition> = Pause::new(true);

    pause.set_pause(true, None, None);
    assert_that(&pause.paused).is_false();
    pause.set_pause(true, None, None);
    assert_that(&pause.paused).is_true();

    // Without a deadline the pause holds indefinitely
    assert_eq!(pause.update(100.0), None);
    assert_that(&pause.paused).is_true();
}

#[test]
fn test_player_toggle_disarms_pending() {
    let mut pause = Pause::new(false);
    pause.set_pause(false, Some(1.0), Some(Transition::ShowEntities));
    pause.set_pause(true, None, None);

    assert_that(&pause.paused).is_false();
    assert_eq!(pause.pending(), None);
    assert_eq!(pause.update(5.0), None);
}
