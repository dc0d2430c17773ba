//! Unit tests for the session state machine.

use crate::domain::fixtures::{one_week_prompts, sample_prompts};
use crate::domain::{GameSession, ProjectStatus, WeekStart};
use crate::errors::{DomainError, StateKind, ValidationKind};

fn session() -> GameSession {
    GameSession::with_seed(&sample_prompts(), 42)
}

#[test]
fn register_player_is_idempotent_on_duplicates() {
    let mut game = session();
    assert!(game.register_player("mara"));
    assert!(!game.register_player("mara"));

    let matching = game.players().iter().filter(|p| p.name == "mara").count();
    assert_eq!(matching, 1);
}

#[test]
fn register_player_is_case_sensitive() {
    let mut game = session();
    assert!(game.register_player("mara"));
    assert!(game.register_player("Mara"));
    assert_eq!(game.players().len(), 2);
}

#[test]
fn register_mod_promotes_existing_player() {
    let mut game = session();
    game.register_player("mara");
    game.register_mod("mara");

    assert_eq!(game.players().len(), 1);
    assert!(game.player("mara").unwrap().is_mod);
}

#[test]
fn register_mod_creates_missing_player_as_mod() {
    let mut game = session();
    game.register_mod("quinn");
    let quinn = game.player("quinn").unwrap();
    assert!(quinn.is_mod);
    assert_eq!(quinn.contempt_tokens, 0);
}

#[test]
fn contempt_ops_report_unregistered_as_none() {
    let mut game = session();
    assert_eq!(game.add_contempt("ghost"), None);
    assert_eq!(game.use_contempt("ghost"), None);
    assert_eq!(game.contempt("ghost"), None);
}

#[test]
fn contempt_ops_track_a_registered_player() {
    let mut game = session();
    game.register_player("mara");

    assert_eq!(game.add_contempt("mara"), Some(1));
    assert_eq!(game.add_contempt("mara"), Some(2));
    assert_eq!(game.use_contempt("mara"), Some(true));
    assert_eq!(game.contempt("mara"), Some(1));
    assert_eq!(game.use_contempt("mara"), Some(true));
    assert_eq!(game.use_contempt("mara"), Some(false));
    assert_eq!(game.contempt("mara"), Some(0));
}

#[test]
fn a_tag_never_lives_in_both_lists() {
    let mut game = session();
    game.add_scarcity("water").unwrap();
    game.add_abundance("water").unwrap();

    assert!(!game.scarcities().contains(&"water".to_string()));
    assert_eq!(game.abundances(), ["water".to_string()]);

    game.add_scarcity("water").unwrap();
    assert_eq!(game.scarcities(), ["water".to_string()]);
    assert!(game.abundances().is_empty());
}

#[test]
fn adding_a_tag_twice_keeps_one_entry() {
    let mut game = session();
    game.add_abundance("grain").unwrap();
    let tags = game.add_abundance("grain").unwrap();
    assert_eq!(tags, ["grain".to_string()]);
}

#[test]
fn tag_lists_keep_insertion_order() {
    let mut game = session();
    game.add_scarcity("water").unwrap();
    game.add_scarcity("grain").unwrap();
    game.add_scarcity("timber").unwrap();
    game.remove_scarcity("grain");

    assert_eq!(
        game.scarcities(),
        ["water".to_string(), "timber".to_string()]
    );
}

#[test]
fn blank_tags_are_rejected_before_mutation() {
    let mut game = session();
    for blank in ["", "   ", "\t"] {
        let err = game.add_scarcity(blank).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::BlankResourceName, _)
        ));
    }
    assert!(game.scarcities().is_empty());
    assert!(game.abundances().is_empty());
}

#[test]
fn removing_an_absent_tag_is_a_quiet_noop() {
    let mut game = session();
    game.remove_scarcity("never-added");
    game.remove_abundance("never-added");
    assert!(game.scarcities().is_empty());
}

#[test]
fn start_game_requires_a_roster() {
    let mut game = session();
    let err = game.start_game().unwrap_err();
    assert!(matches!(err, DomainError::State(StateKind::EmptyRoster, _)));
}

#[test]
fn start_game_keeps_the_roster_and_resets_the_turn() {
    let mut game = session();
    for name in ["a", "b", "c", "d"] {
        game.register_player(name);
    }
    game.start_game().unwrap();

    let mut names: Vec<&str> = game.players().iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b", "c", "d"]);
    assert_eq!(
        game.current_player().unwrap().name,
        game.players()[0].name
    );
}

#[test]
fn start_game_order_is_deterministic_per_seed() {
    let order_for = |seed: u64| {
        let mut game = GameSession::with_seed(&sample_prompts(), seed);
        for name in ["a", "b", "c", "d", "e"] {
            game.register_player(name);
        }
        game.start_game().unwrap();
        game.players()
            .iter()
            .map(|p| p.name.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(order_for(7), order_for(7));
}

#[test]
fn turn_operations_error_on_an_empty_roster() {
    let mut game = session();
    assert!(matches!(
        game.current_player().unwrap_err(),
        DomainError::State(StateKind::EmptyRoster, _)
    ));
    assert!(matches!(
        game.advance_turn().unwrap_err(),
        DomainError::State(StateKind::EmptyRoster, _)
    ));
}

#[test]
fn advance_turn_wraps_around_the_roster() {
    let mut game = session();
    for name in ["a", "b", "c"] {
        game.register_player(name);
    }
    game.start_game().unwrap();

    let first = game.current_player().unwrap().name.clone();
    let second = game.advance_turn().unwrap().name.clone();
    assert_ne!(first, second);
    game.advance_turn().unwrap();
    let back = game.advance_turn().unwrap().name.clone();
    assert_eq!(first, back);
}

#[test]
fn start_week_reports_season_and_prompts() {
    let mut game = session();
    let WeekStart::Week(report) = game.start_week() else {
        panic!("expected a drawn week");
    };
    assert_eq!(report.season, crate::domain::Season::Spring);
    assert!(!report.week.prompts.is_empty());
    assert!(!report.ended_game);
}

#[test]
fn start_week_ticks_projects_and_announces_completions() {
    let mut game = session();
    game.add_project("well", 1).unwrap();
    game.add_project("wall", 2).unwrap();

    let WeekStart::Week(first) = game.start_week() else {
        panic!("expected a drawn week");
    };
    assert_eq!(first.completed_projects, ["well".to_string()]);

    let WeekStart::Week(second) = game.start_week() else {
        panic!("expected a drawn week");
    };
    assert_eq!(second.completed_projects, ["wall".to_string()]);
}

#[test]
fn start_week_sets_game_over_on_the_last_draw() {
    let mut game = GameSession::with_seed(&one_week_prompts(), 5);
    let WeekStart::Week(report) = game.start_week() else {
        panic!("expected a drawn week");
    };
    assert!(report.ended_game);
    assert!(game.game_over());
    assert_eq!(game.current_season(), None);

    // Every later call is an expected GameOver value, not an error.
    assert_eq!(game.start_week(), WeekStart::GameOver);
}

#[test]
fn game_over_is_the_deck_exhaustion_signal() {
    let mut game = session();
    let total = sample_prompts().total_weeks();
    for draw in 0..total {
        assert!(!game.game_over());
        let WeekStart::Week(report) = game.start_week() else {
            panic!("deck should not be spent before draw {draw}");
        };
        assert_eq!(report.ended_game, draw == total - 1);
    }
    assert!(game.game_over());
}

#[test]
fn set_game_over_is_monotonic_until_reset() {
    let mut game = session();
    game.set_game_over();
    game.set_game_over();
    assert!(game.game_over());
    assert_eq!(game.start_week(), WeekStart::GameOver);

    game.reset(&sample_prompts());
    assert!(!game.game_over());
}

#[test]
fn add_project_rejects_blank_names() {
    let mut game = session();
    let err = game.add_project("  ", 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BlankProjectName, _)
    ));
    assert!(game.projects().is_empty());
}

#[test]
fn project_index_ops_are_bounds_checked() {
    let mut game = session();
    game.add_project("well", 3).unwrap();

    assert!(!game.remove_project(1));
    assert!(!game.finish_project(5));
    assert!(!game.fail_project(usize::MAX));
    assert_eq!(game.projects().len(), 1);

    assert!(game.finish_project(0));
    assert_eq!(game.projects()[0].status(), ProjectStatus::Complete);
    assert!(game.fail_project(0));
    assert_eq!(game.projects()[0].status(), ProjectStatus::Failed);
    assert!(game.remove_project(0));
    assert!(game.projects().is_empty());
}

#[test]
fn advance_all_projects_reports_in_creation_order() {
    let mut game = session();
    game.add_project("second", 1).unwrap();
    game.add_project("zeroth", 0).unwrap();
    game.add_project("slow", 4).unwrap();

    let completed = game.advance_all_projects();
    assert_eq!(completed, ["second".to_string(), "zeroth".to_string()]);
    assert_eq!(game.advance_all_projects(), Vec::<String>::new());
}

#[test]
fn log_is_append_only_and_keeps_duplicates() {
    let mut game = session();
    game.log_event("a stranger arrives");
    game.log_event("a stranger arrives");
    game.log_event("the well runs dry");
    assert_eq!(game.logs().len(), 3);
    assert_eq!(game.logs()[0], game.logs()[1]);
}

#[test]
fn reset_replaces_every_piece_of_state() {
    let mut game = session();
    game.register_player("mara");
    game.add_scarcity("water").unwrap();
    game.add_project("well", 2).unwrap();
    game.log_event("something happened");
    game.start_week();
    game.set_game_over();

    game.reset(&sample_prompts());

    assert!(game.players().is_empty());
    assert!(game.scarcities().is_empty());
    assert!(game.abundances().is_empty());
    assert!(game.projects().is_empty());
    assert!(game.logs().is_empty());
    assert!(!game.game_over());
    assert_eq!(game.current_season(), Some(crate::domain::Season::Spring));
}
