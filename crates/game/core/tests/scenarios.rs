//! End-to-end scoring scenarios driven through the public engine API.

use scorekeeper_core::{Mode, Round, ScoringEngine, board};

#[test]
fn board_amount_answered_correctly() {
    let mut engine = ScoringEngine::new();
    engine.select_amount(400).unwrap();
    let outcome = engine.submit_answer(true).unwrap();

    assert_eq!(outcome.state.score, 400);
    assert_eq!(outcome.state.correct_count, 1);
    assert_eq!(outcome.state.incorrect_count, 0);
}

#[test]
fn missed_daily_double_returns_to_board() {
    let mut engine = ScoringEngine::new();
    engine.select_amount(400).unwrap();
    engine.submit_answer(true).unwrap();

    engine.mark_daily_double(600).unwrap();
    assert_eq!(engine.state().mode, Mode::DailyDouble);
    engine.update_wager("500").unwrap();
    // Over the score: flagged and not offered, but applied when submitted.
    assert!(engine.state().wager_error.is_some());
    assert!(!engine.can_submit());
    let outcome = engine.submit_answer(false).unwrap();

    assert_eq!(outcome.state.score, -100);
    assert_eq!(outcome.state.incorrect_count, 1);
    assert_eq!(outcome.state.mode, Mode::Board);
    assert!(outcome.state.selected_amount.is_none());
    assert!(outcome.state.wager_text.is_empty());
}

#[test]
fn final_jeopardy_wager_above_score_blocks_submit() {
    let mut engine = ScoringEngine::new();
    engine.select_amount(1000).unwrap();
    engine.submit_answer(true).unwrap();

    engine.trigger_final_jeopardy().unwrap();
    let outcome = engine.update_wager("1500").unwrap();

    assert!(outcome.state.wager_error.is_some());
    assert_eq!(outcome.state.wager_text, "1500");
    assert!(!engine.can_submit());
    assert_eq!(engine.state().score, 1000);
}

#[test]
fn switching_to_double_round_doubles_the_board() {
    let mut engine = ScoringEngine::new();
    let outcome = engine.switch_round().unwrap();

    assert_eq!(outcome.state.round, Round::Double);
    assert_eq!(engine.clue_values(), [400, 800, 1200, 1600, 2000]);
    assert_eq!(engine.clue_values(), board::values(Round::Double));
    assert!(outcome.state.selected_amount.is_none());
    assert!(outcome.state.wager_text.is_empty());
    assert!(outcome.state.wager_error.is_none());
}

#[test]
fn final_jeopardy_persists_after_answer() {
    let mut engine = ScoringEngine::new();
    engine.select_amount(200).unwrap();
    engine.submit_answer(true).unwrap();

    engine.trigger_final_jeopardy().unwrap();
    assert_eq!(engine.state().selected_amount, Some(0));
    engine.update_wager("200").unwrap();
    let outcome = engine.submit_answer(true).unwrap();

    assert_eq!(outcome.state.score, 400);
    assert_eq!(outcome.state.mode, Mode::FinalJeopardy);
    assert!(outcome.state.selected_amount.is_none());
}

#[test]
fn rejected_commands_leave_state_untouched() {
    let mut engine = ScoringEngine::new();
    engine.select_amount(800).unwrap();
    let before = engine.state().clone();

    assert!(engine.select_amount(200).is_err());
    assert!(engine.switch_round().is_err());
    assert!(engine.update_wager("100").is_err());
    assert!(engine.select_amount(1600).is_err());

    assert_eq!(engine.state(), &before);
}

#[test]
fn textual_commands_drive_the_same_rules() {
    let mut engine = ScoringEngine::new();
    for line in ["select 400", "correct", "dd 600", "wager 500", "incorrect"] {
        let command = line.parse().unwrap();
        engine.execute(&command).unwrap();
    }
    assert_eq!(engine.state().score, -100);
    assert_eq!(engine.state().answered(), 2);
}
