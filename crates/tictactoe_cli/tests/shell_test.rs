//! Tests for the interactive shell driven through in-memory I/O.

use std::io::Cursor;
use tictactoe_cli::{Config, Input, Shell, Step};
use tictactoe_engine::{Cell, GameEngine, Mark, RoundOutcome};

fn play(script: &str) -> (Shell, String) {
    let mut shell = Shell::new(Config::default());
    let mut output = Vec::new();
    shell
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("in-memory I/O");
    (shell, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_win_is_announced_and_scored() {
    let (shell, output) = play("0\n4\n1\n5\n2\nq\n");

    assert!(output.contains("X wins! (Top-left, Top-center, Top-right)"));
    assert!(output.contains("Type 'n' for a new round"));
    assert!(output.ends_with("Final Score  X: 1  O: 0\nX leads.\n"));
    assert_eq!(shell.engine().session().scores().get(Mark::X), 1);
}

#[test]
fn test_labels_accepted_as_moves() {
    let (shell, _) = play("center\ntop-left\nq\n");

    let board = shell.engine().session().board();
    assert_eq!(board.cell(4), Some(Cell::Occupied(Mark::X)));
    assert_eq!(board.cell(0), Some(Cell::Occupied(Mark::O)));
}

#[test]
fn test_draw_then_new_round() {
    let (shell, output) = play("0\n4\n8\n1\n7\n6\n2\n5\n3\nn\n");

    assert!(output.contains("Draw!"));
    assert!(output.contains("Round 2."));
    assert_eq!(shell.engine().session().outcome(), &RoundOutcome::InProgress);
    assert_eq!(shell.engine().session().board().empty_count(), 9);
}

#[test]
fn test_move_after_win_is_refused() {
    let (shell, output) = play("0\n4\n1\n5\n2\n3\n");

    assert!(output.contains("Round is already over."));
    assert_eq!(shell.engine().session().board().cell(3), Some(Cell::Empty));
}

#[test]
fn test_reset_clears_scores() {
    let mut shell = Shell::new(Config::default());
    for index in [0, 4, 1, 5, 2] {
        let _ = shell.execute(Input::Place(index));
    }
    assert_eq!(shell.engine().session().scores().get(Mark::X), 1);

    match shell.execute(Input::Reset) {
        Step::Continue(text) => assert!(text.starts_with("Scores cleared.")),
        Step::Quit => panic!("reset should not quit"),
    }
    assert_eq!(shell.engine().session().scores().get(Mark::X), 0);
}

#[test]
fn test_end_of_input_stops_loop() {
    let (shell, output) = play("4\n");
    assert!(output.ends_with("Final Score  X: 0  O: 0\nTied.\n"));
    assert_eq!(shell.engine().session().turn(), Mark::O);
}

#[test]
fn test_custom_labels_in_output() {
    let config: Config = toml::from_str(
        r#"
x_label = "Ada"
o_label = "Grace"
show_hints = false
"#,
    )
    .expect("valid toml");
    let mut shell = Shell::new(config);

    let mut last = String::new();
    for index in [3, 0, 4, 1, 8, 2] {
        if let Step::Continue(text) = shell.execute(Input::Place(index)) {
            last = text;
        }
    }

    assert!(last.contains("Grace wins! (Top-left, Top-center, Top-right)"));
    assert!(last.contains("Score  Ada: 0  Grace: 1"));
    assert!(!last.contains('5'), "hints disabled: {}", last);
}

#[test]
fn test_summary_names_leader() {
    let config: Config = toml::from_str("o_label = \"Grace\"").expect("valid toml");
    // O takes the left column.
    let shell = Shell::with_engine(GameEngine::replay(&[1, 0, 2, 3, 8, 6]), config);

    let summary = shell.summary();
    assert!(summary.contains("Outcome: O wins (0, 3, 6)"));
    assert!(summary.ends_with("Score  X: 0  Grace: 1\nGrace leads."));
}
