//! Line-oriented terminal front end.
//!
//! The shell owns the engine, forwards every placement to it unchecked, and
//! re-renders from the session after each command.

use crate::config::Config;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, Mark, MoveReport, Position, RoundOutcome};
use tracing::{debug, instrument};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place the current mark at a board index.
    Place(usize),
    /// Start a new round, keeping scores.
    NewRound,
    /// Start over with zeroed scores.
    Reset,
    /// Show the scores.
    Score,
    /// Show the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a line of user input.
    ///
    /// Any unsigned integer is a placement, even off the board; the engine
    /// decides legality.
    pub fn parse(line: &str) -> Input {
        let line = line.trim();
        if let Ok(index) = line.parse::<usize>() {
            return Input::Place(index);
        }

        match line.to_lowercase().as_str() {
            "n" | "new" => Input::NewRound,
            "r" | "reset" => Input::Reset,
            "s" | "score" => Input::Score,
            "b" | "board" | "" => Input::Board,
            "h" | "help" | "?" => Input::Help,
            "q" | "quit" | "exit" => Input::Quit,
            other => match Position::parse(other) {
                Some(pos) => Input::Place(pos.to_index()),
                None => Input::Unknown(line.to_string()),
            },
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text and keep reading.
    Continue(String),
    /// Stop.
    Quit,
}

const HELP: &str = "\
Commands:
  0-8 or a position name (e.g. center, top-left)   place your mark
  n, new                                            start a new round
  r, reset                                          new round and zero the scores
  s, score                                          show the scores
  b, board                                          show the board
  h, help                                           show this help
  q, quit                                           leave";

/// Interactive session over an engine.
#[derive(Debug, Clone)]
pub struct Shell {
    engine: GameEngine,
    config: Config,
}

impl Shell {
    /// Creates a shell around a fresh engine.
    pub fn new(config: Config) -> Self {
        Self::with_engine(GameEngine::new(), config)
    }

    /// Creates a shell around an existing engine.
    pub fn with_engine(engine: GameEngine, config: Config) -> Self {
        Self { engine, config }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handles one parsed input.
    #[instrument(skip(self))]
    pub fn execute(&mut self, input: Input) -> Step {
        let text = match input {
            Input::Place(index) => self.place(index),
            Input::NewRound => {
                self.engine.start_new_round();
                format!("Round {}.\n{}", self.engine.session().round(), self.render())
            }
            Input::Reset => {
                self.engine.full_reset();
                format!("Scores cleared.\n{}", self.render())
            }
            Input::Score => self.render_scores(),
            Input::Board => self.render(),
            Input::Help => HELP.to_string(),
            Input::Quit => return Step::Quit,
            Input::Unknown(raw) => format!("Unknown command '{}'. Type 'h' for help.", raw),
        };
        Step::Continue(text)
    }

    fn place(&mut self, index: usize) -> String {
        match self.engine.apply_move(index) {
            MoveReport::Placed { outcome, .. } if outcome.is_decided() => {
                format!("{}\n{}", self.render(), self.announce(&outcome))
            }
            MoveReport::Placed { .. } => self.render(),
            MoveReport::Ignored(rejection) => {
                debug!(%rejection, "Placement ignored");
                format!("{}.", rejection)
            }
        }
    }

    /// Round-end notice.
    fn announce(&self, outcome: &RoundOutcome) -> String {
        let verdict = match outcome {
            RoundOutcome::Win { mark, line } => {
                let cells = line.positions().map(|pos| pos.label());
                format!("{} wins! ({})", self.config.label(*mark), cells.join(", "))
            }
            RoundOutcome::Draw => "Draw!".to_string(),
            RoundOutcome::InProgress => return String::new(),
        };
        format!(
            "{}\n{}\nType 'n' for a new round or 'r' to reset the scores.",
            verdict,
            self.render_scores()
        )
    }

    /// Board, then whose turn it is while the round is open.
    pub fn render(&self) -> String {
        let session = self.engine.session();
        let board = session.board().display(*self.config.show_hints());
        if session.outcome().is_decided() {
            board
        } else {
            format!("{}\nTurn: {}", board, self.config.label(session.turn()))
        }
    }

    /// One-line score summary.
    pub fn render_scores(&self) -> String {
        let scores = self.engine.session().scores();
        format!(
            "Score  {}: {}  {}: {}",
            self.config.x_label(),
            scores.get(Mark::X),
            self.config.o_label(),
            scores.get(Mark::O),
        )
    }

    /// Who is ahead on wins.
    pub fn render_leader(&self) -> String {
        match self.engine.session().scores().leader() {
            Some(mark) => format!("{} leads.", self.config.label(mark)),
            None => "Tied.".to_string(),
        }
    }

    /// Board, outcome and scores, for non-interactive output.
    pub fn summary(&self) -> String {
        format!(
            "{}\nOutcome: {}\n{}\n{}",
            self.render(),
            self.engine.session().outcome(),
            self.render_scores(),
            self.render_leader()
        )
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}\n{}", HELP, self.render())?;
        for line in input.lines() {
            match self.execute(Input::parse(&line?)) {
                Step::Continue(text) => writeln!(output, "{}", text)?,
                Step::Quit => break,
            }
            output.flush()?;
        }
        writeln!(output, "Final {}", self.render_scores())?;
        writeln!(output, "{}", self.render_leader())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("4"), Input::Place(4));
        assert_eq!(Input::parse(" 42 "), Input::Place(42));
        assert_eq!(Input::parse("Center"), Input::Place(4));
        assert_eq!(Input::parse("bottom-right"), Input::Place(8));
        assert_eq!(Input::parse("N"), Input::NewRound);
        assert_eq!(Input::parse("reset"), Input::Reset);
        assert_eq!(Input::parse(""), Input::Board);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("xyzzy"), Input::Unknown("xyzzy".to_string()));
    }

    #[test]
    fn test_rejected_move_explains() {
        let mut shell = Shell::new(Config::default());
        let _ = shell.execute(Input::Place(0));
        assert_eq!(
            shell.execute(Input::Place(0)),
            Step::Continue("Top-left is already occupied.".to_string())
        );
        assert_eq!(
            shell.execute(Input::Place(9)),
            Step::Continue("Index 9 is outside the board (0-8).".to_string())
        );
    }

    #[test]
    fn test_quit_stops() {
        let mut shell = Shell::new(Config::default());
        assert_eq!(shell.execute(Input::Quit), Step::Quit);
    }
}
