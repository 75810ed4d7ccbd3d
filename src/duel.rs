use anyhow::Context;
use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Write};

use crate::prompt::read_line_prompt;
use crate::scoring::{calculate_score, ScoreResult, TileTable};

pub const PLAYER_1_PROMPT: &str = "Player 1: ";
pub const PLAYER_2_PROMPT: &str = "Player 2: ";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

/// Result of comparing two scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Tie,
}

impl Outcome {
    /// Higher score wins; equal scores (0-0 included) are a tie.
    pub fn decide(score1: u64, score2: u64) -> Self {
        match score1.cmp(&score2) {
            Ordering::Greater => Outcome::WonBy(Player::One),
            Ordering::Less => Outcome::WonBy(Player::Two),
            Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::WonBy(Player::One) => "Player 1 wins!",
            Outcome::WonBy(Player::Two) => "Player 2 wins!",
            Outcome::Tie => "Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug)]
pub enum DuelError {
    /// A word could not be read (I/O failure or end of input)
    Input(anyhow::Error),
    /// The result line could not be written
    Output(anyhow::Error),
}

impl fmt::Display for DuelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelError::Input(e) => write!(f, "Input error: {:#}", e),
            DuelError::Output(e) => write!(f, "Output error: {:#}", e),
        }
    }
}

impl std::error::Error for DuelError {}

#[derive(Debug, Clone)]
pub struct DuelResult {
    pub player1: ScoreResult,
    pub player2: ScoreResult,
    pub outcome: Outcome,
}

/// Score both words and decide the winner.
pub fn play(word1: &str, word2: &str, table: &TileTable) -> DuelResult {
    let player1 = calculate_score(word1, table);
    let player2 = calculate_score(word2, table);
    let outcome = Outcome::decide(player1.score, player2.score);

    DuelResult {
        player1,
        player2,
        outcome,
    }
}

/// Prompt for both words on `output`, read them from `input`, and write the
/// single result line.
pub fn run_interactive<R, W>(
    input: &mut R,
    output: &mut W,
    table: &TileTable,
) -> Result<DuelResult, DuelError>
where
    R: BufRead,
    W: Write,
{
    let word1 = read_line_prompt(input, output, PLAYER_1_PROMPT).map_err(DuelError::Input)?;
    let word2 = read_line_prompt(input, output, PLAYER_2_PROMPT).map_err(DuelError::Input)?;

    let result = play(&word1, &word2, table);

    writeln!(output, "{}", result.outcome)
        .context("Failed to write result")
        .and_then(|_| output.flush().context("Failed to flush stdout"))
        .map_err(DuelError::Output)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Accepts `limit` bytes, then fails every write.
    struct LimitedWriter {
        written: usize,
        limit: usize,
    }

    impl Write for LimitedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(input: &str) -> (Result<DuelResult, DuelError>, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let result = run_interactive(&mut input, &mut output, &TileTable::standard());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_decide() {
        assert_eq!(Outcome::decide(5, 4), Outcome::WonBy(Player::One));
        assert_eq!(Outcome::decide(4, 5), Outcome::WonBy(Player::Two));
        assert_eq!(Outcome::decide(7, 7), Outcome::Tie);
        assert_eq!(Outcome::decide(0, 0), Outcome::Tie);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::WonBy(Player::One).to_string(), "Player 1 wins!");
        assert_eq!(Outcome::WonBy(Player::Two).to_string(), "Player 2 wins!");
        assert_eq!(Outcome::Tie.to_string(), "Tie!");
    }

    #[test]
    fn test_play_keeps_both_scores() {
        let result = play("QUIZ", "CAT", &TileTable::standard());
        assert_eq!(result.player1.score, 4);
        assert_eq!(result.player2.score, 5);
        assert_eq!(result.outcome, Outcome::WonBy(Player::Two));
    }

    #[test]
    fn test_interactive_output() {
        let (result, output) = run("QUIZ\nCAT\n");
        assert_eq!(result.unwrap().outcome, Outcome::WonBy(Player::Two));
        assert_eq!(output, "Player 1: Player 2: Player 2 wins!\n");
    }

    #[test]
    fn test_interactive_empty_lines_tie() {
        let (result, output) = run("\n\n");
        assert_eq!(result.unwrap().outcome, Outcome::Tie);
        assert!(output.ends_with("Tie!\n"));
    }

    #[test]
    fn test_interactive_missing_second_word() {
        let (result, output) = run("JAZZ\n");
        assert!(matches!(result, Err(DuelError::Input(_))));
        // No result line once input runs out
        assert_eq!(output, "Player 1: Player 2: ");
    }

    #[test]
    fn test_interactive_result_write_failure_is_output_error() {
        let mut input = Cursor::new("QUIZ\nCAT\n");
        let prompts_len = PLAYER_1_PROMPT.len() + PLAYER_2_PROMPT.len();
        let mut output = LimitedWriter {
            written: 0,
            limit: prompts_len,
        };

        let err = run_interactive(&mut input, &mut output, &TileTable::standard()).unwrap_err();
        assert!(matches!(err, DuelError::Output(_)));
        assert!(err.to_string().starts_with("Output error"));
    }
}
