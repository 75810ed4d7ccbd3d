use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{ScoreResult, TileTable};

/// Letters per row in the tile table listing
const TABLE_ROW_LEN: usize = 7;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format one word with its score: "{word}: {score}"
pub fn format_score_line(word: &str, score: u64, use_colors: bool) -> String {
    if use_colors {
        format!("{}: {}", word.bold(), score.green())
    } else {
        format!("{}: {}", word, score)
    }
}

/// Format the per-character breakdown of a score (for verbose mode)
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(result.breakdown.len() + 1);

    let header = format!("{:?} scores {}", result.word, result.score);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for contribution in &result.breakdown {
        let line = format!("  {:?} = {}", contribution.ch, contribution.value);
        if use_colors && contribution.value == 0 {
            lines.push(line.dimmed().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format the tile table as rows of "A=1 B=3 ..."
pub fn format_tile_table(table: &TileTable, use_colors: bool) -> String {
    let entries: Vec<String> = table
        .iter()
        .map(|(letter, value)| {
            if use_colors {
                format!("{}={}", letter.cyan(), value)
            } else {
                format!("{}={}", letter, value)
            }
        })
        .collect();

    entries
        .chunks(TABLE_ROW_LEN)
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
