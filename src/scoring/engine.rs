use super::table::TileTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterContribution {
    pub ch: char,   // Character as typed
    pub value: u32, // 0 for unscored characters
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub word: String,
    pub score: u64,
    pub breakdown: Vec<LetterContribution>,
}

/// Sum the tile values of every character in `word`.
///
/// Never fails: empty or fully unscored input scores 0.
pub fn score_word(word: &str, table: &TileTable) -> u64 {
    word.chars().map(|c| u64::from(table.value(c))).sum()
}

/// Score `word` and keep the per-character breakdown for display.
pub fn calculate_score(word: &str, table: &TileTable) -> ScoreResult {
    let breakdown: Vec<LetterContribution> = word
        .chars()
        .map(|ch| LetterContribution {
            ch,
            value: table.value(ch),
        })
        .collect();
    let score = breakdown.iter().map(|c| u64::from(c.value)).sum();

    ScoreResult {
        word: word.to_string(),
        score,
        breakdown,
    }
}
