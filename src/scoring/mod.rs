pub mod engine;
pub mod table;

pub use engine::{calculate_score, score_word, LetterContribution, ScoreResult};
pub use table::TileTable;
