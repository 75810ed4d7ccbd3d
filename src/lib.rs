pub mod duel;
pub mod output;
pub mod prompt;
pub mod scoring;
