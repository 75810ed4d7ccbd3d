pub mod formatter;

pub use formatter::{format_breakdown, format_score_line, format_tile_table, should_use_colors};
