/// Standard tile values, indexed by `letter - 'A'`.
const STANDARD_VALUES: [u32; 26] = [
    1, // A
    3, // B
    3, // C
    2, // D
    1, // E
    4, // F
    2, // G
    4, // H
    1, // I
    8, // J
    5, // K
    1, // L
    3, // M
    1, // N
    1, // O
    3, // P
    1, // Q
    1, // R
    1, // S
    1, // T
    1, // U
    4, // V
    4, // W
    8, // X
    4, // Y
    1, // Z
];

/// Immutable letter -> point value table.
///
/// Only the uppercase letters `A..=Z` carry a value. Every other character
/// scores 0; see [`TileTable::value`] for how case is normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileTable {
    values: [u32; 26],
}

impl Default for TileTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TileTable {
    /// The standard word-game tile values.
    pub const fn standard() -> Self {
        Self {
            values: STANDARD_VALUES,
        }
    }

    /// Value of a single uppercase letter, `None` outside `A..=Z`.
    pub fn letter_value(&self, letter: char) -> Option<u32> {
        letter_index(letter).map(|i| self.values[i])
    }

    /// Value of an arbitrary character.
    ///
    /// The character is uppercased with the full Unicode mapping first. If that
    /// produces exactly one letter in `A..=Z` its value is returned; otherwise
    /// (digits, punctuation, accented letters, characters that uppercase to
    /// several characters like `ß`) the result is 0.
    pub fn value(&self, ch: char) -> u32 {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => self.letter_value(u).unwrap_or(0),
            _ => 0,
        }
    }

    /// Iterate over `(letter, value)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        ('A'..='Z').zip(self.values.iter().copied())
    }
}

fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}
