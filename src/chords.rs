//! # Chord Scanner
//!
//! Finds `[Chord]` annotations in lyric text and rewrites them.
//!
//! ## Scanning Rules
//! - A chord is the text between a `[` and the next `]`
//! - If another `[` comes before that `]`, the first `[` is not a chord
//!   delimiter; scanning resumes right after it
//! - In [`ScanMode::MultiLine`] the same applies to a line break before the `]`
//! - A `[` with no `]` anywhere after it ends the scan; the rest of the text is
//!   left alone
//!
//! Malformed brackets are never an error: lyrics may contain literal `[`.
//!
//! ## Example
//! ```rust
//! use wordslive::chords::{chords, remove_all};
//!
//! let found: Vec<_> = chords("[C]Amazing [G]grace").collect();
//! assert_eq!(found[0].chord, "C");
//! assert_eq!(found[0].position, 1);
//! assert_eq!(found[1].position, 12);
//!
//! assert_eq!(remove_all("Swing low, sweet [C]chari[Am7/G]ot"), "Swing low, sweet chariot");
//! ```

use crate::key::Key;
use crate::style::NotationStyle;
use crate::symbol::ChordSymbol;

/// Whether a line break invalidates an open bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Whole song text; a `\n` between `[` and `]` breaks the pair
    #[default]
    MultiLine,
    /// One lyric line at a time, as the search indexer feeds it
    SingleLine,
}

/// Iterator over the chords in a text, see [`chords`]
#[derive(Debug, Clone)]
pub struct ChordScanner {
    chars: Vec<char>,
    cursor: usize,
    mode: ScanMode,
}

impl ChordScanner {
    pub fn new(text: &str, mode: ScanMode) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
            mode,
        }
    }

    fn find_char(&self, from: usize, target: char) -> Option<usize> {
        self.chars[from..]
            .iter()
            .position(|&c| c == target)
            .map(|i| from + i)
    }
}

impl Iterator for ChordScanner {
    type Item = ChordSymbol;

    fn next(&mut self) -> Option<ChordSymbol> {
        loop {
            let open = self.find_char(self.cursor, '[')?;
            let Some(close) = self.find_char(open, ']') else {
                // Unterminated bracket: nothing after it can be a chord
                self.cursor = self.chars.len();
                return None;
            };

            let inner = &self.chars[open + 1..close];
            let broken = inner
                .iter()
                .any(|&c| c == '[' || (c == '\n' && self.mode == ScanMode::MultiLine));
            if broken {
                tracing::trace!(offset = open, "skipping bracket that does not start a chord");
                self.cursor = open + 1;
                continue;
            }

            let chord: String = inner.iter().collect();
            self.cursor = close + 1;
            return Some(ChordSymbol::new(chord, open + 1));
        }
    }
}

/// Scan multi-line text for chords. Each call starts a fresh scan.
pub fn chords(text: &str) -> ChordScanner {
    ChordScanner::new(text, ScanMode::MultiLine)
}

/// Rebuild `text`, replacing each chord with `[replacement]`, or dropping it
/// (brackets included) when `replace` returns `None`.
pub fn replace_chords<F>(text: &str, mode: ScanMode, mut replace: F) -> String
where
    F: FnMut(&ChordSymbol) -> Option<String>,
{
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for chord in ChordScanner::new(text, mode) {
        let open = chord.position - 1;
        result.extend(&chars[last..open]);
        if let Some(replacement) = replace(&chord) {
            result.push('[');
            result.push_str(&replacement);
            result.push(']');
        }
        last = open + chord.len() + 2;
    }
    result.extend(&chars[last..]);

    result
}

/// Remove every chord, brackets and all
pub fn remove_all(text: &str) -> String {
    replace_chords(text, ScanMode::MultiLine, |_| None)
}

/// Replace `b` and `#` inside chords with `♭` and `♯`
pub fn pretty_print(text: &str) -> String {
    replace_chords(text, ScanMode::MultiLine, |chord| Some(chord.pretty()))
}

/// Transpose every chord in `text` from `original_key` by `amount` semitones
pub fn transpose(text: &str, original_key: &Key, amount: i32, style: NotationStyle) -> String {
    tracing::debug!(key = %original_key.name(style), amount, "transposing chords");
    replace_chords(text, ScanMode::MultiLine, |chord| {
        Some(chord.transpose(original_key, amount, style).chord)
    })
}

/// Remove every chord from a single lyric line
pub fn strip_line(line: &str) -> String {
    replace_chords(line, ScanMode::SingleLine, |_| None)
}

/// Plain text for the search index: every line stripped of chords
pub fn searchable_text(text: &str) -> String {
    text.split('\n').map(strip_line).collect::<Vec<_>>().join("\n")
}
