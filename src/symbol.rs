//! # Chord and Note Symbols
//!
//! A [`ChordSymbol`] is the raw text of one bracketed annotation (`Am7/G` in
//! `[Am7/G]`) together with where it starts in the lyric text. The notes inside
//! it are [`NoteSymbol`]s: `Am7/G` holds an `A` at offset 0 and a `G` at offset 4.
//!
//! Everything that is not a note (`m7`, `sus4`, `/`) is carried through
//! replacement and transposition untouched.
//!
//! ```rust
//! use wordslive::{ChordSymbol, Key, NotationStyle};
//!
//! let style = NotationStyle::default();
//! let chord = ChordSymbol::new("Am7/G", 0);
//! let key = Key::parse("C", style)?;
//! assert_eq!(chord.transpose(&key, 2, style).chord, "Bm7/A");
//! # Ok::<(), wordslive::ChordError>(())
//! ```

use crate::key::Key;
use crate::note::Note;
use crate::style::NotationStyle;
use serde::{Deserialize, Serialize};

/// One chord annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSymbol {
    /// Text between the brackets
    pub chord: String,
    /// Character offset of the first character after `[`
    pub position: usize,
}

/// One note inside a chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSymbol {
    pub note: Note,
    /// Character offset within the chord text
    pub position: usize,
    /// The text as written, e.g. `"Bb"` or `"Fis"`
    pub original_name: String,
}

impl ChordSymbol {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }

    /// Number of characters in the chord text
    pub fn len(&self) -> usize {
        self.chord.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chord.is_empty()
    }

    /// The notes written in this chord, in order. Each call starts a fresh scan.
    pub fn notes(&self, style: NotationStyle) -> NoteSymbols<'_> {
        NoteSymbols {
            rest: &self.chord,
            consumed: 0,
            style,
        }
    }

    /// Rebuild the chord with every note replaced by `render(note)`.
    pub fn replace_notes<F>(&self, style: NotationStyle, mut render: F) -> ChordSymbol
    where
        F: FnMut(&NoteSymbol) -> String,
    {
        let chars: Vec<char> = self.chord.chars().collect();
        let mut result = String::with_capacity(self.chord.len());
        let mut last = 0;

        for symbol in self.notes(style) {
            result.extend(&chars[last..symbol.position]);
            result.push_str(&render(&symbol));
            last = symbol.position + symbol.original_name.chars().count();
        }
        result.extend(&chars[last..]);

        ChordSymbol::new(result, self.position)
    }

    /// Transpose every note by `amount` semitones, spelled for the destination key.
    pub fn transpose(&self, original_key: &Key, amount: i32, style: NotationStyle) -> ChordSymbol {
        let new_key = original_key.transpose(amount);
        self.replace_notes(style, |symbol| {
            symbol.note.transpose(amount).name(&new_key, style).to_string()
        })
    }

    /// Chord text with ASCII accidentals swapped for music glyphs
    pub fn pretty(&self) -> String {
        self.chord
            .chars()
            .map(|c| match c {
                'b' => '♭',
                '#' => '♯',
                other => other,
            })
            .collect()
    }
}

/// Iterator over the notes of a chord, see [`ChordSymbol::notes`]
#[derive(Debug, Clone)]
pub struct NoteSymbols<'a> {
    rest: &'a str,
    consumed: usize,
    style: NotationStyle,
}

impl Iterator for NoteSymbols<'_> {
    type Item = NoteSymbol;

    fn next(&mut self) -> Option<NoteSymbol> {
        let m = Note::parse(self.rest, self.style)?;
        let symbol = NoteSymbol {
            note: m.note,
            position: self.consumed + m.position,
            original_name: m.name.to_string(),
        };
        self.consumed += m.end();
        self.rest = m.rest;
        Some(symbol)
    }
}
