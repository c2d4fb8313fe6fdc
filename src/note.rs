//! # Notes
//!
//! A note is a pitch class: the number of semitones above C, 0 to 11.
//! Enharmonic spellings (`C#`, `Db`, `Cis`, `Des`) are the same note. Spelling
//! only matters when rendering, where it follows the key and the
//! [`NotationStyle`].
//!
//! ## Recognized Names
//! - Letters `C D E F G A B H` (case-sensitive), `H` being B natural
//! - Sign accidentals: `#`, `♯`, `b`, `♭`
//! - German suffixes: `is` (sharp), `es` (flat), and the contractions `Es`, `As`
//! - With German notation a lone `B` is B flat; `Bb` still means B flat
//!
//! ## Example
//! ```rust
//! use wordslive::{Key, NotationStyle, Note};
//!
//! let style = NotationStyle::default();
//! let m = Note::parse("Fis", style).unwrap();
//! assert_eq!(m.note.semitones_from_c(), 6);
//!
//! let key = Key::parse("Eb", style)?;
//! assert_eq!(m.note.name(&key, style), "Gb");
//! # Ok::<(), wordslive::ChordError>(())
//! ```

use crate::key::Key;
use crate::style::NotationStyle;
use std::fmt;

/// Pitch class, stored as semitones above C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Note {
    semitones_from_c: u8,
}

/// A note name found in a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteMatch<'a> {
    pub note: Note,
    /// Character offset of the note letter
    pub position: usize,
    /// The exact text that was matched, e.g. `"F#"` or `"Fis"`
    pub name: &'a str,
    /// Everything after the match
    pub rest: &'a str,
}

impl NoteMatch<'_> {
    /// Number of characters from the start of the parsed string to the end of the match
    pub fn end(&self) -> usize {
        self.position + self.name.chars().count()
    }
}

/// Map any semitone count into 0..=11
pub fn normalize(semitones: i32) -> u8 {
    semitones.rem_euclid(12) as u8
}

fn is_flat_sign(c: Option<char>) -> bool {
    matches!(c, Some('b') | Some('♭'))
}

impl Note {
    pub fn new(semitones_from_c: i32) -> Self {
        Self {
            semitones_from_c: normalize(semitones_from_c),
        }
    }

    pub fn semitones_from_c(&self) -> u8 {
        self.semitones_from_c
    }

    /// Shift by any number of semitones, up or down
    pub fn transpose(&self, amount: i32) -> Self {
        Self::new(self.semitones_from_c as i32 + amount.rem_euclid(12))
    }

    /// Find the first note name in `text`.
    ///
    /// Characters before the note letter are skipped. Returns `None` when the
    /// string contains no note letter at all.
    pub fn parse(text: &str, style: NotationStyle) -> Option<NoteMatch<'_>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let at = |i: usize| chars.get(i).map(|&(_, c)| c);

        let (position, mut semitones) = chars.iter().enumerate().find_map(|(i, &(_, c))| {
            let base = match c {
                'C' => 0,
                'D' => 2,
                'E' => 4,
                'F' => 5,
                'G' => 7,
                'A' => 9,
                'H' => 11,
                'B' if style.german_notation && !is_flat_sign(at(i + 1)) => 10,
                'B' => 11,
                _ => return None,
            };
            Some((i, base))
        })?;

        let next = at(position + 1);
        let next_two = (next, at(position + 2));
        let consumed = match next {
            Some('#') | Some('♯') => {
                semitones += 1;
                1
            }
            Some('b') | Some('♭') => {
                semitones -= 1;
                1
            }
            Some('s') if semitones == 4 || semitones == 9 => {
                semitones -= 1;
                1
            }
            _ => match next_two {
                (Some('i'), Some('s')) => {
                    semitones += 1;
                    2
                }
                (Some('e'), Some('s')) => {
                    semitones -= 1;
                    2
                }
                _ => 0,
            },
        };

        let start = chars[position].0;
        let end = chars
            .get(position + 1 + consumed)
            .map(|&(b, _)| b)
            .unwrap_or(text.len());

        Some(NoteMatch {
            note: Note::new(semitones),
            position,
            name: &text[start..end],
            rest: &text[end..],
        })
    }

    /// Render this note's name as it should be spelled in `key`
    pub fn name(&self, key: &Key, style: NotationStyle) -> &'static str {
        let flat = key.is_flat();
        let long = style.long_chord_names;

        match self.semitones_from_c {
            0 => "C",
            1 => match (flat, long) {
                (true, false) => "Db",
                (true, true) => "Des",
                (false, false) => "C#",
                (false, true) => "Cis",
            },
            2 => "D",
            3 => match (flat, long) {
                (true, false) => "Eb",
                (true, true) => "Es",
                (false, false) => "D#",
                (false, true) => "Dis",
            },
            4 => "E",
            5 => "F",
            6 => match (flat, long) {
                (true, false) => "Gb",
                (true, true) => "Ges",
                (false, false) => "F#",
                (false, true) => "Fis",
            },
            7 => "G",
            8 => match (flat, long) {
                (true, false) => "Ab",
                (true, true) => "As",
                (false, false) => "G#",
                (false, true) => "Gis",
            },
            9 => "A",
            10 if style.german_notation => "B",
            10 => match (flat, long) {
                (true, false) => "Bb",
                (true, true) => "Bes",
                (false, false) => "A#",
                (false, true) => "Ais",
            },
            _ if style.german_notation => "H",
            _ => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = NotationStyle::default();
        write!(f, "{}", self.name(&Key::default(), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERNATIONAL: NotationStyle = NotationStyle {
        german_notation: false,
        long_chord_names: false,
    };
    const GERMAN: NotationStyle = NotationStyle {
        german_notation: true,
        long_chord_names: false,
    };

    fn semis(text: &str, style: NotationStyle) -> u8 {
        Note::parse(text, style).unwrap().note.semitones_from_c()
    }

    #[test]
    fn test_normalize() {
        for n in -50..50 {
            let v = normalize(n);
            assert!(v <= 11);
            for k in -3..3 {
                assert_eq!(v, normalize(n + 12 * k));
            }
        }
        assert_eq!(normalize(-1), 11);
        assert_eq!(normalize(12), 0);
    }

    #[test]
    fn test_parse_naturals() {
        let expected = [("C", 0), ("D", 2), ("E", 4), ("F", 5), ("G", 7), ("A", 9), ("B", 11), ("H", 11)];
        for (name, value) in expected {
            assert_eq!(semis(name, INTERNATIONAL), value, "{}", name);
        }
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(semis("C#", INTERNATIONAL), 1);
        assert_eq!(semis("C♯", INTERNATIONAL), 1);
        assert_eq!(semis("Db", INTERNATIONAL), 1);
        assert_eq!(semis("D♭", INTERNATIONAL), 1);
        assert_eq!(semis("Cb", INTERNATIONAL), 11);
        assert_eq!(semis("B#", INTERNATIONAL), 0);
        assert_eq!(semis("Fis", INTERNATIONAL), 6);
        assert_eq!(semis("Ges", INTERNATIONAL), 6);
        assert_eq!(semis("Es", INTERNATIONAL), 3);
        assert_eq!(semis("As", INTERNATIONAL), 8);
        assert_eq!(semis("Ais", INTERNATIONAL), 10);
    }

    #[test]
    fn test_parse_german_b() {
        assert_eq!(semis("B", GERMAN), 10);
        assert_eq!(semis("H", GERMAN), 11);
        assert_eq!(semis("Bb", GERMAN), 10);
        assert_eq!(semis("B♭", GERMAN), 10);
        assert_eq!(semis("B7", GERMAN), 10);
        assert_eq!(semis("B", INTERNATIONAL), 11);
        assert_eq!(semis("Bb", INTERNATIONAL), 10);
    }

    #[test]
    fn test_parse_position_name_and_rest() {
        let m = Note::parse("m7/G#sus", INTERNATIONAL).unwrap();
        assert_eq!(m.position, 3);
        assert_eq!(m.name, "G#");
        assert_eq!(m.rest, "sus");
        assert_eq!(m.end(), 5);

        let m = Note::parse("Am7", INTERNATIONAL).unwrap();
        assert_eq!(m.position, 0);
        assert_eq!(m.name, "A");
        assert_eq!(m.rest, "m7");
    }

    #[test]
    fn test_parse_multibyte_positions() {
        let m = Note::parse("♭♯E♭m", INTERNATIONAL).unwrap();
        assert_eq!(m.position, 2);
        assert_eq!(m.name, "E♭");
        assert_eq!(m.rest, "m");
        assert_eq!(m.note.semitones_from_c(), 3);
    }

    #[test]
    fn test_parse_no_note() {
        assert!(Note::parse("", INTERNATIONAL).is_none());
        assert!(Note::parse("m7", INTERNATIONAL).is_none());
        assert!(Note::parse("sus4", INTERNATIONAL).is_none());
        assert!(Note::parse("c d e", INTERNATIONAL).is_none());
    }

    #[test]
    fn test_modifier_priority() {
        // A sign beats a suffix, and only one modifier is taken
        let m = Note::parse("C#is", INTERNATIONAL).unwrap();
        assert_eq!(m.name, "C#");
        assert_eq!(m.rest, "is");

        // "s" after E contracts before "es" is considered
        let m = Note::parse("Ess", INTERNATIONAL).unwrap();
        assert_eq!(m.name, "Es");
        assert_eq!(m.note.semitones_from_c(), 3);
    }

    #[test]
    fn test_transpose() {
        let c = Note::new(0);
        assert_eq!(c.transpose(2).semitones_from_c(), 2);
        assert_eq!(c.transpose(-1).semitones_from_c(), 11);
        assert_eq!(c.transpose(25).semitones_from_c(), 1);
        assert_eq!(Note::new(11).transpose(1), Note::new(0));
    }

    #[test]
    fn test_transpose_extreme_amounts() {
        // i32::MAX is 7 mod 12, i32::MIN is 4 mod 12
        assert_eq!(Note::new(11).transpose(i32::MAX), Note::new(6));
        assert_eq!(Note::new(11).transpose(i32::MIN), Note::new(3));
        assert_eq!(Note::new(0).transpose(i32::MAX - 6), Note::new(1));
    }

    #[test]
    fn test_names_sharp_and_flat_keys() {
        let sharp = Key::parse("G", INTERNATIONAL).unwrap();
        let flat = Key::parse("F", INTERNATIONAL).unwrap();
        let sharps = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
        let flats = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];
        for v in 0..12 {
            assert_eq!(Note::new(v).name(&sharp, INTERNATIONAL), sharps[v as usize]);
            assert_eq!(Note::new(v).name(&flat, INTERNATIONAL), flats[v as usize]);
        }
    }

    #[test]
    fn test_names_long_and_german() {
        let long = NotationStyle::new(false, true);
        let german_long = NotationStyle::new(true, true);
        let sharp = Key::parse("D", long).unwrap();
        let flat = Key::parse("Es", long).unwrap();

        assert_eq!(Note::new(1).name(&sharp, long), "Cis");
        assert_eq!(Note::new(1).name(&flat, long), "Des");
        assert_eq!(Note::new(3).name(&flat, long), "Es");
        assert_eq!(Note::new(8).name(&flat, long), "As");
        assert_eq!(Note::new(10).name(&sharp, long), "Ais");
        assert_eq!(Note::new(10).name(&flat, long), "Bes");
        assert_eq!(Note::new(11).name(&flat, long), "B");

        assert_eq!(Note::new(10).name(&sharp, german_long), "B");
        assert_eq!(Note::new(10).name(&flat, GERMAN), "B");
        assert_eq!(Note::new(11).name(&sharp, GERMAN), "H");
        assert_eq!(Note::new(6).name(&sharp, german_long), "Fis");
    }

    #[test]
    fn test_render_then_parse_roundtrip() {
        let styles = [
            NotationStyle::new(false, false),
            NotationStyle::new(false, true),
            NotationStyle::new(true, false),
            NotationStyle::new(true, true),
        ];
        for style in styles {
            for key_name in ["C", "F"] {
                let key = Key::parse(key_name, style).unwrap();
                for v in 0..12 {
                    let name = Note::new(v).name(&key, style);
                    let parsed = Note::parse(name, style).unwrap();
                    assert_eq!(parsed.note.semitones_from_c() as i32, v, "{} in {:?}", name, style);
                    assert_eq!(parsed.name, name);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(0).to_string(), "C");
        assert_eq!(Note::new(1).to_string(), "C#");
        assert_eq!(Note::new(10).to_string(), "A#");
    }
}
