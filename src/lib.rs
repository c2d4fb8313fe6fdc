pub mod api;
pub mod chords;
pub mod error;
pub mod key;
pub mod note;
pub mod style;
pub mod symbol;

pub use api::*;
pub use chords::{ChordScanner, ScanMode};
pub use error::*;
pub use key::Key;
pub use note::{Note, NoteMatch};
pub use style::NotationStyle;
pub use symbol::{ChordSymbol, NoteSymbol, NoteSymbols};
