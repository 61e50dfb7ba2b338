//! Romaji-to-hiragana conversion.
//!
//! The table maps 1–3 letter romaji syllables to a hiragana token. Conversion
//! always takes the longest mapped syllable at the cursor and emits `?` for a
//! position where nothing matches.

mod config;
mod convert;
mod table;

pub use config::{default_toml, parse_romaji_toml, RomajiConfigError, MAX_ROMAJI_LEN};
pub use convert::{convert_to_hiragana, Segment, Transliterator, UNMAPPED};
pub use table::SyllableMap;
