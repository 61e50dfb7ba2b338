//! Romaji-to-hiragana transliteration.
//!
//! The lookup table lives in [`romaji::SyllableMap`]; [`romaji::Transliterator`]
//! segments input with a greedy longest-match scan over it.

pub mod romaji;

pub use romaji::{convert_to_hiragana, SyllableMap, Transliterator};
