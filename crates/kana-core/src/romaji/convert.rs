use super::config::MAX_ROMAJI_LEN;
use super::table::SyllableMap;

/// Placeholder emitted for a position no syllable matches.
pub const UNMAPPED: &str = "?";

/// One token of a greedy scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The consumed slice of the input.
    pub romaji: &'a str,
    /// Mapped kana, or `None` when the single consumed char had no mapping.
    pub kana: Option<&'a str>,
}

impl Segment<'_> {
    pub fn rendered(&self) -> &str {
        self.kana.unwrap_or(UNMAPPED)
    }
}

/// Greedy longest-match romaji → hiragana converter over a [`SyllableMap`].
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'m> {
    map: &'m SyllableMap,
}

impl<'m> Transliterator<'m> {
    pub fn new(map: &'m SyllableMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &'m SyllableMap {
        self.map
    }

    /// Convert `input` to hiragana. Unmapped chars become `?`.
    pub fn convert(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 3);
        for seg in self.segment(input) {
            out.push_str(seg.rendered());
        }
        out
    }

    /// Split `input` into tokens, left to right.
    ///
    /// At each position the window shrinks from `MAX_ROMAJI_LEN` chars down to
    /// one; the first mapped window wins. With no match, exactly one char is
    /// consumed as an unmapped segment.
    pub fn segment<'s>(&self, input: &'s str) -> Vec<Segment<'s>>
    where
        'm: 's,
    {
        // Byte offset of every char boundary, including the end.
        let bounds: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let n_chars = bounds.len() - 1;
        let map: &'m SyllableMap = self.map;

        let mut segments = Vec::new();
        let mut i = 0;
        while i < n_chars {
            let max = MAX_ROMAJI_LEN.min(n_chars - i);
            let hit = (1..=max).rev().find_map(|len| {
                let sub = &input[bounds[i]..bounds[i + len]];
                map.get(sub).map(|kana| (len, sub, kana))
            });

            match hit {
                Some((len, romaji, kana)) => {
                    segments.push(Segment {
                        romaji,
                        kana: Some(kana),
                    });
                    i += len;
                }
                None => {
                    let romaji = &input[bounds[i]..bounds[i + 1]];
                    tracing::trace!(position = i, romaji, "unmapped romaji");
                    segments.push(Segment { romaji, kana: None });
                    i += 1;
                }
            }
        }
        segments
    }
}

impl Transliterator<'static> {
    /// Converter over the process-wide table.
    pub fn global() -> Self {
        Self::new(SyllableMap::global())
    }
}

/// Convert `romaji` with the process-wide table.
pub fn convert_to_hiragana(romaji: &str) -> String {
    Transliterator::global().convert(romaji)
}
