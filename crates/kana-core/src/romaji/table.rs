use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, validate_key, RomajiConfigError, DEFAULT_TOML};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable romaji → hiragana table.
///
/// Each key holds one or more candidates in insertion order. The last
/// candidate is the default: in the built-in table `ji` yields ぢ and `zu`
/// yields づ, with じ and ず kept as earlier candidates.
#[derive(Debug, Clone)]
pub struct SyllableMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl SyllableMap {
    /// Set a custom table before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static SyllableMap {
        static INSTANCE: OnceLock<SyllableMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = SyllableMap::from_toml(toml_str).expect("romaji TOML must be valid");
            tracing::debug!(
                mappings = map.len(),
                custom = CUSTOM_TOML.get().is_some(),
                "romaji table initialized"
            );
            map
        })
    }

    /// The built-in table.
    pub fn default_table() -> Self {
        Self::from_toml(DEFAULT_TOML).expect("romaji TOML must be valid")
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        Ok(Self {
            entries: parse_romaji_toml(toml_str)?,
        })
    }

    /// Bulk insert. A repeated key appends a candidate, which becomes the
    /// key's new default.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RomajiConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, kana) in pairs {
            let key = key.into();
            let kana = kana.into();
            validate_key(&key)?;
            if kana.is_empty() {
                return Err(RomajiConfigError::EmptyValue(key));
            }
            let candidates = entries.entry(key).or_default();
            if let Some(prev) = candidates.last() {
                tracing::trace!(shadowed = %prev, new = %kana, "duplicate romaji key");
            }
            candidates.push(kana);
        }
        if entries.is_empty() {
            return Err(RomajiConfigError::Empty);
        }
        Ok(Self { entries })
    }

    /// Default kana for `romaji`, if mapped.
    pub fn get(&self, romaji: &str) -> Option<&str> {
        self.entries
            .get(romaji)
            .and_then(|c| c.last())
            .map(String::as_str)
    }

    /// Every kana sharing `romaji`, oldest first. Empty if unmapped.
    pub fn candidates(&self, romaji: &str) -> &[String] {
        self.entries.get(romaji).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, romaji: &str) -> bool {
        self.entries.contains_key(romaji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(romaji, default kana)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, c)| c.last().map(|v| (k.as_str(), v.as_str())))
    }
}
