use std::collections::BTreeMap;

use serde::Deserialize;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Longest romaji key the table accepts, in characters.
pub const MAX_ROMAJI_LEN: usize = 3;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, KanaValue>,
}

/// A mapping value: one kana, or every kana sharing the romanization.
#[derive(Deserialize)]
#[serde(untagged)]
enum KanaValue {
    Single(String),
    Many(Vec<String>),
}

impl KanaValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            KanaValue::Single(s) => vec![s],
            KanaValue::Many(v) => v,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid romaji key {0:?}: expected 1-3 lowercase ASCII letters")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Returns the embedded default table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parse TOML text into a sorted `BTreeMap<romaji, candidates>`.
///
/// Candidates keep their listed order; the last one is the default.
pub fn parse_romaji_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in config.mappings {
        validate_key(&key)?;
        let candidates = value.into_vec();
        if candidates.is_empty() || candidates.iter().any(|c| c.is_empty()) {
            return Err(RomajiConfigError::EmptyValue(key));
        }
        map.insert(key, candidates);
    }

    Ok(map)
}

pub(crate) fn validate_key(key: &str) -> Result<(), RomajiConfigError> {
    let valid = (1..=MAX_ROMAJI_LEN).contains(&key.len())
        && key.bytes().all(|b| b.is_ascii_lowercase());
    if valid {
        Ok(())
    } else {
        Err(RomajiConfigError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
a = "あ"
ka = "か"
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], vec!["あ"]);
        assert_eq!(map["ka"], vec!["か"]);
    }

    #[test]
    fn parse_list_value_keeps_order() {
        let toml = r#"
[mappings]
zu = ["ず", "づ"]
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map["zu"], vec!["ず", "づ"]);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        assert_eq!(map.len(), 102);
        assert_eq!(map["ji"], vec!["じ", "ぢ"]);
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_romaji_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
[mappings]
\"あ\" = \"a\"
";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_uppercase_key() {
        let toml = r#"
[mappings]
Ka = "か"
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_key_too_long() {
        let toml = r#"
[mappings]
xtsu = "っ"
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(ref k) if k == "xtsu"));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
a = ""
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_empty_list() {
        let toml = r#"
[mappings]
ji = []
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(ref k) if k == "ji"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
