//! Runs in its own process: installing a custom table is one-shot and
//! changes the process-wide table for every later lookup.

use kana_core::romaji::{RomajiConfigError, SyllableMap};
use kana_core::{convert_to_hiragana, Transliterator};

const CUSTOM: &str = r#"
[mappings]
ka = "カ"
n = "ん"
"#;

#[test]
fn custom_table_installs_once_and_serves_global() {
    SyllableMap::init_custom(CUSTOM.to_string()).unwrap();

    let err = SyllableMap::init_custom(CUSTOM.to_string()).unwrap_err();
    assert!(matches!(err, RomajiConfigError::AlreadyInitialized));

    assert_eq!(SyllableMap::global().len(), 2);
    assert_eq!(convert_to_hiragana("kan"), "カん");
    // Built-in syllables are gone.
    assert_eq!(convert_to_hiragana("a"), "?");
    assert_eq!(Transliterator::global().convert("kya"), "???");

    // The table is fixed once served.
    let err = SyllableMap::init_custom("[mappings]\na = \"あ\"\n".to_string()).unwrap_err();
    assert!(matches!(err, RomajiConfigError::AlreadyInitialized));
    assert_eq!(convert_to_hiragana("a"), "?");
}
