use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use kana_core::romaji::{self, RomajiConfigError, SyllableMap};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum TableFileError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] RomajiConfigError),
}

fn read_table(path: &Path) -> Result<String, TableFileError> {
    fs::read_to_string(path).map_err(|source| TableFileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a romaji table file and return its mapping count.
pub fn validate_table_file(path: &Path) -> Result<usize, TableFileError> {
    let content = read_table(path)?;
    Ok(romaji::parse_romaji_toml(&content)?.len())
}

/// Install a romaji table file as the process-wide table.
pub fn install_table_file(path: &Path) -> Result<(), TableFileError> {
    let content = read_table(path)?;
    SyllableMap::init_custom(content)?;
    tracing::info!(path = %path.display(), "custom romaji table installed");
    Ok(())
}

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

pub fn romaji_validate(file: &Path) {
    let n = die!(validate_table_file(file), "Error: {}");
    println!("OK: {n} mappings");
}

pub fn romaji_install(file: &Path) {
    die!(install_table_file(file), "Error: {}");
}
