//! Line-oriented read → convert → print loop.
//!
//! Runs until the reader reports end-of-input. A read error also ends the
//! loop (logged, not propagated); only write errors reach the caller.
//! Bytes that are not valid UTF-8 decode to U+FFFD and convert to `?`.

use std::io::{self, BufRead, Write};

use kana_core::romaji::Segment;
use kana_core::Transliterator;

pub const DEFAULT_PROMPT: &str = "ローマ字を入力してください: ";

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub prompt: String,
    /// Also print how each line was segmented.
    pub explain: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            explain: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellStats {
    pub lines: usize,
    /// Total `?` placeholders emitted.
    pub unmapped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub fn run_shell<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    transliterator: &Transliterator<'_>,
    options: &ShellOptions,
) -> Result<ShellStats, ShellError> {
    let mut stats = ShellStats::default();
    let mut buf = Vec::new();

    loop {
        write!(writer, "{}", options.prompt)?;
        writer.flush()?;

        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::debug!(lines = stats.lines, "end of input");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "input stream failed; stopping");
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let romaji = strip_newline(&line);
        let segments = transliterator.segment(romaji);
        let mut kana = String::new();
        for seg in &segments {
            kana.push_str(seg.rendered());
        }
        let unmapped = segments.iter().filter(|s| s.kana.is_none()).count();
        stats.lines += 1;
        stats.unmapped += unmapped;
        tracing::debug!(romaji, kana = %kana, unmapped, "converted line");

        writeln!(writer, "{kana}")?;
        if options.explain {
            writeln!(writer, "  {}", format_segments(&segments))?;
        }
    }

    // Leave the cursor on a fresh line after the last prompt.
    writeln!(writer)?;
    writer.flush()?;
    Ok(stats)
}

/// Render segments as `kana(romaji) | ...`.
pub fn format_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| format!("{}({})", s.rendered(), s.romaji))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
