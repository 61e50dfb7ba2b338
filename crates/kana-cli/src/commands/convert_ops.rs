use std::io::{self, Write};
use std::process;

use kana_core::Transliterator;

use crate::shell::{format_segments, run_shell, ShellOptions};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Write one conversion per input, optionally followed by its segments.
pub fn write_conversions<W: Write>(
    mut out: W,
    transliterator: &Transliterator<'_>,
    inputs: &[String],
    explain: bool,
) -> io::Result<()> {
    for input in inputs {
        writeln!(out, "{}", transliterator.convert(input))?;
        if explain {
            writeln!(out, "  {}", format_segments(&transliterator.segment(input)))?;
        }
    }
    Ok(())
}

pub fn convert_cmd(inputs: &[String], explain: bool) {
    let t = Transliterator::global();
    let stdout = io::stdout();
    die!(
        write_conversions(stdout.lock(), &t, inputs, explain),
        "Error writing output: {}"
    );
}

pub fn repl_cmd(options: &ShellOptions) {
    let t = Transliterator::global();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = die!(
        run_shell(stdin.lock(), stdout.lock(), &t, options),
        "Error: {}"
    );
    tracing::info!(lines = stats.lines, unmapped = stats.unmapped, "shell finished");
}
