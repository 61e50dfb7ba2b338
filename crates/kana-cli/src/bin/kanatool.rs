use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops};
use kana_cli::shell::{ShellOptions, DEFAULT_PROMPT};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji to hiragana converter")]
struct Cli {
    /// Custom romaji table (TOML) replacing the built-in one
    #[arg(long, global = true)]
    romaji: Option<PathBuf>,
    /// Write JSONL traces to this directory instead of stderr
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Prompt printed before each line read from stdin
    #[arg(long, global = true, default_value = DEFAULT_PROMPT)]
    prompt: String,
    /// Also print how each input was segmented
    #[arg(long, global = true)]
    explain: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read romaji lines from stdin and print hiragana (default)
    Repl,
    /// Convert the given arguments, one result per line
    Convert {
        /// Romaji text
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Romaji table operations
    Romaji {
        #[command(subcommand)]
        action: RomajiAction,
    },
}

#[derive(Subcommand)]
enum RomajiAction {
    /// Print the built-in table
    Export,
    /// Check a table file
    Validate {
        /// Table file (TOML)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.trace_dir.as_deref());

    if let Some(path) = &cli.romaji {
        config_ops::romaji_install(path);
    }

    match cli.command {
        None | Some(Command::Repl) => convert_ops::repl_cmd(&ShellOptions {
            prompt: cli.prompt,
            explain: cli.explain,
        }),
        Some(Command::Convert { text }) => convert_ops::convert_cmd(&text, cli.explain),
        Some(Command::Romaji { action }) => match action {
            RomajiAction::Export => config_ops::romaji_export(),
            RomajiAction::Validate { file } => config_ops::romaji_validate(&file),
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn shell_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["kanatool", "--explain", "--prompt", "> "]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.explain);
        assert_eq!(cli.prompt, "> ");
    }

    #[test]
    fn default_prompt_when_omitted() {
        let cli = Cli::try_parse_from(["kanatool", "repl"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Repl)));
        assert_eq!(cli.prompt, DEFAULT_PROMPT);
        assert!(!cli.explain);
    }

    #[test]
    fn explain_after_convert() {
        let cli = Cli::try_parse_from(["kanatool", "convert", "ka", "--explain"]).unwrap();
        assert!(cli.explain);
        assert!(matches!(cli.command, Some(Command::Convert { ref text }) if text == &["ka"]));
    }
}
