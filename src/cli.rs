//! Command-line interface definition for GameSmith
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for generation, preview export, and history
//! management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GameSmith - generate and revise web mini-games from prompts
///
/// Describe a game in natural language, iterate on the generated
/// HTML/CSS/JS, and save variants to a local history.
#[derive(Parser, Debug, Clone)]
#[command(name = "gamesmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the store database path
    #[arg(long)]
    pub store_path: Option<String>,

    /// Override the model from config
    #[arg(short, long)]
    pub model: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for GameSmith
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a new game, or revise the current one when code exists
    Generate {
        /// Game description or revision instructions
        prompt: String,
    },

    /// Export the current game as a standalone preview document
    Preview {
        /// Output path (defaults to the configured preview.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Save the current game to history
    Save {
        /// Name for the saved game (defaults to the current name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Manage saved games
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Clear the current prompt and code
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the current game and session state
    Show,
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List saved games
    List,

    /// Load a saved game as the current one (full entry id or unique prefix)
    Load {
        /// Entry id
        id: String,
    },

    /// Delete a saved game (full entry id or unique prefix)
    Delete {
        /// Entry id
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate_command() {
        let cli = Cli::try_parse_from(["gamesmith", "generate", "A simple Pong game"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Generate { prompt } = cli.command {
            assert_eq!(prompt, "A simple Pong game");
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_generate_requires_prompt() {
        let cli = Cli::try_parse_from(["gamesmith", "generate"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_preview_with_output() {
        let cli = Cli::try_parse_from(["gamesmith", "preview", "--output", "out.html"]);
        assert!(cli.is_ok());
        if let Commands::Preview { output } = cli.unwrap().command {
            assert_eq!(output, Some(PathBuf::from("out.html")));
        } else {
            panic!("Expected Preview command");
        }
    }

    #[test]
    fn test_cli_parse_save_with_name() {
        let cli = Cli::try_parse_from(["gamesmith", "save", "--name", "Pong v2"]);
        assert!(cli.is_ok());
        if let Commands::Save { name } = cli.unwrap().command {
            assert_eq!(name, Some("Pong v2".to_string()));
        } else {
            panic!("Expected Save command");
        }
    }

    #[test]
    fn test_cli_parse_history_subcommands() {
        let list = Cli::try_parse_from(["gamesmith", "history", "list"]).unwrap();
        assert!(matches!(
            list.command,
            Commands::History {
                command: HistoryCommand::List
            }
        ));

        let load = Cli::try_parse_from(["gamesmith", "history", "load", "abc123"]).unwrap();
        if let Commands::History {
            command: HistoryCommand::Load { id },
        } = load.command
        {
            assert_eq!(id, "abc123");
        } else {
            panic!("Expected history load");
        }

        let delete = Cli::try_parse_from(["gamesmith", "history", "delete", "abc123"]).unwrap();
        assert!(matches!(
            delete.command,
            Commands::History {
                command: HistoryCommand::Delete { .. }
            }
        ));
    }

    #[test]
    fn test_cli_parse_reset_with_yes() {
        let cli = Cli::try_parse_from(["gamesmith", "reset", "--yes"]).unwrap();
        if let Commands::Reset { yes } = cli.command {
            assert!(yes);
        } else {
            panic!("Expected Reset command");
        }
    }

    #[test]
    fn test_cli_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "gamesmith",
            "--config",
            "alt.yaml",
            "--store-path",
            "/tmp/games.db",
            "--model",
            "other-model",
            "show",
        ])
        .unwrap();
        assert_eq!(cli.config, Some("alt.yaml".to_string()));
        assert_eq!(cli.store_path, Some("/tmp/games.db".to_string()));
        assert_eq!(cli.model, Some("other-model".to_string()));
        assert!(matches!(cli.command, Commands::Show));
    }
}
