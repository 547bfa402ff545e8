//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tstrip - inspect, check and normalize terminal strip documents
#[derive(Parser, Debug)]
#[command(name = "tstrip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display a terminal strip
    #[command(
        name = "show",
        long_about = "Display a terminal strip document.\n\n\
            Prints the strip's metadata, then every physical terminal from left \
            to right with its levels, then the bridges and the terminals they tie \
            together. Problems recovered while loading are reported as warnings.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Human-readable layout
    tstrip show X1.xml

    # Machine-readable layout for scripting
    tstrip show X1.xml --json

READING THE OUTPUT:
    [0] 1a2b3c4d             <- physical terminal, position 0
        0: L1 (generic)      <- level 0, label L1
        1: L2 (generic) *    <- level 1, bridged"
    )]
    Show {
        /// Strip document to read
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a terminal strip document
    #[command(
        name = "verify",
        long_about = "Load a terminal strip document and check its invariants.\n\n\
            Every problem recovered while loading is printed as a warning. The \
            loaded strip is then verified: stacking, levels, bridge membership \
            and the element index. Exits non-zero if the document needed recovery \
            or verification fails.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check before committing a document
    tstrip verify X1.xml

    # Only the exit status
    tstrip -q verify X1.xml"
    )]
    Verify {
        /// Strip document to check
        file: PathBuf,
    },

    /// Rewrite a terminal strip document in canonical form
    #[command(
        name = "normalize",
        long_about = "Load a terminal strip document and write it back.\n\n\
            The written document keeps physical terminals in strip order, real \
            terminals bottom level first with contiguous levels, and drops \
            anything that could not be recovered while loading.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Rewrite in place
    tstrip normalize X1.xml

    # Write to another file
    tstrip normalize X1.xml -o X1.clean.xml"
    )]
    Normalize {
        /// Strip document to read
        file: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify tstrip configuration.\n\n\
            Configuration is read from $TSTRIP_CONFIG, \
            $XDG_CONFIG_HOME/tstrip/config.toml or ~/.tstrip/config.toml.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all configuration values
    tstrip config list

    # Get a specific value
    tstrip config get bridges.palette

    # Set a value
    tstrip config set bridges.palette '#ff0000,#0000ff'"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for tstrip commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    tstrip completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    tstrip completion zsh >> ~/.zshrc

    # Fish
    tstrip completion fish > ~/.config/fish/completions/tstrip.fish

    # PowerShell
    tstrip completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
