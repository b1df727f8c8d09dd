//! Command-line argument parsing for the `leader` tool
//!
//! Supports:
//! - Validating a keybinding tree
//! - Walking a key sequence through the tree
//! - Printing the glyph table
//! - Writing the default configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use unicode_segmentation::UnicodeSegmentation;

use crate::keys::glyphs;

/// Inspect and exercise a leader-key configuration
#[derive(Parser, Debug)]
#[command(name = "leader", version, about = "Leader-key launcher configuration tool")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report validation problems in the keybinding tree
    Validate {
        /// Config file to check instead of the configured one
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Feed a key sequence to the navigator and show where it lands
    Walk {
        /// Keys to press; names such as `left`, `space` or `esc` are accepted
        #[arg(value_name = "KEYS", required = true)]
        keys: Vec<String>,

        /// Config file to use instead of the configured one
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the key glyph table
    Glyphs,

    /// Write the default configuration if none exists
    Init,

    /// Show or change saved preferences
    Settings {
        /// Match keys by US QWERTY position instead of the active layout
        #[arg(long, value_name = "BOOL")]
        force_standard_layout: Option<bool>,
    },
}

/// Turn a command-line key argument into a glyph
///
/// Single characters are taken as typed; longer arguments are looked up as
/// key names. Returns `None` for unknown names.
pub fn parse_key(arg: &str) -> Option<String> {
    if arg.graphemes(true).count() == 1 {
        return Some(glyphs::normalize(arg).to_string());
    }
    glyphs::glyph_for_name(arg).map(str::to_string)
}
