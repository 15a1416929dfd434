//! CLI argument parsing for glint

use clap::{Parser, Subcommand};

/// glint - Colors, styles, frames and emoji for terminal text
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Colors, styles, frames and emoji for terminal text")]
#[command(version)]
pub struct Cli {
    /// Log level (diagnostics go to stderr)
    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Build a message and print it (defaults to blue)
    Log {
        text: String,
        /// Color name
        #[arg(short = 'c', long = "color")]
        color: Option<String>,
        /// Style name, repeatable; applied in order
        #[arg(short = 's', long = "style")]
        styles: Vec<String>,
        /// Draw a frame around the text
        #[arg(long = "frame")]
        frame: bool,
    },

    /// Format text and print it (defaults to green)
    Format {
        text: String,
        #[arg(short = 'c', long = "color")]
        color: Option<String>,
        #[arg(short = 's', long = "style")]
        styles: Vec<String>,
    },

    /// Draw a box around text
    Frame {
        text: String,
        /// Frame every line, sharing the widest line's border
        #[arg(short = 'm', long = "multi-line")]
        multi_line: bool,
    },

    /// Cross text out
    Strike { text: String },

    /// Print a bullet list
    List { items: Vec<String> },

    /// Print an emoji by name
    Emoji { name: String },

    /// Print the color, style and emoji tables
    Registry {
        /// Emit JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Turn literal `\n` sequences from the shell into line breaks
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
