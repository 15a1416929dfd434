//! glint-cli: command-line front end
//!
//! Every command renders through `glint-core` and writes to a [`Sink`], so the
//! whole dispatch can be exercised against an in-memory sink.

pub mod cli;

use std::process::ExitCode;

use anyhow::Result;
use glint_core::{emoji, Color, Console, Message, Sink, Style};
use serde::Serialize;

use crate::cli::{unescape_newlines, Cli, Command};

/// Parse arguments, initialize logging and run the selected command
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut console = Console::stdout();
    match execute(cli.command, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("glint failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run one command against `console`
pub fn execute<S: Sink>(command: Command, console: &mut Console<S>) -> Result<()> {
    log::debug!("Running {:?}", command);
    match command {
        Command::Log {
            text,
            color,
            styles,
            frame,
        } => {
            let mut message = Message::new()
                .message(unescape_newlines(&text))
                .set_style(styles);
            if let Some(color) = color {
                message = message.set_color(color);
            }
            if frame {
                message = message.set_frame();
            }
            console.send(message)?;
        }
        Command::Format {
            text,
            color,
            styles,
        } => {
            let text = unescape_newlines(&text);
            console.write(&glint_core::format(&text, color.as_deref(), &styles))?;
        }
        Command::Frame { text, multi_line } => {
            let text = unescape_newlines(&text);
            let framed = if multi_line {
                glint_core::frame_multi_line(&text)
            } else {
                glint_core::frame(&text)
            };
            console.write(&framed)?;
        }
        Command::Strike { text } => console.write(&glint_core::strike(&text))?,
        Command::List { items } => {
            // list() already ends every item with a newline
            let rendered = glint_core::list(&items);
            console.write(rendered.trim_end_matches('\n'))?;
        }
        Command::Emoji { name } => console.write(emoji(&name))?,
        Command::Registry { json } => {
            let registry = Registry::collect();
            if json {
                console.write(&serde_json::to_string_pretty(&registry)?)?;
            } else {
                for line in registry.table_lines() {
                    console.write(&line)?;
                }
            }
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Entry {
    name: &'static str,
    value: &'static str,
}

#[derive(Debug, Serialize)]
struct Registry {
    colors: Vec<Entry>,
    styles: Vec<Entry>,
    emoji: Vec<Entry>,
}

impl Registry {
    fn collect() -> Self {
        Self {
            colors: Color::ALL
                .iter()
                .map(|c| Entry {
                    name: c.name(),
                    value: c.sgr(),
                })
                .collect(),
            styles: Style::ALL
                .iter()
                .map(|s| Entry {
                    name: s.name(),
                    value: s.sgr(),
                })
                .collect(),
            emoji: emoji::entries()
                .map(|(name, value)| Entry { name, value })
                .collect(),
        }
    }

    fn table_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push("colors:".to_string());
        for entry in &self.colors {
            let sample = glint_core::color(entry.name, Some(entry.name));
            lines.push(format!("  {:<14} {:<6} {}", entry.name, entry.value, sample));
        }
        lines.push("styles:".to_string());
        for entry in &self.styles {
            let sample = glint_core::style(entry.name, Some(entry.name));
            lines.push(format!("  {:<14} {:<6} {}", entry.name, entry.value, sample));
        }
        lines.push("emoji:".to_string());
        for entry in &self.emoji {
            lines.push(format!("  {:<22} {}", entry.name, entry.value));
        }
        lines
    }
}
