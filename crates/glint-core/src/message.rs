//! Fluent message builder
//!
//! A [`Message`] accumulates text, color, styles and a frame flag across
//! chained calls. Each call takes and returns the builder by value, and
//! [`Message::send`] consumes it and hands back a fresh empty one, so nothing
//! from a sent message can bleed into the next.
//!
//! ```no_run
//! use glint_core::{Console, Message};
//!
//! let mut console = Console::stdout();
//! let next = Message::new()
//!     .message("deployed")
//!     .set_color("green")
//!     .set_style(["bold"])
//!     .set_frame()
//!     .send(&mut console)?;
//! assert_eq!(next, Message::default());
//! # Ok::<(), glint_core::SinkError>(())
//! ```
//!
//! A `Message` carries no synchronization. Sharing one between callers
//! requires external locking.

use crate::console::{Console, DEFAULT_LOG_COLOR};
use crate::format::format;
use crate::frame::frame;
use crate::sink::{Sink, SinkError};

/// Accumulated render request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    text: String,
    color: Option<String>,
    styles: Vec<String>,
    framed: bool,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the color by name
    pub fn set_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replace the styles with `styles`, applied in the given order
    pub fn set_style<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// Draw a frame around the text on emission
    pub fn set_frame(mut self) -> Self {
        self.framed = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn is_framed(&self) -> bool {
        self.framed
    }

    /// Render without emitting.
    ///
    /// The frame is drawn first, then the color (the log default when none
    /// was set) and the styles are wrapped around it.
    pub fn render(&self) -> String {
        let body = if self.framed {
            frame(&self.text)
        } else {
            self.text.clone()
        };
        let color = self.color.as_deref().unwrap_or(DEFAULT_LOG_COLOR.name());
        format(&body, Some(color), &self.styles)
    }

    /// Emit through `console` and return a fresh empty message
    pub fn send<S: Sink>(self, console: &mut Console<S>) -> Result<Message, SinkError> {
        console.send(self)
    }
}
