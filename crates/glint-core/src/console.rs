//! Console - rendering front end bound to a sink

use crate::color::Color;
use crate::format::format;
use crate::message::Message;
use crate::sink::{Sink, SinkError, StdoutSink};

/// Color used by [`Console::log`] and unset [`Message`] colors
pub const DEFAULT_LOG_COLOR: Color = Color::Blue;

/// Writes rendered text to a [`Sink`]
#[derive(Debug, Default)]
pub struct Console<S: Sink> {
    sink: S,
}

impl Console<StdoutSink> {
    /// Console writing to standard output
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }
}

impl<S: Sink> Console<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Format `message` and write it immediately.
    ///
    /// With `color == None` the message is colored [`DEFAULT_LOG_COLOR`].
    pub fn log<T: AsRef<str>>(
        &mut self,
        message: &str,
        color: Option<&str>,
        styles: &[T],
    ) -> Result<(), SinkError> {
        let color = color.unwrap_or(DEFAULT_LOG_COLOR.name());
        self.write(&format(message, Some(color), styles))
    }

    /// Write `message` as-is, followed by a line terminator
    pub fn write(&mut self, message: &str) -> Result<(), SinkError> {
        self.sink.write_line(message)
    }

    /// Emit a built message and return a fresh empty one
    pub fn send(&mut self, message: Message) -> Result<Message, SinkError> {
        let rendered = message.render();
        log::trace!(
            "Sending message ({} bytes, framed: {})",
            rendered.len(),
            message.is_framed()
        );
        self.write(&rendered)?;
        Ok(Message::default())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
