//! glint-core: Terminal text decoration library
//!
//! This crate provides the building blocks for decorating terminal output:
//! - Named color and style tables mapped to ANSI SGR parameters
//! - Escape-sequence composition (color, nested styles, strikethrough)
//! - Box frames sized by display width, including wide characters
//! - Bullet lists and emoji lookup
//! - A fluent message builder and sinks for emitting the result
//!
//! Unknown color, style and emoji names are never errors: the affected wrap
//! is skipped (or the emoji is empty) and the rest of the output is kept.

pub mod color;
pub mod console;
pub mod emoji;
pub mod format;
pub mod frame;
pub mod list;
pub mod message;
pub mod sink;
pub mod style;
pub mod width;

pub use color::{resolve_color, Color};
pub use console::{Console, DEFAULT_LOG_COLOR};
pub use emoji::emoji;
pub use format::{color, format, paint, strike, style, wrap, DEFAULT_FORMAT_COLOR};
pub use frame::{frame, frame_multi_line, FrameGlyphs};
pub use list::list;
pub use message::Message;
pub use sink::{MemorySink, Sink, SinkError, StdoutSink, WriterSink};
pub use style::{resolve_style, Style};
pub use width::display_width;
