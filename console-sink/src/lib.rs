//!
//! [`workflow_console_sink`] is a part of the [`workflow-rs`](https://crates.io/workflow-rs)
//! framework, subset of which is designed to function uniformally across multiple
//! environments including native Rust and WASM-browser targets.
//!
//! The crate provides [`ConsoleSink`], a receiver for batches of structured
//! [`LogEntry`] records produced by an upstream logging pipeline. Each entry
//! is rendered to a [`Console`] capability object:
//!
//! - `trace` and `debug` entries go to `console.debug()`
//! - `info` entries go to `console.log()`
//! - `warn` and `error` entries go to `console.warn()` / `console.error()`
//!
//! When running natively, entries are rendered as plain text lines such as
//! `✅ [server]: listening`. In a browser whose user agent names a known
//! browser, entries are rendered using `%c` CSS styling understood by the
//! devtools console.
//!
//! Entry metadata is passed to the console as a trailing argument only when
//! the sink is created with [`Options::include_metadata`] enabled.
//!
//! ## Example:
//!
//! ```
//! use workflow_console_sink::prelude::*;
//!
//! let sink = ConsoleSink::with_options(
//!     Arc::new(DefaultConsole),
//!     Options::default().with_include_metadata(true),
//! );
//! sink.write_sync(&[LogEntry::new("server", Level::Info, "listening").with_meta("port", 8080)])?;
//! assert_eq!(sink.messages_written(), 1);
//! ```
//!

pub mod channel;
pub mod console;
pub mod entry;
pub mod env;
pub mod error;
pub mod format;
pub mod level;
pub mod result;
pub mod sink;

pub use self::channel::{resolve_channel, Channel, LogMethod};
pub use self::console::{Argument, Console, DefaultConsole};
pub use self::entry::{LogEntry, Metadata};
pub use self::env::{detect_formatter, Environment};
pub use self::error::Error;
pub use self::format::{Formatter, Rendered};
pub use self::level::Level;
pub use self::result::Result;
pub use self::sink::{ConsoleSink, Handler, Options};

pub mod prelude {
    pub use super::channel::*;
    pub use super::console::*;
    pub use super::entry::*;
    pub use super::env::*;
    pub use super::format::*;
    pub use super::level::*;
    pub use super::sink::*;
    pub use std::sync::Arc;
}
