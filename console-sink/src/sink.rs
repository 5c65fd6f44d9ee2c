//!
//! [`ConsoleSink`] renders batches of [`LogEntry`] records to a [`Console`].
//!

use crate::channel::resolve_channel;
use crate::console::{Argument, Console};
use crate::entry::LogEntry;
use crate::env::{detect_formatter, Environment};
use crate::format::Formatter;
use crate::result::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Receiver side of the upstream logging pipeline.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn write(&self, entries: &[LogEntry]) -> Result<()>;
}

/// Construction-time sink configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pass non-empty entry metadata to the channel as a trailing argument.
    pub include_metadata: bool,
    /// Console environment; detected from the process when `None`.
    pub environment: Option<Environment>,
    /// Explicit formatter, overriding environment based selection.
    pub formatter: Option<Formatter>,
}

impl Options {
    pub fn with_include_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    fn select_formatter(&self) -> Formatter {
        match (&self.formatter, &self.environment) {
            (Some(formatter), _) => *formatter,
            (None, Some(environment)) => detect_formatter(environment),
            (None, None) => detect_formatter(&Environment::detect()),
        }
    }
}

pub struct ConsoleSink {
    console: Arc<dyn Console>,
    formatter: Formatter,
    include_metadata: bool,
    messages_written: AtomicUsize,
}

impl ConsoleSink {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self::with_options(console, Options::default())
    }

    pub fn with_options(console: Arc<dyn Console>, options: Options) -> Self {
        let formatter = options.select_formatter();
        log::debug!(
            "console sink: {formatter:?} formatter, metadata {}",
            if options.include_metadata { "included" } else { "excluded" }
        );

        Self {
            console,
            formatter,
            include_metadata: options.include_metadata,
            messages_written: AtomicUsize::new(0),
        }
    }

    /// Creates a sink with [`Options`] loaded from a JSON document.
    pub fn try_from_json(console: Arc<dyn Console>, json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        Ok(Self::with_options(console, options))
    }

    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    pub fn include_metadata(&self) -> bool {
        self.include_metadata
    }

    /// Number of entries rendered since construction.
    pub fn messages_written(&self) -> usize {
        self.messages_written.load(Ordering::SeqCst)
    }

    /// Renders `entries` in order. Completes without suspending; the
    /// future is ready on its first poll.
    ///
    /// Fails with [`Error::InvalidLevel`](crate::error::Error::InvalidLevel)
    /// on the first entry carrying an unknown level. Entries preceding it
    /// remain written and counted.
    pub async fn write(&self, entries: &[LogEntry]) -> Result<()> {
        self.write_sync(entries)
    }

    /// Synchronous variant of [`ConsoleSink::write`].
    pub fn write_sync(&self, entries: &[LogEntry]) -> Result<()> {
        for entry in entries {
            self.render(entry)?;
        }
        Ok(())
    }

    fn render(&self, entry: &LogEntry) -> Result<()> {
        let level = entry.severity().inspect_err(|_| {
            log::warn!(
                "console sink: dropping batch at entry from `{}` with unknown level `{}`",
                entry.logger,
                entry.level
            );
        })?;

        let console = self.console.as_ref();
        let method = resolve_channel(console, level);
        let mut rendered = self.formatter.format(level, &entry.logger, &entry.message);
        if self.include_metadata && !entry.metadata.is_empty() {
            rendered.push(Argument::Metadata(entry.metadata.clone()));
        }

        method(console, &rendered.message, &rendered.args);
        self.messages_written.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl Handler for ConsoleSink {
    async fn write(&self, entries: &[LogEntry]) -> Result<()> {
        self.write_sync(entries)
    }
}
