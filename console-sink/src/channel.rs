//!
//! Level to console channel mapping.
//!

use crate::console::{Argument, Console};
use crate::level::Level;
use std::fmt;

/// Typed reference to one of the [`Console`] channel methods.
pub type LogMethod<C> = fn(&C, &str, &[Argument]);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    Debug,
    Log,
    Warn,
    Error,
}

impl Channel {
    pub fn for_level(level: Level) -> Channel {
        match level {
            // not `console.trace()`, which prints a stack trace with every entry
            Level::Trace => Channel::Debug,
            Level::Debug => Channel::Debug,
            // not `console.info()`, which gets an icon in some browsers
            Level::Info => Channel::Log,
            Level::Warn => Channel::Warn,
            Level::Error => Channel::Error,
        }
    }

    pub fn method<C: Console + ?Sized>(&self) -> LogMethod<C> {
        match self {
            Channel::Debug => C::debug,
            Channel::Log => C::log,
            Channel::Warn => C::warn,
            Channel::Error => C::error,
        }
    }

    /// Host method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Debug => "debug",
            Channel::Log => "log",
            Channel::Warn => "warn",
            Channel::Error => "error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the channel method of `console` that receives entries of `level`.
pub fn resolve_channel<C: Console + ?Sized>(_console: &C, level: Level) -> LogMethod<C> {
    Channel::for_level(level).method::<C>()
}
