//!
//! Entry formatters.
//!
//! [`Formatter::Plain`] renders a single line suitable for text terminals.
//! [`Formatter::Styled`] renders a `%c` template followed by one CSS style
//! argument per placeholder; only browser devtools consoles interpret it,
//! anywhere else the placeholders show up verbatim.
//!

use crate::console::Argument;
use crate::level::Level;
use serde::{Deserialize, Serialize};

const BOLD: &str = "font-weight:bold;";

/// Arguments handed to a console channel: the leading message followed
/// by positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub message: String,
    pub args: Vec<Argument>,
}

impl Rendered {
    pub fn new(message: String) -> Self {
        Self {
            message,
            args: Vec::new(),
        }
    }

    pub fn push(&mut self, arg: impl Into<Argument>) {
        self.args.push(arg.into());
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    #[default]
    Plain,
    Styled,
}

impl Formatter {
    pub fn format(&self, level: Level, logger: &str, message: &str) -> Rendered {
        match self {
            Formatter::Plain => format_plain(level, logger, message),
            Formatter::Styled => format_styled(level, logger, message),
        }
    }
}

fn format_plain(level: Level, logger: &str, message: &str) -> Rendered {
    Rendered::new(format!("{} [{logger}]: {message}", plain_icon(level)))
}

fn format_styled(level: Level, logger: &str, message: &str) -> Rendered {
    let color = color_css(level);
    let mut rendered = Rendered::new(format!(
        "%c{}%c[%c{logger}%c]%c {message}",
        styled_icon(level)
    ));
    rendered.push(format!("{color}{BOLD}"));
    rendered.push(BOLD);
    rendered.push(format!("{color}{BOLD}"));
    rendered.push(BOLD);
    rendered.push("");
    rendered
}

fn plain_icon(level: Level) -> &'static str {
    match level {
        Level::Trace => "\u{2734}\u{fe0e}",
        Level::Debug => "\u{21d2}",
        Level::Info => "\u{2705}",
        Level::Warn => "\u{26a0}",
        Level::Error => "\u{1f4a5}",
    }
}

// browsers decorate warn/error (and info) entries themselves
fn styled_icon(level: Level) -> &'static str {
    match level {
        Level::Trace => "\u{2192} ",
        Level::Debug => "\u{21d2} ",
        Level::Info | Level::Warn | Level::Error => "",
    }
}

fn color_css(level: Level) -> &'static str {
    match level {
        Level::Trace => "color: #ff00ff;",
        Level::Debug => "color: #0000ff;",
        Level::Info => "color: #00ff00;",
        Level::Warn => "color: #ffff00;",
        Level::Error => "color: #ff0000;",
    }
}
