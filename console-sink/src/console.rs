//!
//! Console capability interface and host implementations.
//!
//! A [`Console`] exposes the four output channels the sink dispatches to.
//! Hosts frequently provide more (`console.trace()`, `console.info()`), but
//! those carry side effects (stack traces, icons) and are intentionally not
//! part of this interface.
//!

use crate::entry::Metadata;
use cfg_if::cfg_if;
use std::fmt;

/// A positional argument passed to a channel after the leading message.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Plain text; used for `%c` style descriptors.
    Text(String),
    Metadata(Metadata),
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Text(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Text(s)
    }
}

impl From<Metadata> for Argument {
    fn from(metadata: Metadata) -> Self {
        Argument::Metadata(metadata)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Text(text) => f.write_str(text),
            Argument::Metadata(metadata) => match serde_json::to_string(metadata) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{metadata:?}"),
            },
        }
    }
}

/// Console capability set. Every channel takes a leading message followed
/// by zero or more positional arguments and is expected not to fail.
pub trait Console: Send + Sync {
    fn debug(&self, message: &str, args: &[Argument]);
    fn log(&self, message: &str, args: &[Argument]);
    fn warn(&self, message: &str, args: &[Argument]);
    fn error(&self, message: &str, args: &[Argument]);
}

/// Joins a message and its trailing arguments into a single line,
/// space separated, skipping empty text arguments.
pub fn join_arguments(message: &str, args: &[Argument]) -> String {
    let mut line = message.to_string();
    for arg in args {
        if matches!(arg, Argument::Text(text) if text.is_empty()) {
            continue;
        }
        line.push(' ');
        line.push_str(&arg.to_string());
    }
    line
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use js_sys::Array;
        use serde::Serialize;
        use wasm_bindgen::JsValue;

        /// Forwards every channel to the host `console` object, passing
        /// arguments positionally so that `%c` placeholders are honored.
        #[derive(Debug, Default, Clone, Copy)]
        pub struct BrowserConsole;

        impl BrowserConsole {
            fn to_array(message: &str, args: &[Argument]) -> Array {
                let array = Array::new();
                array.push(&JsValue::from_str(message));
                for arg in args {
                    let value = match arg {
                        Argument::Text(text) => JsValue::from_str(text),
                        Argument::Metadata(metadata) => metadata
                            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                            .unwrap_or_else(|_| JsValue::from_str(&arg.to_string())),
                    };
                    array.push(&value);
                }
                array
            }
        }

        impl Console for BrowserConsole {
            fn debug(&self, message: &str, args: &[Argument]) {
                web_sys::console::debug(&Self::to_array(message, args));
            }
            fn log(&self, message: &str, args: &[Argument]) {
                web_sys::console::log(&Self::to_array(message, args));
            }
            fn warn(&self, message: &str, args: &[Argument]) {
                web_sys::console::warn(&Self::to_array(message, args));
            }
            fn error(&self, message: &str, args: &[Argument]) {
                web_sys::console::error(&Self::to_array(message, args));
            }
        }

        /// Console used when none is supplied explicitly.
        pub type DefaultConsole = BrowserConsole;
    } else {
        use ::console::Term;

        /// Terminal console: `debug` and `log` go to stdout,
        /// `warn` and `error` go to stderr.
        #[derive(Debug, Default, Clone, Copy)]
        pub struct StdConsole;

        impl Console for StdConsole {
            fn debug(&self, message: &str, args: &[Argument]) {
                Term::stdout().write_line(&join_arguments(message, args)).ok();
            }
            fn log(&self, message: &str, args: &[Argument]) {
                Term::stdout().write_line(&join_arguments(message, args)).ok();
            }
            fn warn(&self, message: &str, args: &[Argument]) {
                Term::stderr().write_line(&join_arguments(message, args)).ok();
            }
            fn error(&self, message: &str, args: &[Argument]) {
                Term::stderr().write_line(&join_arguments(message, args)).ok();
            }
        }

        /// Console used when none is supplied explicitly.
        pub type DefaultConsole = StdConsole;
    }
}
