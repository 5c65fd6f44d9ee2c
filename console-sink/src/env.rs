//!
//! Detection of the console environment, used to pick the [`Formatter`].
//!
//! Styled output is only chosen when a browser-style global exposes a
//! `navigator.userAgent` naming a known browser. The result of probing
//! the ambient global is computed once per process.
//!

use crate::format::Formatter;
use cfg_if::cfg_if;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    // case-sensitive
    static ref BROWSER_USER_AGENT: Regex =
        Regex::new(r"FireFox|Chrome|Chromium").expect("invalid browser user agent pattern");

    static ref AMBIENT: Environment = probe();
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Environment {
    /// Text terminal, or any host without a browser global.
    #[default]
    Terminal,
    /// Host exposing a `navigator` global with the given user agent.
    Browser { user_agent: String },
}

impl Environment {
    pub fn browser(user_agent: impl Into<String>) -> Self {
        Environment::Browser {
            user_agent: user_agent.into(),
        }
    }

    /// Returns the ambient environment of the current process.
    pub fn detect() -> Environment {
        AMBIENT.clone()
    }

    /// True if the console of this environment interprets `%c` styling.
    pub fn is_styled(&self) -> bool {
        match self {
            Environment::Terminal => false,
            Environment::Browser { user_agent } => BROWSER_USER_AGENT.is_match(user_agent),
        }
    }
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn probe() -> Environment {
            use js_sys::Reflect;
            use wasm_bindgen::JsValue;

            let global = js_sys::global();
            Reflect::get(&global, &JsValue::from_str("navigator"))
                .ok()
                .filter(|navigator| navigator.is_object())
                .and_then(|navigator| Reflect::get(&navigator, &JsValue::from_str("userAgent")).ok())
                .and_then(|user_agent| user_agent.as_string())
                .map(Environment::browser)
                .unwrap_or(Environment::Terminal)
        }
    } else {
        fn probe() -> Environment {
            Environment::Terminal
        }
    }
}

/// Selects the formatter for `environment`.
pub fn detect_formatter(environment: &Environment) -> Formatter {
    if environment.is_styled() {
        Formatter::Styled
    } else {
        Formatter::Plain
    }
}
