use crate::config::Config;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::VecDeque};

///
/// Level
///

#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug, // least severe
    #[default]
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Command,
    Config,
    Script,
}

///
/// Entry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub crate_name: String,
    pub topic: Option<String>,
    pub level: Level,
    pub message: String,
}

thread_local! {
    static BUFFER: RefCell<VecDeque<Entry>> = const { RefCell::new(VecDeque::new()) };
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;

        if $crate::log::__enabled(level) {
            let topic_opt: Option<&str> = $topic;
            let message = format!($fmt $(, $arg)*);
            let crate_name = env!("CARGO_PKG_NAME");

            $crate::log::__record(crate_name, topic_opt, level, &message);

            let name_disp = $crate::utils::format::ellipsize_middle(crate_name, 9, 4, 4);
            let name_centered = format!("{:^9}", name_disp);

            let final_msg = if let Some(t) = topic_opt {
                format!("[{t}] {message}")
            } else {
                message
            };

            let (color, reset) = match level {
                $crate::log::Level::Ok    => ("\x1b[32m", "\x1b[0m"),
                $crate::log::Level::Info  => ("\x1b[34m", "\x1b[0m"),
                $crate::log::Level::Warn  => ("\x1b[33m", "\x1b[0m"),
                $crate::log::Level::Error => ("\x1b[31m", "\x1b[0m"),
                $crate::log::Level::Debug => ("", ""),
            };

            let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
            eprintln!("{label}|{name_centered}| {final_msg}");
        }
    }};
}

/// Most recent entries for this thread, oldest first.
#[must_use]
pub fn recent() -> Vec<Entry> {
    BUFFER.with(|b| b.borrow().iter().cloned().collect())
}

pub fn clear() {
    BUFFER.with(|b| b.borrow_mut().clear());
}

///
/// Helpers
///

#[doc(hidden)]
#[must_use]
pub fn __enabled(level: Level) -> bool {
    level >= Config::current().log.level
}

#[doc(hidden)]
pub fn __record(crate_name: &str, topic: Option<&str>, level: Level, message: &str) {
    let max_entries = Config::current().log.max_entries;

    BUFFER.with(|b| {
        let mut buf = b.borrow_mut();
        buf.push_back(Entry {
            crate_name: crate_name.to_string(),
            topic: topic.map(str::to_string),
            level,
            message: message.to_string(),
        });
        while buf.len() > max_entries {
            buf.pop_front();
        }
    });
}

///
/// TESTS
///
