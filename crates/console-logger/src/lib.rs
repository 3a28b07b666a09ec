//! Console Logger
//!
//! `log` backend for WASM frontends. Every record is written to the browser
//! console as `[target] message`, using the console method that matches the
//! record level so devtools filtering keeps working.

use log::{Level, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Console method a record is routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    /// Trace and debug both go to `console.debug`
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Error => ConsoleMethod::Error,
            Level::Warn => ConsoleMethod::Warn,
            Level::Info => ConsoleMethod::Info,
            Level::Debug | Level::Trace => ConsoleMethod::Debug,
        }
    }
}

/// Format a record as a single console line
pub fn format_line(target: &str, args: &std::fmt::Arguments<'_>) -> String {
    // Only keep the last path segment: `hightechmg_site::components::navbar` -> `navbar`
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, args)
}

pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub const fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), record.args()));
        match ConsoleMethod::for_level(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level)));
    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_target_segment() {
        let line = format_line("hightechmg_site::components::navbar", &format_args!("menu {}", "open"));
        assert_eq!(line, "[navbar] menu open");
    }

    #[test]
    fn test_format_line_plain_target() {
        let line = format_line("app", &format_args!("started"));
        assert_eq!(line, "[app] started");
    }

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::for_level(Level::Error), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::Info), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::Debug), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::Trace), ConsoleMethod::Debug);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(Level::Info);
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        let warn = Metadata::builder().level(Level::Warn).target("x").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
