//! Console Logger
//!
//! `log` backend for the browser. Each record becomes one line
//! `[HH:MM:SS.mmm LEVEL app/target] message` sent to the matching
//! `console` method.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            Local::now(),
            record.level(),
            self.app_name,
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if a logger is already installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { app_name, level }))?;
    log::set_max_level(level);
    Ok(())
}

fn format_line(
    at: DateTime<Local>,
    level: Level,
    app_name: &str,
    target: &str,
    message: &str,
) -> String {
    format!(
        "[{} {:<5} {}/{}] {}",
        at.format("%H:%M:%S%.3f"),
        level,
        app_name,
        target,
        message
    )
}
