//! `tracing` output routed to the browser console.

use std::io::{self, Write};
use std::str::FromStr;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::error::{LandingError, Result};

pub fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim()).map_err(|_| LandingError::InvalidLogLevel(level.to_string()))
}

/// Install the global subscriber. Call once, before mounting.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|e| LandingError::Logging(e.to_string()))
}

/// Picks the console method matching each record's level.
struct ConsoleMakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG | Level::TRACE => ConsoleMethod::Debug,
        }
    }
}

/// Buffers one formatted record and hands it to the console on drop.
struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = JsValue::from_str(line.trim_end());
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Info,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::for_level(meta.level()),
            buf: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), Level::WARN);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: loud");
    }

    #[test]
    fn trace_and_debug_share_console_debug() {
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
    }
}
