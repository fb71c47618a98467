//! Structured logging for the browser. Events go through `tracing`; on wasm32 a
//! `tracing-subscriber` fmt layer renders them into the developer console at
//! the matching console level. Never log tokens, passwords or full profiles.

use tracing::Level;

/// Parses a configured level name (or 0-4 verbosity) into a `tracing` level.
/// Unknown values fall back to `INFO`.
pub fn parse_level(value: &str) -> Level {
    if let Ok(parsed) = value.trim().parse::<u8>() {
        return match parsed {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        };
    }

    match value.trim().to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Installs the console subscriber. Calling it twice keeps the first one.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(console::MakeConsoleWriter)
        .with_max_level(parse_level(level))
        .without_time()
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"logging was already initialized".into());
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Hands out one buffered writer per event.
    pub struct MakeConsoleWriter;

    /// Buffers a formatted event and emits it on drop as a single console call.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = wasm_bindgen::JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::info_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing::Level;

    #[test]
    fn parse_level_accepts_names_and_numbers() {
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("0"), Level::ERROR);
        assert_eq!(parse_level("3"), Level::DEBUG);
        assert_eq!(parse_level("9"), Level::TRACE);
    }

    #[test]
    fn parse_level_defaults_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
