//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug)]
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let value = wasm_bindgen::JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level:<5} {target}] {message}")
}

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Route panics through the logger so the payload and location survive
/// wasm's truncated stack traces.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => log::error!(
                "panic: {payload} at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("panic: {payload}"),
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_format_pads_level() {
        assert_eq!(
            format_record(Level::Info, "frontend::api", "GET vehicles"),
            "[INFO  frontend::api] GET vehicles"
        );
        assert_eq!(
            format_record(Level::Error, "frontend", "boom"),
            "[ERROR frontend] boom"
        );
    }
}
