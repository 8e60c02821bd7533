//! Debug logging for browser-grid.
//!
//! All output goes to `browser_grid_debug.log` in the system temp directory
//! so stdout stays clean for command output. Two entry points feed the file:
//!
//! - the `log` facade (`log::info!` etc.), routed here by [`init_log_bridge`]
//! - the category macros (`debug_info!("PANE", ...)`), which tag each line
//!   with a subsystem name
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file (applied later through [`set_level`]).

use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_level_filter(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => DebugLevel::Off,
            log::LevelFilter::Error | log::LevelFilter::Warn => DebugLevel::Error,
            log::LevelFilter::Info => DebugLevel::Info,
            log::LevelFilter::Debug => DebugLevel::Debug,
            log::LevelFilter::Trace => DebugLevel::Trace,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DebugLevel::Off => "OFF  ",
            DebugLevel::Error => "ERROR",
            DebugLevel::Info => "INFO ",
            DebugLevel::Debug => "DEBUG",
            DebugLevel::Trace => "TRACE",
        }
    }
}

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("browser_grid_debug.log")
}

struct DebugLogger {
    level: DebugLevel,
    file: Option<File>,
}

impl DebugLogger {
    fn new() -> Self {
        Self {
            level: DebugLevel::Off,
            file: None,
        }
    }

    fn open_file(&mut self) {
        if self.file.is_some() {
            return;
        }
        // Silently skip logging if the file can't be opened; command output
        // must not be interleaved with logger failures.
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
        {
            self.file = Some(file);
            self.write_raw(&format!(
                "{}\nbrowser-grid debug session started at {} (level={:?})\n",
                "=".repeat(80),
                get_timestamp(),
                self.level
            ));
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level == DebugLevel::Off || level > self.level {
            return;
        }
        let line = format!(
            "[{}] [{}] [{}] {}\n",
            get_timestamp(),
            level.label(),
            category,
            msg
        );
        self.write_raw(&line);
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::new()))
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= get_logger().lock().level
}

/// Log a message at specified level
fn log(level: DebugLevel, category: &str, msg: &str) {
    get_logger().lock().log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

/// Change the active level (e.g. once the config file has been read)
pub fn set_level(filter: log::LevelFilter) {
    let mut logger = get_logger().lock();
    logger.level = DebugLevel::from_level_filter(filter);
    if logger.level != DebugLevel::Off {
        logger.open_file();
    }
    log::set_max_level(filter);
}

/// Bridges the `log` facade into the debug log file
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            log::Level::Error | log::Level::Warn => DebugLevel::Error,
            log::Level::Info => DebugLevel::Info,
            log::Level::Debug => DebugLevel::Debug,
            log::Level::Trace => DebugLevel::Trace,
        };
        let mut logger = get_logger().lock();
        logger.log(level, record.target(), &record.args().to_string());
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOG_BRIDGE: LogBridge = LogBridge;

/// Route `log` records to the debug file
///
/// `cli_level` wins over `RUST_LOG`; with neither set logging stays off until
/// [`set_level`] applies the configured level. When `RUST_LOG` is set records
/// are mirrored to stderr.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.trim().parse::<log::LevelFilter>().ok());
    let level = cli_level.or(env_level).unwrap_or(log::LevelFilter::Off);

    // A second initialization (tests, embedding) keeps the first logger.
    if log::set_logger(&LOG_BRIDGE).is_ok() {
        set_level(level);
    }
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
