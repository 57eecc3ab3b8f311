// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::Append;
use crate::Config;
use crate::Encoding;
use crate::Error;
use crate::Level;
use crate::Value;
use crate::layout::Layout;
use crate::record::Record;
use crate::record::RecordBuilder;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process default logger, used by the logging macros.
///
/// Unless [`set_default_logger`] ran first, the first call installs a logger writing to stdout
/// with [`Config::default`].
///
/// # Examples
///
/// ```
/// levelog::default_logger().set_min_level("warning");
/// levelog::info!("not shown");
/// levelog::warning!("shown");
/// ```
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| crate::builder().build())
}

/// Install `logger` as the process default logger.
///
/// # Errors
///
/// Return the logger back if the default logger has already been set or used.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// A leveled logger: a [`Config`] plus the appenders rendered lines are written to.
///
/// The configuration sits behind a read-write lock owned by the logger. Setters may be called from
/// any thread while other threads emit; every emission renders with one consistent snapshot of the
/// configuration.
#[derive(Debug)]
pub struct Logger {
    config: RwLock<Config>,
    appends: Vec<Box<dyn Append>>,
}

macro_rules! level_methods {
    ($($level:ident => $line:ident, $format:ident;)+) => {
        $(
            #[doc = concat!("Emit `values` joined by single spaces at `", stringify!($level), "`.")]
            pub fn $line(&self, values: &[Value]) {
                self.log(Level::$level, values);
            }

            #[doc = concat!("Emit a formatted message at `", stringify!($level), "`.")]
            pub fn $format(&self, args: fmt::Arguments) {
                self.log_fmt(Level::$level, args);
            }
        )+
    };
}

impl Logger {
    pub(super) fn new(config: Config, appends: Vec<Box<dyn Append>>) -> Self {
        debug_assert!(!appends.is_empty(), "A Logger must have at least one appender");

        Self {
            config: RwLock::new(config),
            appends,
        }
    }

    // config writes replace whole fields, so a poisoned lock still holds a valid config
    fn read_config(&self) -> RwLockReadGuard<'_, Config> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, Config> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> Config {
        self.read_config().clone()
    }

    /// Modify the configuration in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use levelog::Level;
    ///
    /// let logger = levelog::builder().build();
    /// logger.update_config(|config| {
    ///     config.set_timezone(TimeZone::UTC);
    ///     config.set_min_level("error");
    /// });
    /// assert_eq!(logger.min_level(), Level::Error);
    /// ```
    pub fn update_config<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.write_config());
    }

    /// Set the minimum level by name, case-insensitively. Unknown names reset it to `DEBUG`.
    pub fn set_min_level(&self, name: &str) {
        self.write_config().set_min_level(name);
    }

    /// The minimum level a record needs to be emitted.
    pub fn min_level(&self) -> Level {
        self.read_config().min_level()
    }

    /// Set the encoding by name, case-insensitively. Unknown names reset it to `TEXT`.
    pub fn set_encoding(&self, name: &str) {
        self.write_config().set_encoding(name);
    }

    /// The active output encoding.
    pub fn encoding(&self) -> Encoding {
        self.read_config().encoding()
    }

    /// Replace the strftime timestamp pattern verbatim.
    pub fn set_timestamp_format(&self, pattern: &str) {
        self.write_config().set_timestamp_format(pattern);
    }

    /// The strftime timestamp pattern.
    pub fn timestamp_format(&self) -> String {
        self.read_config().timestamp_format().to_string()
    }

    /// Enable or disable colored level prefixes in text lines.
    pub fn set_colored(&self, enabled: bool) {
        self.write_config().set_colored(enabled);
    }

    /// Whether text lines carry colored level prefixes.
    pub fn colored(&self) -> bool {
        self.read_config().colored()
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.read_config().enabled(level)
    }

    /// Emit `values` joined by single spaces at `level`.
    ///
    /// In JSON encoding, the first [`Fields`](crate::kv::Fields) value replaces the message with
    /// its fields.
    pub fn log(&self, level: Level, values: &[Value]) {
        self.emit(&RecordBuilder::default().level(level).values(values).build());
    }

    /// Emit a formatted message at `level`.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments) {
        self.emit(&RecordBuilder::default().level(level).args(args).build());
    }

    level_methods! {
        Debug => debug, debug_fmt;
        Info => info, info_fmt;
        Warning => warning, warning_fmt;
        Error => error, error_fmt;
    }

    /// Render the line an emission at `level` would write, without the trailing newline.
    ///
    /// The minimum level is not applied: a line is always returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Config;
    /// use levelog::Level;
    ///
    /// let logger = levelog::builder()
    ///     .config(Config::default().with_min_level(Level::Error).with_colored(false))
    ///     .build();
    /// let line = logger.render_to_string(Level::Debug, format_args!("{} {}", 200, "Test"));
    /// assert!(line.ends_with("[DEBUG]   | 200 Test"));
    /// ```
    pub fn render_to_string(&self, level: Level, args: fmt::Arguments) -> String {
        self.render(&RecordBuilder::default().level(level).args(args).build())
    }

    /// Like [`Logger::render_to_string`], for the values of a line variant.
    pub fn render_values_to_string(&self, level: Level, values: &[Value]) -> String {
        self.render(&RecordBuilder::default().level(level).values(values).build())
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for append in &self.appends {
            if let Err(err) = append.flush() {
                handle_flush_error(err);
            }
        }
    }

    fn layout(&self) -> Box<dyn Layout> {
        self.read_config().layout()
    }

    fn render(&self, record: &Record) -> String {
        self.layout()
            .format(record)
            .unwrap_or_else(|err| format!("%!(BADLOG {err})"))
    }

    fn emit(&self, record: &Record) {
        let layout = {
            let config = self.read_config();
            if !config.enabled(record.level()) {
                return;
            }
            config.layout()
        };

        let line = match layout.format(record) {
            Ok(line) => line,
            Err(err) => return handle_log_error(record, err),
        };

        for append in &self.appends {
            if let Err(err) = append.append(record, &line) {
                handle_log_error(record, err);
            }
        }
    }
}

fn handle_log_error(record: &Record, error: Error) {
    let _ = write!(
        std::io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {message}
    Record: {record:?}
    Error: {error:?}
"###,
        message = record.message(),
        record = record,
        error = error,
    );
}

fn handle_flush_error(error: Error) {
    let _ = write!(
        std::io::stderr(),
        r###"
Error perform flush.
    Error: {error:?}
"###,
    );
}
