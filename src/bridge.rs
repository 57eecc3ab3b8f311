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

//! Bridge the [`log`] crate into levelog.

use crate::Encoding;
use crate::Level;
use crate::Logger;
use crate::Value;
use crate::default_logger;
use crate::kv::Fields;

const MESSAGE_KEY: &str = "message";

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record);
    }

    fn flush(&self) {
        log::Log::flush(default_logger());
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a proxy, and all logs from the log crate
/// will be forwarded to [`default_logger`].
///
/// This function will set the global maximum log level to `Trace`; filtering happens in the
/// default logger's configuration.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if levelog::bridge::try_setup_log_crate().is_err() {
///     eprintln!("failed to set up log crate bridge");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// levelog::bridge::setup_log_crate();
/// log::info!("routed through levelog");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "levelog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

struct KvCollector<'a> {
    fields: &'a mut Fields,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.fields.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        if !Logger::enabled(self, level) {
            return;
        }

        let mut fields = Fields::new();
        let mut visitor = KvCollector {
            fields: &mut fields,
        };
        // collecting into a map never fails
        let _ = record.key_values().visit(&mut visitor);

        if fields.is_empty() {
            return Logger::log_fmt(self, level, *record.args());
        }

        let message = record.args().to_string();
        match self.encoding() {
            Encoding::Json => {
                // the record message wins over a caller key of the same name
                fields.insert(MESSAGE_KEY, message);
                Logger::log(self, level, &[Value::from(fields)]);
            }
            Encoding::Text => {
                Logger::log(self, level, &[Value::from(message), Value::from(fields)]);
            }
        }
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;
    use crate::Config;
    use crate::append::Testing;

    fn logger(config: Config) -> (Logger, Testing) {
        let testing = Testing::default();
        let logger = crate::builder()
            .config(config.with_colored(false))
            .append(testing.clone())
            .build();
        (logger, testing)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_text_record_with_key_values() {
        let (logger, testing) = logger(Config::default());
        let kvs = vec![("user", "alice")];
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("login failed"))
                .key_values(&kvs)
                .build(),
        );
        let lines = testing.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[WARNING] | login failed user=alice"), "{}", lines[0]);
    }

    #[test]
    fn test_json_record_with_key_values() {
        let (logger, testing) = logger(Config::default().with_encoding(Encoding::Json));
        let kvs = vec![("user", "alice")];
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("login ok"))
                .key_values(&kvs)
                .build(),
        );
        let line = &testing.lines()[0];
        let object: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(object["level"], "INFO");
        assert_eq!(object["message"], "login ok");
        assert_eq!(object["user"], "alice");
    }

    #[test]
    fn test_json_record_message_overrides_message_key() {
        let (logger, testing) = logger(Config::default().with_encoding(Encoding::Json));
        let kvs = vec![("message", "from kv"), ("user", "alice")];
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("from args"))
                .key_values(&kvs)
                .build(),
        );
        let line = &testing.lines()[0];
        assert!(
            line.ends_with(r#""level":"INFO","message":"from args","user":"alice"}"#),
            "{line}"
        );
    }

    #[test]
    fn test_filtered_by_min_level() {
        let (logger, testing) = logger(Config::default().with_min_level(Level::Info));
        assert!(!Log::enabled(
            &logger,
            &log::Metadata::builder().level(log::Level::Trace).build()
        ));
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );
        assert!(testing.is_empty());
    }
}
