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

//! Logging macros.
//!
//! The format variants (`debug!`, `info!`, `warning!`, `error!`) take a format string and its
//! arguments. The line variants (`debugln!`, `infoln!`, `warningln!`, `errorln!`) take any number
//! of values convertible into [`Value`](crate::Value) and join them with single spaces.
//!
//! Every macro logs through [`default_logger`](crate::default_logger) unless a logger is named
//! first: `info!(logger: &my_logger, "...")` or `infoln!(logger: &my_logger; "a", "b")`.

/// Emit a formatted message at the given level.
///
/// # Examples
///
/// ```
/// use levelog::Level;
///
/// levelog::log!(Level::Info, "listening on {}:{}", "0.0.0.0", 8080);
///
/// let logger = levelog::builder().build();
/// levelog::log!(logger: &logger, Level::Error, "failed: {}", "timeout");
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::default_logger().log_fmt($level, format_args!($($arg)+))
    };
}

/// Emit values joined by single spaces at the given level.
///
/// # Examples
///
/// ```
/// use levelog::Level;
/// use levelog::kv::Fields;
///
/// levelog::logln!(Level::Warning, "disk", 93.5, "% full");
///
/// let logger = levelog::builder().build();
/// levelog::logln!(logger: &logger; Level::Info, Fields::new().field("user", "alice"));
/// ```
#[macro_export]
macro_rules! logln {
    (logger: $logger:expr; $level:expr $(, $value:expr)* $(,)?) => {
        $logger.log($level, &[$($crate::Value::from($value)),*])
    };
    ($level:expr $(, $value:expr)* $(,)?) => {
        $crate::default_logger().log($level, &[$($crate::Value::from($value)),*])
    };
}

/// Emit a formatted message at `DEBUG`.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Emit a formatted message at `INFO`.
///
/// # Examples
///
/// ```
/// levelog::info!("{} and {}", "Foo", "Bar");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Emit a formatted message at `WARNING`.
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Emit a formatted message at `ERROR`.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Emit values joined by single spaces at `DEBUG`.
#[macro_export]
macro_rules! debugln {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::logln!(logger: $logger; $crate::Level::Debug $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Debug $(, $value)*)
    };
}

/// Emit values joined by single spaces at `INFO`.
///
/// # Examples
///
/// ```
/// levelog::infoln!("Foo", "Bar", 42);
/// ```
#[macro_export]
macro_rules! infoln {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::logln!(logger: $logger; $crate::Level::Info $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Info $(, $value)*)
    };
}

/// Emit values joined by single spaces at `WARNING`.
#[macro_export]
macro_rules! warningln {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::logln!(logger: $logger; $crate::Level::Warning $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Warning $(, $value)*)
    };
}

/// Emit values joined by single spaces at `ERROR`.
#[macro_export]
macro_rules! errorln {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::logln!(logger: $logger; $crate::Level::Error $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Error $(, $value)*)
    };
}
