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

use crate::Append;
use crate::Config;
use crate::Logger;
use crate::append::Stdout;
use crate::logger::log_impl::set_default_logger;

/// Create a new [`LoggerBuilder`] with the default configuration and no appenders.
///
/// # Examples
///
/// ```
/// use levelog::Config;
/// use levelog::Level;
///
/// let logger = levelog::builder()
///     .config(Config::default().with_min_level(Level::Info))
///     .build();
/// logger.info_fmt(format_args!("ready"));
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        config: Config::default(),
        appends: vec![],
    }
}

/// A builder for configuring a [`Logger`] and optionally installing it as the default logger.
#[must_use = "call `apply` to set the default logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
    appends: Vec<Box<dyn Append>>,
}

impl LoggerBuilder {
    /// Replace the configuration the logger starts with.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Add an appender. Without any appender, the logger writes to [`Stdout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::append;
    ///
    /// let logger = levelog::builder().append(append::Stdout::default()).build();
    /// ```
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        let appends = if self.appends.is_empty() {
            vec![Box::new(Stdout::default()) as Box<dyn Append>]
        } else {
            self.appends
        };
        Logger::new(self.config, appends)
    }

    /// Install the logger as the process default logger.
    ///
    /// This should be called early in the execution of a Rust program, before anything logs
    /// through [`default_logger`](crate::default_logger).
    ///
    /// # Errors
    ///
    /// Return the built logger if the default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// if levelog::builder().try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), Logger> {
        set_default_logger(self.build())
    }

    /// Install the logger as the process default logger.
    ///
    /// # Panics
    ///
    /// Panic if the default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// levelog::builder().apply();
    /// ```
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the default logger initialized");
    }
}
