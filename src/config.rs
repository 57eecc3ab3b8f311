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

//! Logger configuration.

use jiff::tz::TimeZone;

use crate::Encoding;
use crate::Level;
use crate::color::LevelColor;
use crate::layout::JsonLayout;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::time::TimestampFormat;

const DEFAULT_ENV_PREFIX: &str = "LOG_";

/// The configuration read by every emission of a [`Logger`](crate::Logger).
///
/// Defaults: minimum level `DEBUG`, `TEXT` encoding, colors on, timestamps formatted as
/// [`DEFAULT_TIMESTAMP_FORMAT`](crate::time::DEFAULT_TIMESTAMP_FORMAT) in the system time zone.
///
/// The string setters never fail: an unknown level name resets the minimum level to `DEBUG` and
/// an unknown encoding name resets the encoding to `TEXT`.
///
/// # Examples
///
/// ```
/// use levelog::Config;
/// use levelog::Encoding;
/// use levelog::Level;
///
/// let mut config = Config::default();
/// config.set_min_level("warning");
/// config.set_encoding("json");
/// assert_eq!(config.min_level(), Level::Warning);
/// assert_eq!(config.encoding(), Encoding::Json);
///
/// config.set_min_level("verbose");
/// assert_eq!(config.min_level(), Level::Debug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    min_level: Level,
    encoding: Encoding,
    no_color: bool,
    timestamp: TimestampFormat,
    colors: LevelColor,
}

impl Config {
    /// Read the configuration from `LOG_LEVEL`, `LOG_FORMAT`, `LOG_TIMESTAMP_FORMAT` and
    /// `LOG_COLOR`, starting from the defaults.
    ///
    /// A non-empty `NO_COLOR` variable disables colors as well. Unset variables keep their
    /// defaults; unknown values fail open like the string setters.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Config;
    ///
    /// let config = Config::from_env();
    /// ```
    pub fn from_env() -> Self {
        Config::from_env_prefixed(DEFAULT_ENV_PREFIX)
    }

    /// Like [`Config::from_env`], with a custom variable prefix such as `MYAPP_LOG_`.
    pub fn from_env_prefixed(prefix: &str) -> Self {
        Config::from_lookup(prefix, |name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env_prefixed`], reading variables through `lookup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Config;
    /// use levelog::Level;
    ///
    /// let config = Config::from_lookup("LOG_", |name| match name {
    ///     "LOG_LEVEL" => Some("error".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.min_level(), Level::Error);
    /// ```
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{prefix}{suffix}"));

        let mut config = Config::default();
        if let Some(level) = var("LEVEL") {
            config.set_min_level(&level);
        }
        if let Some(encoding) = var("FORMAT") {
            config.set_encoding(&encoding);
        }
        if let Some(pattern) = var("TIMESTAMP_FORMAT") {
            config.set_timestamp_format(&pattern);
        }
        if let Some(color) = var("COLOR") {
            let disabled = ["0", "false", "off", "no"]
                .iter()
                .any(|v| color.trim().eq_ignore_ascii_case(v));
            config.set_colored(!disabled);
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.set_colored(false);
        }
        config
    }

    /// Set the minimum level by name, case-insensitively. Unknown names reset it to `DEBUG`.
    pub fn set_min_level(&mut self, name: &str) {
        self.min_level = Level::from_name_or_default(name);
    }

    /// The minimum level a record needs to be emitted.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Set the encoding by name, case-insensitively. Unknown names reset it to `TEXT`.
    pub fn set_encoding(&mut self, name: &str) {
        self.encoding = Encoding::from_name_or_default(name);
    }

    /// The active output encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Replace the strftime timestamp pattern verbatim.
    pub fn set_timestamp_format(&mut self, pattern: &str) {
        self.timestamp.set_pattern(pattern);
    }

    /// The strftime timestamp pattern.
    pub fn timestamp_format(&self) -> &str {
        self.timestamp.pattern()
    }

    /// Enable or disable colored level prefixes in text lines.
    pub fn set_colored(&mut self, enabled: bool) {
        self.no_color = !enabled;
    }

    /// Whether text lines carry colored level prefixes.
    pub fn colored(&self) -> bool {
        !self.no_color
    }

    /// Set the time zone timestamps are rendered in.
    pub fn set_timezone(&mut self, timezone: TimeZone) {
        self.timestamp.set_timezone(timezone);
    }

    /// The time zone timestamps are rendered in.
    pub fn timezone(&self) -> &TimeZone {
        self.timestamp.timezone()
    }

    /// Set the per-level prefix colors.
    pub fn set_level_colors(&mut self, colors: LevelColor) {
        self.colors = colors;
    }

    /// The per-level prefix colors.
    pub fn level_colors(&self) -> &LevelColor {
        &self.colors
    }

    /// Builder form of [`Config::set_min_level`], taking a typed level.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Builder form of [`Config::set_encoding`], taking a typed encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builder form of [`Config::set_colored`].
    pub fn with_colored(mut self, enabled: bool) -> Self {
        self.set_colored(enabled);
        self
    }

    /// Builder form of [`Config::set_timestamp_format`].
    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp.set_pattern(pattern);
        self
    }

    /// Builder form of [`Config::set_timezone`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use levelog::Config;
    ///
    /// let config = Config::default().with_timezone(TimeZone::UTC);
    /// ```
    pub fn with_timezone(mut self, timezone: TimeZone) -> Self {
        self.timestamp.set_timezone(timezone);
        self
    }

    /// Builder form of [`Config::set_level_colors`].
    pub fn with_level_colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Whether a record at `level` passes the minimum level.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Build the layout for the active encoding from a snapshot of this configuration.
    pub fn layout(&self) -> Box<dyn Layout> {
        match self.encoding {
            Encoding::Text => Box::new(
                TextLayout::default()
                    .timestamp_format(self.timestamp.clone())
                    .level_colors(self.colors.clone())
                    .colored(self.colored()),
            ),
            Encoding::Json => Box::new(JsonLayout::default().timestamp_format(self.timestamp.clone())),
        }
    }
}
