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

//! Color utilities.

use colored::Color;

use crate::Level;

/// Width of the bracketed level name in a text line, before the `|` separator.
pub const PREFIX_WIDTH: usize = 10;

/// The terminal style of one level's prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStyle {
    /// Foreground color.
    pub color: Color,
    /// Whether the prefix is bold.
    pub bold: bool,
}

impl LevelStyle {
    /// A regular weight style.
    pub const fn normal(color: Color) -> Self {
        Self { color, bold: false }
    }

    /// A bold style.
    pub const fn bold(color: Color) -> Self {
        Self { color, bold: true }
    }

    /// Wrap `text` in this style's ANSI escape sequence, resetting all attributes after it.
    pub fn paint(&self, text: &str) -> String {
        let weight = if self.bold { 1 } else { 0 };
        format!("\x1b[{weight};{}m{text}\x1b[0m", self.color.to_fg_str())
    }
}

/// Colors for different log levels.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelColor {
    /// Style for debug level logs.
    pub debug: LevelStyle,
    /// Style for info level logs.
    pub info: LevelStyle,
    /// Style for warning level logs.
    pub warning: LevelStyle,
    /// Style for error level logs.
    pub error: LevelStyle,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            debug: LevelStyle::normal(Color::Cyan),
            info: LevelStyle::bold(Color::Blue),
            warning: LevelStyle::bold(Color::Yellow),
            error: LevelStyle::bold(Color::Red),
        }
    }
}

impl LevelColor {
    /// Customize the style of the debug level. Default to cyan.
    pub fn debug_style(mut self, style: LevelStyle) -> Self {
        self.debug = style;
        self
    }

    /// Customize the style of the info level. Default to bold blue.
    pub fn info_style(mut self, style: LevelStyle) -> Self {
        self.info = style;
        self
    }

    /// Customize the style of the warning level. Default to bold yellow.
    pub fn warning_style(mut self, style: LevelStyle) -> Self {
        self.warning = style;
        self
    }

    /// Customize the style of the error level. Default to bold red.
    pub fn error_style(mut self, style: LevelStyle) -> Self {
        self.error = style;
        self
    }

    /// The style of `level`.
    pub fn style(&self, level: Level) -> LevelStyle {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warning => self.warning,
            Level::Error => self.error,
        }
    }

    /// Render the level prefix of a text line: `[LEVEL]` left-justified to [`PREFIX_WIDTH`] and
    /// followed by `|`, wrapped in the level's style unless `no_color` is set.
    pub fn prefix(&self, no_color: bool, level: Level) -> String {
        let plain = format!("{:<width$}|", format!("[{level}]"), width = PREFIX_WIDTH);
        if no_color {
            plain
        } else {
            self.style(level).paint(&plain)
        }
    }
}

#[cfg(test)]
mod tests {
    use colored::Color;

    use super::*;

    #[test]
    fn test_colored_prefix() {
        let colors = LevelColor::default();
        let cases = [
            (Level::Debug, "\x1b[0;36m[DEBUG]   |\x1b[0m"),
            (Level::Info, "\x1b[1;34m[INFO]    |\x1b[0m"),
            (Level::Warning, "\x1b[1;33m[WARNING] |\x1b[0m"),
            (Level::Error, "\x1b[1;31m[ERROR]   |\x1b[0m"),
        ];
        for (level, expected) in cases {
            assert_eq!(colors.prefix(false, level), expected);
        }
    }

    #[test]
    fn test_plain_prefix() {
        let colors = LevelColor::default();
        let cases = [
            (Level::Debug, "[DEBUG]   |"),
            (Level::Info, "[INFO]    |"),
            (Level::Warning, "[WARNING] |"),
            (Level::Error, "[ERROR]   |"),
        ];
        for (level, expected) in cases {
            assert_eq!(colors.prefix(true, level), expected);
        }
    }

    #[test]
    fn test_custom_style() {
        let colors = LevelColor::default().info_style(LevelStyle::normal(Color::Green));
        assert_eq!(colors.prefix(false, Level::Info), "\x1b[0;32m[INFO]    |\x1b[0m");
        assert_eq!(colors.style(Level::Error), LevelStyle::bold(Color::Red));
    }
}
