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

use jiff::tz::TimeZone;

use crate::Error;
use crate::color::LevelColor;
use crate::layout::Layout;
use crate::record::Record;
use crate::time::TimestampFormat;

/// A layout that formats log record as optionally colored text.
///
/// Output format:
///
/// ```text
///  2024-08-11T22:44:57.172+08:00 [DEBUG]   | Hello debug!
///  2024-08-11T22:44:57.172+08:00 [INFO]    | Hello info!
///  2024-08-11T22:44:57.172+08:00 [WARNING] | Hello warning!
///  2024-08-11T22:44:57.172+08:00 [ERROR]   | Hello error!
/// ```
///
/// The timestamp is right-aligned in a 30 character column. By default, level prefixes are
/// colored; call [`no_color`](TextLayout::no_color) to disable this.
///
/// # Examples
///
/// ```
/// use levelog::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
    timestamp: TimestampFormat,
}

impl TextLayout {
    /// Customize the level prefix colors.
    ///
    /// No effect if colors are disabled.
    pub fn level_colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Enable or disable colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.no_color = !enabled;
        self
    }

    /// Set the timestamp pattern and time zone.
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }

    /// Set the time zone for timestamps, keeping the pattern.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timestamp.set_timezone(tz);
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<String, Error> {
        let time = self.timestamp.format_padded(record.time());
        let prefix = self.colors.prefix(self.no_color, record.level());
        let message = record.message();
        Ok(format!("{time} {prefix} {message}"))
    }
}
