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

//! Timestamp formatting for log lines.

use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

/// The default timestamp pattern: ISO 8601 with millisecond precision and a numeric UTC offset,
/// such as `2006-01-02T15:04:05.515-07:00`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Width of the timestamp column in text lines.
pub const TIMESTAMP_WIDTH: usize = 30;

/// A strftime pattern paired with the time zone it is rendered in.
///
/// See [`jiff::fmt::strtime`] for the supported conversion specifiers.
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    pattern: String,
    timezone: TimeZone,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            timezone: TimeZone::system(),
        }
    }
}

impl TimestampFormat {
    /// Create a timestamp format from a strftime pattern and a time zone.
    pub fn new(pattern: impl Into<String>, timezone: TimeZone) -> Self {
        Self {
            pattern: pattern.into(),
            timezone,
        }
    }

    /// The strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The time zone timestamps are rendered in.
    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    pub(crate) fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub(crate) fn set_timezone(&mut self, timezone: TimeZone) {
        self.timezone = timezone;
    }

    /// Format `ts` with the pattern.
    ///
    /// Patterns are never validated up front. A pattern jiff cannot render yields the marker
    /// `%!(BADTIME <pattern>)` in place of the timestamp.
    pub fn format(&self, ts: Timestamp) -> String {
        let zoned = ts.to_zoned(self.timezone.clone());
        strtime::format(&self.pattern, &zoned)
            .unwrap_or_else(|_| format!("%!(BADTIME {})", self.pattern))
    }

    /// Format `ts` right-aligned in a [`TIMESTAMP_WIDTH`] column.
    pub fn format_padded(&self, ts: Timestamp) -> String {
        format!("{:>width$}", self.format(ts), width = TIMESTAMP_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz;
    use jiff::tz::TimeZone;

    use super::*;

    fn timestamp() -> Timestamp {
        "2024-08-11T14:44:57.172105Z".parse().unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let format = TimestampFormat::new(DEFAULT_TIMESTAMP_FORMAT, TimeZone::fixed(tz::offset(8)));
        assert_eq!(format.format(timestamp()), "2024-08-11T22:44:57.172+08:00");

        let format = TimestampFormat::new(DEFAULT_TIMESTAMP_FORMAT, TimeZone::fixed(tz::offset(-7)));
        assert_eq!(format.format(timestamp()), "2024-08-11T07:44:57.172-07:00");
    }

    #[test]
    fn test_padded_to_column_width() {
        let format = TimestampFormat::new(DEFAULT_TIMESTAMP_FORMAT, TimeZone::UTC);
        let padded = format.format_padded(timestamp());
        assert_eq!(padded, " 2024-08-11T14:44:57.172+00:00");
        assert_eq!(padded.len(), TIMESTAMP_WIDTH);

        let format = TimestampFormat::new("%H:%M", TimeZone::UTC);
        assert_eq!(format.format_padded(timestamp()).trim_start(), "14:44");
        assert_eq!(format.format_padded(timestamp()).len(), TIMESTAMP_WIDTH);
    }

    #[test]
    fn test_long_timestamp_not_truncated() {
        let format = TimestampFormat::new("%A, %d %B %Y %H:%M:%S%.9f %:z", TimeZone::UTC);
        let padded = format.format_padded(timestamp());
        assert_eq!(padded, "Sunday, 11 August 2024 14:44:57.172105000 +00:00");
    }

    #[test]
    fn test_bad_pattern_embeds_marker() {
        let format = TimestampFormat::new("%Y-%", TimeZone::UTC);
        assert_eq!(format.format(timestamp()), "%!(BADTIME %Y-%)");
    }
}
