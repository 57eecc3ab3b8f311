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

use std::collections::BTreeMap;

use jiff::tz::TimeZone;
use serde::Serialize;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;
use crate::time::TimestampFormat;

const TIMESTAMP_KEY: &str = "@timestamp";
const LEVEL_KEY: &str = "level";

/// A JSON layout for formatting log records.
///
/// Output format:
///
/// ```json
/// {"@timestamp":"2024-08-11T22:44:57.172+08:00","level":"ERROR","message":"Hello error!"}
/// {"@timestamp":"2024-08-11T22:44:57.172+08:00","level":"DEBUG","request_id":"42","user":"alice"}
/// ```
///
/// When the record carries structured fields, the first field map replaces the message: every
/// value is flattened to a string, and `@timestamp` and `level` are injected, overwriting any
/// caller keys of the same name. Keys are emitted in sorted order.
///
/// # Examples
///
/// ```
/// use levelog::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct JsonLayout {
    timestamp: TimestampFormat,
}

impl JsonLayout {
    /// Set the timestamp pattern and time zone.
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }

    /// Set the timezone for timestamps, keeping the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use levelog::layout::JsonLayout;
    ///
    /// let layout = JsonLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timestamp.set_timezone(tz);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct RecordLine<'a> {
    #[serde(rename = "@timestamp")]
    timestamp: &'a str,
    level: &'a str,
    message: &'a str,
}

impl Layout for JsonLayout {
    fn format(&self, record: &Record) -> Result<String, Error> {
        let timestamp = self.timestamp.format(record.time());
        let level = record.level().as_str();

        let line = match record.fields() {
            Some(fields) => {
                let mut object: BTreeMap<String, String> = fields.to_strings();
                object.insert(TIMESTAMP_KEY.to_string(), timestamp);
                object.insert(LEVEL_KEY.to_string(), level.to_string());
                serde_json::to_string(&object)
            }
            None => {
                let message = record.message();
                serde_json::to_string(&RecordLine {
                    timestamp: &timestamp,
                    level,
                    message: &message,
                })
            }
        };

        line.map_err(Error::from_json_error)
    }
}
