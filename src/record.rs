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

//! Log records handed to layouts.

use std::fmt;

use jiff::Timestamp;

use crate::Level;
use crate::kv;
use crate::kv::Fields;
use crate::kv::Value;

/// The message part of a record.
#[derive(Clone, Copy, Debug)]
pub enum Payload<'a> {
    /// A message produced by a format string.
    Args(fmt::Arguments<'a>),
    /// Values passed to a line variant, joined into the message.
    Values(&'a [Value]),
}

/// A single log record.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    time: Timestamp,
    level: Level,
    payload: Payload<'a>,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The raw payload.
    pub fn payload(&self) -> Payload<'a> {
        self.payload
    }

    /// The rendered message: the formatted string, or the values joined by single spaces.
    pub fn message(&self) -> String {
        match self.payload {
            Payload::Args(args) => match args.as_str() {
                Some(s) => s.to_string(),
                None => args.to_string(),
            },
            Payload::Values(values) => kv::join(values),
        }
    }

    /// The first structured-field map among the payload values, if any.
    pub fn fields(&self) -> Option<&'a Fields> {
        match self.payload {
            Payload::Args(_) => None,
            Payload::Values(values) => values.iter().find_map(|value| match value {
                Value::Fields(fields) => Some(fields),
                _ => None,
            }),
        }
    }
}

/// Builder for [`Record`].
///
/// # Examples
///
/// ```
/// use levelog::Level;
/// use levelog::Value;
/// use levelog::record::RecordBuilder;
///
/// let values = [Value::from("hello"), Value::from("world")];
/// let record = RecordBuilder::default()
///     .level(Level::Info)
///     .values(&values)
///     .build();
/// assert_eq!(record.message(), "hello world");
/// ```
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                time: Timestamp::now(),
                level: Level::Debug,
                payload: Payload::Args(format_args!("")),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, time: Timestamp) -> Self {
        self.record.time = time;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set the payload to a formatted message.
    pub fn args(mut self, args: fmt::Arguments<'a>) -> Self {
        self.record.payload = Payload::Args(args);
        self
    }

    /// Set the payload to a list of values.
    pub fn values(mut self, values: &'a [Value]) -> Self {
        self.record.payload = Payload::Values(values);
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
