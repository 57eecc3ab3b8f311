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

//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of a log record.
///
/// Levels are totally ordered by rank, from least to most severe:
///
/// - `Debug`
/// - `Info`
/// - `Warning`
/// - `Error`
///
/// A logger whose minimum level is `Warning` emits `Warning` and `Error` records only.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed diagnostics.
    #[default]
    Debug = 0,
    /// Normal operation.
    Info = 1,
    /// Something unexpected that the program recovered from.
    Warning = 2,
    /// A failure.
    Error = 3,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    /// The canonical uppercase name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    /// The integer rank of the level; higher is more severe.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Parse a level name case-insensitively, falling back to [`Level::Debug`] for unknown
    /// names.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::from_name_or_default("wArNiNg"), Level::Warning);
    /// assert_eq!(Level::from_name_or_default("verbose"), Level::Debug);
    /// ```
    pub fn from_name_or_default(name: &str) -> Level {
        name.parse().unwrap_or(Level::Debug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::new("unknown log level").with_context("input", s))
    }
}
