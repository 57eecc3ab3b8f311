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

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The output encoding of rendered log lines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Human-readable text, optionally colored.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Encoding {
    /// All encodings.
    pub const ALL: [Encoding; 2] = [Encoding::Text, Encoding::Json];

    /// The canonical uppercase name of the encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Text => "TEXT",
            Encoding::Json => "JSON",
        }
    }

    /// Parse an encoding name case-insensitively, falling back to [`Encoding::Text`] for unknown
    /// names.
    pub fn from_name_or_default(name: &str) -> Encoding {
        name.parse().unwrap_or(Encoding::Text)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|encoding| encoding.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::new("unknown log encoding").with_context("input", s))
    }
}
