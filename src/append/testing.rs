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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::Level;
use crate::append::Append;
use crate::record::Record;

/// An appender that keeps log lines in memory, so tests and hosts can inspect exactly what a
/// logger would have written.
///
/// Clones share the same buffer.
///
/// # Examples
///
/// ```
/// use levelog::Config;
/// use levelog::append::Testing;
///
/// let testing = Testing::default();
/// let logger = levelog::builder()
///     .config(Config::default().with_colored(false))
///     .append(testing.clone())
///     .build();
///
/// logger.info_fmt(format_args!("hello {}", "world"));
/// assert!(testing.lines()[0].ends_with("[INFO]    | hello world"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Testing {
    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All captured lines, oldest first, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Captured lines paired with the level of the record that produced them.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Everything captured, as it would appear on stdout: each line newline-terminated.
    pub fn contents(&self) -> String {
        self.lock()
            .iter()
            .map(|(_, line)| format!("{line}\n"))
            .collect()
    }

    /// Remove and return all captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Append for Testing {
    fn append(&self, record: &Record, line: &str) -> Result<(), Error> {
        self.lock().push((record.level(), line.to_string()));
        Ok(())
    }
}
