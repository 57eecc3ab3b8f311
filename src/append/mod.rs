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

//! Dispatch rendered log lines to various targets.

use std::fmt;

use crate::Error;
use crate::record::Record;

mod stdio;
mod testing;

pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// An appender that receives rendered log lines.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered line, without its trailing newline, for `record`.
    fn append(&self, record: &Record, line: &str) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
