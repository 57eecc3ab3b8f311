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

//! An unleveled logger for callers that only need "print a line" and "print a line, then exit".

use std::fmt;
use std::io::Write;

use jiff::Zoned;

const PLAIN_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A minimal, unleveled sink.
pub trait PlainLog: Send + Sync {
    /// Write `msg` as one line.
    fn log(&self, msg: &dyn fmt::Display);

    /// Write `msg` as one line, then terminate the process with exit status 1.
    fn log_and_exit(&self, msg: &dyn fmt::Display) -> !;
}

/// A [`PlainLog`] writing `YYYY/MM/DD HH:MM:SS <msg>` lines to stderr in local time.
///
/// # Examples
///
/// ```
/// use levelog::plain::PlainLog;
/// use levelog::plain::StderrLog;
///
/// StderrLog::default().log(&"starting up");
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct StderrLog {}

impl PlainLog for StderrLog {
    fn log(&self, msg: &dyn fmt::Display) {
        let line = plain_line(&Zoned::now(), msg);
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn log_and_exit(&self, msg: &dyn fmt::Display) -> ! {
        self.log(msg);
        std::process::exit(1)
    }
}

fn plain_line(now: &Zoned, msg: &dyn fmt::Display) -> String {
    format!("{} {msg}", now.strftime(PLAIN_TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz::TimeZone;

    use super::*;

    #[test]
    fn test_plain_line() {
        let ts: Timestamp = "2009-11-10T23:00:00Z".parse().unwrap();
        let now = ts.to_zoned(TimeZone::UTC);
        assert_eq!(plain_line(&now, &"hello"), "2009/11/10 23:00:00 hello");
        assert_eq!(plain_line(&now, &42), "2009/11/10 23:00:00 42");
    }
}
