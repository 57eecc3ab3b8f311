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

//! Levelog is a leveled logging facility: it renders log records as colored text or JSON lines,
//! filters them by a minimum level, and writes them to stdout.
//!
//! # Overview
//!
//! A [`Logger`] owns a [`Config`] (minimum level, encoding, colors, timestamp format) and a set
//! of appenders. Each level has a line variant that joins [`Value`]s with single spaces and a
//! format variant that takes `format_args!`. The macros log through [`default_logger`] unless a
//! logger is named.
//!
//! Text lines look like:
//!
//! ```text
//!  2024-08-11T22:44:57.172+08:00 [INFO]    | Foo Bar
//! ```
//!
//! JSON lines look like:
//!
//! ```json
//! {"@timestamp":"2024-08-11T22:44:57.172+08:00","level":"INFO","message":"Foo Bar"}
//! ```
//!
//! # Examples
//!
//! Log through the default logger:
//!
//! ```
//! levelog::default_logger().set_min_level("info");
//!
//! levelog::infoln!("Foo", "Bar");
//! levelog::warning!("{} and {}", "Foo", "Bar");
//! levelog::debug!("filtered out");
//! ```
//!
//! Build a JSON logger and attach structured fields:
//!
//! ```
//! use levelog::Config;
//! use levelog::Encoding;
//! use levelog::Level;
//! use levelog::kv::Fields;
//!
//! let logger = levelog::builder()
//!     .config(Config::default().with_encoding(Encoding::Json))
//!     .build();
//!
//! let fields = Fields::new().field("user", "alice").field("attempt", 3);
//! levelog::debugln!(logger: &logger; fields);
//!
//! let line = logger.render_to_string(Level::Error, format_args!("disk {}% full", 93));
//! assert!(line.ends_with(r#""level":"ERROR","message":"disk 93% full"}"#));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod append;
pub mod color;
pub mod kv;
pub mod layout;
pub mod plain;
pub mod record;
pub mod time;

#[cfg(feature = "bridge-log")]
pub mod bridge;

mod config;
mod encoding;
mod error;
mod level;
mod logger;
mod macros;
mod pretty;

pub use self::append::Append;
pub use self::config::Config;
pub use self::encoding::Encoding;
pub use self::error::Error;
pub use self::kv::Value;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::logger::*;
pub use self::pretty::pretty_json;
