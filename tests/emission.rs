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

use levelog::Config;
use levelog::Encoding;
use levelog::Level;
use levelog::Logger;
use levelog::Value;
use levelog::append::Testing;
use levelog::kv::Fields;

fn logger(config: Config) -> (Logger, Testing) {
    let testing = Testing::default();
    let logger = levelog::builder()
        .config(config)
        .append(testing.clone())
        .build();
    (logger, testing)
}

fn plain_logger() -> (Logger, Testing) {
    logger(Config::default().with_colored(false))
}

fn json(line: &str) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::from_str(line).unwrap() {
        serde_json::Value::Object(object) => object,
        other => panic!("expected a JSON object, got {other}"),
    }
}

type Emit = fn(&Logger);

fn all_prints() -> [(&'static str, Emit, &'static str, &'static str); 9] {
    [
        (
            "debugln",
            |l| levelog::debugln!(logger: l; "Foo", "Bar"),
            "[DEBUG]   | Foo Bar",
            r#""level":"DEBUG","message":"Foo Bar"}"#,
        ),
        (
            "debugln single",
            |l| levelog::debugln!(logger: l; "Foo and Bar"),
            "[DEBUG]   | Foo and Bar",
            r#""level":"DEBUG","message":"Foo and Bar"}"#,
        ),
        (
            "debug",
            |l| levelog::debug!(logger: l, "{} {}", "Foo", "Bar"),
            "[DEBUG]   | Foo Bar",
            r#""level":"DEBUG","message":"Foo Bar"}"#,
        ),
        (
            "infoln",
            |l| levelog::infoln!(logger: l; "Foo", "Bar"),
            "[INFO]    | Foo Bar",
            r#""level":"INFO","message":"Foo Bar"}"#,
        ),
        (
            "info",
            |l| levelog::info!(logger: l, "{} and {}", "Foo", "Bar"),
            "[INFO]    | Foo and Bar",
            r#""level":"INFO","message":"Foo and Bar"}"#,
        ),
        (
            "warningln",
            |l| levelog::warningln!(logger: l; "Foo", "Bar", "BAZ"),
            "[WARNING] | Foo Bar BAZ",
            r#""level":"WARNING","message":"Foo Bar BAZ"}"#,
        ),
        (
            "warning",
            |l| levelog::warning!(logger: l, "{}{} {}", "Foo", "Bar", "BAZ"),
            "[WARNING] | FooBar BAZ",
            r#""level":"WARNING","message":"FooBar BAZ"}"#,
        ),
        (
            "errorln",
            |l| levelog::errorln!(logger: l; "Foo and Bar + BAZ"),
            "[ERROR]   | Foo and Bar + BAZ",
            r#""level":"ERROR","message":"Foo and Bar + BAZ"}"#,
        ),
        (
            "error",
            |l| levelog::error!(logger: l, "{} and {} & {}", "Foo", "Bar", "BAZ"),
            "[ERROR]   | Foo and Bar & BAZ",
            r#""level":"ERROR","message":"Foo and Bar & BAZ"}"#,
        ),
    ]
}

#[test]
fn test_all_prints_text() {
    for (name, emit, text_suffix, _) in all_prints() {
        let (logger, testing) = plain_logger();
        emit(&logger);
        let contents = testing.contents();
        assert!(
            contents.ends_with(&format!("{text_suffix}\n")),
            "[TEXT] {name}: {contents:?}"
        );
        assert_eq!(testing.lines().len(), 1, "[TEXT] {name}");
    }
}

#[test]
fn test_all_prints_json() {
    for (name, emit, _, json_suffix) in all_prints() {
        let (logger, testing) = plain_logger();
        logger.set_encoding("json");
        emit(&logger);
        let contents = testing.contents();
        assert!(
            contents.ends_with(&format!("{json_suffix}\n")),
            "[JSON] {name}: {contents:?}"
        );
        assert!(contents.starts_with(r#"{"@timestamp":""#), "[JSON] {name}");
    }
}

#[test]
fn test_text_line_shape() {
    let (logger, testing) = plain_logger();
    logger.info(&[Value::from("Foo"), Value::from("Bar")]);
    let line = &testing.lines()[0];

    // 30 char timestamp column, a space, the 11 char prefix, a space, the message
    let (timestamp, rest) = line.split_at(30);
    assert!(timestamp.trim_start().len() <= 30);
    assert!(!timestamp.trim().is_empty());
    assert_eq!(rest, " [INFO]    | Foo Bar");
}

#[test]
fn test_colored_text_prefix() {
    let (logger, testing) = logger(Config::default());
    logger.error_fmt(format_args!("boom"));
    assert!(testing.lines()[0].ends_with(" \x1b[1;31m[ERROR]   |\x1b[0m boom"));
}

#[test]
fn test_filtering_at_or_above_minimum() {
    let (logger, testing) = plain_logger();
    logger.set_min_level("WARNING");

    logger.debug(&[Value::from("d")]);
    logger.info_fmt(format_args!("i"));
    assert!(testing.is_empty());

    logger.warning(&[Value::from("w")]);
    logger.error_fmt(format_args!("e"));
    let records = testing.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, Level::Warning);
    assert_eq!(records[1].0, Level::Error);
}

#[test]
fn test_raising_minimum_silences_lower_levels() {
    let (logger, testing) = plain_logger();
    for name in ["debug", "info", "warning", "error"] {
        logger.set_min_level(name);
        for level in Level::ALL {
            logger.log_fmt(level, format_args!("{level}"));
        }
    }
    // 4 + 3 + 2 + 1 emitted lines
    assert_eq!(testing.lines().len(), 10);
}

#[test]
fn test_unknown_level_name_fails_open() {
    let (logger, testing) = plain_logger();
    logger.set_min_level("error");
    logger.set_min_level("foobar");
    assert_eq!(logger.min_level(), Level::Debug);
    logger.debug_fmt(format_args!("visible"));
    assert_eq!(testing.lines().len(), 1);
}

#[test]
fn test_json_structured_fields() {
    let (logger, testing) = logger(Config::default().with_encoding(Encoding::Json));
    let fields = Fields::new().field("foo", "bar").field("baz", 123);
    levelog::debugln!(logger: &logger; fields);

    let object = json(&testing.lines()[0]);
    assert_eq!(object.len(), 4);
    assert_eq!(object["level"], "DEBUG");
    assert_eq!(object["foo"], "bar");
    assert_eq!(object["baz"], "123");
    assert!(object["@timestamp"].is_string());
    assert!(testing.lines()[0].ends_with(r#""baz":"123","foo":"bar","level":"DEBUG"}"#));
}

#[test]
fn test_json_reserved_keys_overwritten() {
    let (logger, testing) = logger(Config::default().with_encoding(Encoding::Json));
    let fields = Fields::from([("level", "nope"), ("@timestamp", "never")]);
    logger.error(&[Value::from("ignored"), Value::from(fields)]);

    let object = json(&testing.lines()[0]);
    assert_eq!(object.len(), 2);
    assert_eq!(object["level"], "ERROR");
    assert_ne!(object["@timestamp"], "never");
}

#[test]
fn test_render_to_string_ignores_minimum() {
    let (logger, testing) = plain_logger();
    logger.set_min_level("error");

    for level in Level::ALL {
        let line = logger.render_to_string(level, format_args!("{} {}", 200, "Test"));
        let prefix = format!("{:<10}|", format!("[{level}]"));
        assert!(line.ends_with(&format!("{prefix} 200 Test")), "{line}");
        assert!(!line.ends_with('\n'));
    }
    assert!(testing.is_empty());
}

#[test]
fn test_render_to_string_json_ignores_minimum() {
    let (logger, testing) = logger(Config::default().with_encoding(Encoding::Json));
    logger.set_min_level("error");

    for level in Level::ALL {
        let line = logger.render_to_string(level, format_args!("{} {}", 200, "Test"));
        let suffix = format!(r#""level":"{level}","message":"200 Test"}}"#);
        assert!(line.ends_with(&suffix), "{line}");
        assert!(!line.ends_with('\n'));
    }

    let fields = Fields::new().field("foo", "bar").field("level", "ERROR");
    let line = logger.render_values_to_string(Level::Debug, &[Value::from(fields)]);
    let object = json(&line);
    assert_eq!(object.len(), 3);
    assert_eq!(object["foo"], "bar");
    assert_eq!(object["level"], "DEBUG");
    assert!(object["@timestamp"].is_string());

    assert!(testing.is_empty());
}

#[test]
fn test_render_matches_emission() {
    let (logger, testing) = logger(Config::default().with_timestamp_format("fixed"));
    let values = [Value::from(200), Value::from("Test")];

    logger.debug(&values);
    let rendered = logger.render_values_to_string(Level::Debug, &values);
    assert_eq!(testing.lines()[0], rendered);
    assert_eq!(
        rendered,
        "                         fixed \x1b[0;36m[DEBUG]   |\x1b[0m 200 Test"
    );

    logger.set_encoding("json");
    logger.info(&values);
    let rendered = logger.render_values_to_string(Level::Info, &values);
    assert_eq!(testing.lines()[1], rendered);
    assert_eq!(
        rendered,
        r#"{"@timestamp":"fixed","level":"INFO","message":"200 Test"}"#
    );
}

#[test]
fn test_config_snapshot_and_update() {
    let (logger, _) = plain_logger();
    logger.update_config(|config| {
        config.set_encoding("JSON");
        config.set_timestamp_format("%s");
    });
    let config = logger.config();
    assert_eq!(config.encoding(), Encoding::Json);
    assert_eq!(logger.timestamp_format(), "%s");
    assert!(!logger.colored());
    logger.set_colored(true);
    assert!(logger.colored());
    assert!(!config.colored());
}

#[test]
fn test_concurrent_setters_and_emitters() {
    let (logger, testing) = plain_logger();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for i in 0..100 {
                    logger.error_fmt(format_args!("line {i}"));
                }
            });
        }
        s.spawn(|| {
            for i in 0..100 {
                logger.set_encoding(if i % 2 == 0 { "json" } else { "text" });
            }
        });
    });

    let lines = testing.lines();
    assert_eq!(lines.len(), 400);
    for line in lines {
        let text = line.contains("[ERROR]   | line ");
        let json = line.contains(r#""level":"ERROR","message":"line "#);
        assert!(text ^ json, "{line}");
    }
}
