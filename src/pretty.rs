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

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Serialize `value` as indented JSON, four spaces per level, for logging whole documents.
///
/// Serialization failures do not propagate: the error message is returned in place of the JSON.
///
/// # Examples
///
/// ```
/// let doc = std::collections::BTreeMap::from([("user", "alice")]);
/// assert_eq!(levelog::pretty_json(&doc), "{\n    \"user\": \"alice\"\n}");
///
/// levelog::infoln!(levelog::pretty_json(&doc));
/// ```
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::pretty_json;

    #[test]
    fn test_four_space_indent() {
        let doc = json!({"name": "levelog", "levels": ["DEBUG", "ERROR"], "empty": {}});
        assert_eq!(
            pretty_json(&doc),
            r#"{
    "empty": {},
    "levels": [
        "DEBUG",
        "ERROR"
    ],
    "name": "levelog"
}"#
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(pretty_json(&42), "42");
        assert_eq!(pretty_json("a \"quoted\" word"), r#""a \"quoted\" word""#);
        assert_eq!(pretty_json(&Vec::<u8>::new()), "[]");
    }

    #[test]
    fn test_error_message_in_place_of_json() {
        let doc = BTreeMap::from([((1, 2), "tuple keys are not strings")]);
        assert_eq!(pretty_json(&doc), "key must be a string");
    }
}
