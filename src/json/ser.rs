//! Serialization of a [`Value`] tree through `serde`.
//!
//! Formatting (number rendering, escaping) is delegated to `serde_json`.
//! Non-UTF-8 string bytes are replaced with U+FFFD.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::json::{Kind, Value};

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self.kind() {
			Kind::Null => serializer.serialize_unit(),
			Kind::False | Kind::True => serializer.serialize_bool(self.boolean()),
			Kind::Number => serializer.serialize_f64(self.number()),
			Kind::String => serializer.serialize_str(&String::from_utf8_lossy(self.string())),
			Kind::Array => {
				let len = self.array_len();
				let mut seq = serializer.serialize_seq(Some(len))?;
				for index in 0..len {
					seq.serialize_element(self.array_element(index))?;
				}
				seq.end()
			}
			Kind::Object => {
				let len = self.object_len();
				let mut map = serializer.serialize_map(Some(len))?;
				for index in 0..len {
					map.serialize_entry(&String::from_utf8_lossy(self.object_key(index)), self.object_value(index))?;
				}
				map.end()
			}
		}
	}
}

/// Render `value` as compact JSON text.
pub fn stringify(value: &Value) -> serde_json::Result<String> {
	serde_json::to_string(value)
}

/// Render `value` as indented JSON text.
pub fn stringify_pretty(value: &Value) -> serde_json::Result<String> {
	serde_json::to_string_pretty(value)
}
