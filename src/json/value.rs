//! Parsed JSON value tree with typed accessors.
//!
//! Getters such as [`Value::number`] treat a kind mismatch as a caller bug
//! and panic. The `as_*` family returns `None` instead.

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// `null`.
	Null,
	/// `false`.
	False,
	/// `true`.
	True,
	/// Finite `f64` number.
	Number,
	/// Byte string.
	String,
	/// Ordered sequence of values.
	Array,
	/// Ordered sequence of key/value members.
	Object,
}

impl Kind {
	/// Lower-case name used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::False => "false",
			Self::True => "true",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

/// One JSON value. Each node exclusively owns its payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// `null`, also the state of a freshly initialized or freed value.
	#[default]
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Number payload.
	Number(f64),
	/// Decoded string bytes. May contain NUL; length is explicit.
	String(Box<[u8]>),
	/// Array elements, fixed in size once built.
	Array(Box<[Value]>),
	/// Object members in insertion order.
	Object(Box<[Member]>),
}

/// Key/value pair of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
	/// Owned key bytes.
	pub key: Box<[u8]>,
	/// Member value.
	pub value: Value,
}

impl Member {
	/// Build a member from key bytes and a value.
	pub fn new(key: impl Into<Box<[u8]>>, value: Value) -> Self {
		Self { key: key.into(), value }
	}
}

#[track_caller]
fn kind_mismatch(expected: &str, got: Kind) -> ! {
	panic!("json value kind mismatch: expected {expected}, got {}", got.name())
}

impl Value {
	/// Create a `null` value.
	pub fn new() -> Self {
		Self::Null
	}

	/// Return the value's kind.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(false) => Kind::False,
			Self::Bool(true) => Kind::True,
			Self::Number(_) => Kind::Number,
			Self::String(_) => Kind::String,
			Self::Array(_) => Kind::Array,
			Self::Object(_) => Kind::Object,
		}
	}

	/// Release every owned child and reset to `null`. Calling it again is a no-op.
	pub fn free(&mut self) {
		match std::mem::take(self) {
			Self::Array(items) => {
				for mut item in items.into_vec() {
					item.free();
				}
			}
			Self::Object(members) => {
				for mut member in members.into_vec() {
					member.value.free();
				}
			}
			Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => {}
		}
	}

	/// Alias of [`free`](Self::free).
	pub fn set_null(&mut self) {
		self.free();
	}

	/// Whether this value is `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, if this is `true` or `false`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Boolean payload.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::True`] or [`Kind::False`].
	#[track_caller]
	pub fn boolean(&self) -> bool {
		self.as_bool().unwrap_or_else(|| kind_mismatch("boolean", self.kind()))
	}

	/// Replace the current payload with a boolean.
	pub fn set_boolean(&mut self, value: bool) {
		self.free();
		*self = Self::Bool(value);
	}

	/// Number payload, if this is a number.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Number payload.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Number`].
	#[track_caller]
	pub fn number(&self) -> f64 {
		self.as_number().unwrap_or_else(|| kind_mismatch("number", self.kind()))
	}

	/// Replace the current payload with a number.
	pub fn set_number(&mut self, value: f64) {
		self.free();
		*self = Self::Number(value);
	}

	/// String bytes, if this is a string.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::String(bytes) => Some(&bytes[..]),
			_ => None,
		}
	}

	/// String contents as `&str` when the kind is string and the bytes are valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
	}

	/// String bytes.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::String`].
	#[track_caller]
	pub fn string(&self) -> &[u8] {
		match self {
			Self::String(bytes) => &bytes[..],
			_ => kind_mismatch("string", self.kind()),
		}
	}

	/// String length in bytes.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::String`].
	#[track_caller]
	pub fn string_len(&self) -> usize {
		self.string().len()
	}

	/// Replace the current payload with a copy of `bytes`.
	pub fn set_string(&mut self, bytes: &[u8]) {
		self.free();
		*self = Self::String(bytes.into());
	}

	/// Array elements, if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(&items[..]),
			_ => None,
		}
	}

	/// Number of array elements.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Array`].
	#[track_caller]
	pub fn array_len(&self) -> usize {
		self.array_items().len()
	}

	/// Array element at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Array`] and `index < array_len()`.
	#[track_caller]
	pub fn array_element(&self, index: usize) -> &Value {
		let items = self.array_items();
		assert!(index < items.len(), "array index {index} out of range for length {}", items.len());
		&items[index]
	}

	/// Mutable array element at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Array`] and `index < array_len()`.
	#[track_caller]
	pub fn array_element_mut(&mut self, index: usize) -> &mut Value {
		let kind = self.kind();
		let Self::Array(items) = self else {
			kind_mismatch("array", kind);
		};
		assert!(index < items.len(), "array index {index} out of range for length {}", items.len());
		&mut items[index]
	}

	/// Replace the current payload with `items`.
	pub fn set_array(&mut self, items: Vec<Value>) {
		self.free();
		*self = Self::Array(items.into_boxed_slice());
	}

	#[track_caller]
	fn array_items(&self) -> &[Value] {
		match self {
			Self::Array(items) => &items[..],
			_ => kind_mismatch("array", self.kind()),
		}
	}

	/// Object members, if this is an object.
	pub fn as_object(&self) -> Option<&[Member]> {
		match self {
			Self::Object(members) => Some(&members[..]),
			_ => None,
		}
	}

	/// Number of object members.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Object`].
	#[track_caller]
	pub fn object_len(&self) -> usize {
		self.object_members().len()
	}

	/// Key bytes of the member at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Object`] and `index < object_len()`.
	#[track_caller]
	pub fn object_key(&self, index: usize) -> &[u8] {
		&self.object_member(index).key
	}

	/// Key length in bytes of the member at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Object`] and `index < object_len()`.
	#[track_caller]
	pub fn object_key_len(&self, index: usize) -> usize {
		self.object_member(index).key.len()
	}

	/// Value of the member at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Object`] and `index < object_len()`.
	#[track_caller]
	pub fn object_value(&self, index: usize) -> &Value {
		&self.object_member(index).value
	}

	/// Mutable value of the member at `index`.
	///
	/// # Panics
	///
	/// Panics unless the kind is [`Kind::Object`] and `index < object_len()`.
	#[track_caller]
	pub fn object_value_mut(&mut self, index: usize) -> &mut Value {
		let kind = self.kind();
		let Self::Object(members) = self else {
			kind_mismatch("object", kind);
		};
		assert!(index < members.len(), "object index {index} out of range for length {}", members.len());
		&mut members[index].value
	}

	/// Replace the current payload with `members`, kept in the given order.
	pub fn set_object(&mut self, members: Vec<Member>) {
		self.free();
		*self = Self::Object(members.into_boxed_slice());
	}

	#[track_caller]
	fn object_members(&self) -> &[Member] {
		match self {
			Self::Object(members) => &members[..],
			_ => kind_mismatch("object", self.kind()),
		}
	}

	#[track_caller]
	fn object_member(&self, index: usize) -> &Member {
		let members = self.object_members();
		assert!(index < members.len(), "object index {index} out of range for length {}", members.len());
		&members[index]
	}
}
