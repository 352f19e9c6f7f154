use crate::json::cursor::Cursor;
use crate::json::lex::{combine_surrogates, encode_utf8, is_high_surrogate, is_low_surrogate, match_literal, match_number, read_hex4};
use crate::json::scratch::{Mark, RecordStack, ScratchBuffer};
use crate::json::{ParseError, Result, Value};

/// Runtime limits for parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum number of arrays open at once.
	pub max_depth: u32,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self { max_depth: 128 }
	}
}

/// Parse `text` as exactly one JSON value using default options.
pub fn parse(text: &str) -> Result<Value> {
	parse_with(text, &ParseOptions::default())
}

/// Parse `text` as exactly one JSON value.
pub fn parse_with(text: &str, opt: &ParseOptions) -> Result<Value> {
	let mut value = Value::new();
	parse_into(text, &mut value, opt)?;
	Ok(value)
}

/// Parse `text` into `out`.
///
/// `out` is freed to `null` first and is left `null` on any error.
pub fn parse_into(text: &str, out: &mut Value, opt: &ParseOptions) -> Result<()> {
	out.free();
	tracing::trace!(len = text.len(), max_depth = opt.max_depth, "parsing json text");

	let mut parser = Parser::new(text.as_bytes(), opt);
	let result = parser.parse_root();
	parser.finish();

	match result {
		Ok(value) => {
			*out = value;
			Ok(())
		}
		Err(err) => {
			tracing::debug!(error = %err, at = err.offset(), "json parse failed");
			Err(err)
		}
	}
}

/// Per-call parse state: input cursor plus the transient arenas.
struct Parser<'a> {
	cursor: Cursor<'a>,
	bytes: ScratchBuffer,
	elements: RecordStack<Value>,
	opt: &'a ParseOptions,
	depth: u32,
}

impl<'a> Parser<'a> {
	fn new(input: &'a [u8], opt: &'a ParseOptions) -> Self {
		Self {
			cursor: Cursor::new(input),
			bytes: ScratchBuffer::new(),
			elements: RecordStack::new(),
			opt,
			depth: 0,
		}
	}

	fn finish(self) {
		debug_assert_eq!(self.bytes.top(), 0, "string scratch not drained");
		debug_assert!(self.elements.is_empty(), "element stack not drained");
		debug_assert_eq!(self.depth, 0);
	}

	fn parse_root(&mut self) -> Result<Value> {
		self.cursor.skip_whitespace();
		let mut value = self.parse_value()?;
		self.cursor.skip_whitespace();
		if !self.cursor.is_eof() {
			value.free();
			return Err(ParseError::RootNotSingular { at: self.cursor.pos() });
		}
		Ok(value)
	}

	fn parse_value(&mut self) -> Result<Value> {
		match self.cursor.peek() {
			None => Err(ParseError::ExpectValue { at: self.cursor.pos() }),
			Some(b'n') => match_literal(&mut self.cursor, b"null", Value::Null),
			Some(b't') => match_literal(&mut self.cursor, b"true", Value::Bool(true)),
			Some(b'f') => match_literal(&mut self.cursor, b"false", Value::Bool(false)),
			Some(b'"') => self.parse_string().map(Value::String),
			Some(b'[') => self.parse_array(),
			Some(_) => match_number(&mut self.cursor).map(Value::Number),
		}
	}

	fn parse_string(&mut self) -> Result<Box<[u8]>> {
		let opened = self.cursor.next_byte();
		debug_assert_eq!(opened, Some(b'"'));

		let mark = self.bytes.checkpoint();
		match self.scan_string(mark) {
			Ok(len) => Ok(self.bytes.take(len).into()),
			Err(err) => {
				self.bytes.rewind(mark);
				Err(err)
			}
		}
	}

	/// Decode string content up to the closing quote, returning the staged length.
	fn scan_string(&mut self, mark: Mark) -> Result<usize> {
		loop {
			let at = self.cursor.pos();
			match self.cursor.next_byte() {
				None => return Err(ParseError::MissQuotationMark { at }),
				Some(b'"') => return Ok(self.bytes.top() - mark.offset()),
				Some(b'\\') => self.parse_escape(at)?,
				Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar { at }),
				Some(byte) => self.bytes.push(byte),
			}
		}
	}

	/// Decode one escape; `at` is the offset of its backslash.
	fn parse_escape(&mut self, at: usize) -> Result<()> {
		let byte = match self.cursor.next_byte() {
			Some(b'"') => b'"',
			Some(b'\\') => b'\\',
			Some(b'/') => b'/',
			Some(b'b') => 0x08,
			Some(b'f') => 0x0C,
			Some(b'n') => b'\n',
			Some(b'r') => b'\r',
			Some(b't') => b'\t',
			Some(b'u') => {
				let scalar = self.parse_unicode_escape(at)?;
				encode_utf8(&mut self.bytes, scalar);
				return Ok(());
			}
			_ => return Err(ParseError::InvalidStringEscape { at }),
		};
		self.bytes.push(byte);
		Ok(())
	}

	fn parse_unicode_escape(&mut self, at: usize) -> Result<u32> {
		let unit = read_hex4(&mut self.cursor)?;
		if is_low_surrogate(unit) {
			return Err(ParseError::InvalidUnicodeSurrogate { at });
		}
		if !is_high_surrogate(unit) {
			return Ok(u32::from(unit));
		}

		if !self.cursor.eat(b"\\u") {
			return Err(ParseError::InvalidUnicodeSurrogate { at });
		}
		let low = read_hex4(&mut self.cursor)?;
		if !is_low_surrogate(low) {
			return Err(ParseError::InvalidUnicodeSurrogate { at });
		}
		Ok(combine_surrogates(unit, low))
	}

	fn parse_array(&mut self) -> Result<Value> {
		let at = self.cursor.pos();
		if self.depth >= self.opt.max_depth {
			return Err(ParseError::NestingTooDeep {
				max_depth: self.opt.max_depth,
				at,
			});
		}
		let opened = self.cursor.next_byte();
		debug_assert_eq!(opened, Some(b'['));

		self.depth += 1;
		let mark = self.elements.checkpoint();
		let result = self.parse_elements();
		self.depth -= 1;

		match result {
			Ok(()) => Ok(Value::Array(self.elements.take_from(mark).into_boxed_slice())),
			Err(err) => {
				while let Some(mut element) = self.elements.pop_above(mark) {
					element.free();
				}
				Err(err)
			}
		}
	}

	/// Parse elements after `[` through the closing `]`, staging each on the element stack.
	fn parse_elements(&mut self) -> Result<()> {
		self.cursor.skip_whitespace();
		if self.cursor.eat(b"]") {
			return Ok(());
		}

		loop {
			let element = self.parse_value()?;
			self.elements.push(element);
			self.cursor.skip_whitespace();

			let at = self.cursor.pos();
			match self.cursor.next_byte() {
				Some(b',') => self.cursor.skip_whitespace(),
				Some(b']') => return Ok(()),
				_ => return Err(ParseError::MissCommaOrSquareBracket { at }),
			}
		}
	}
}

#[cfg(test)]
mod tests;
