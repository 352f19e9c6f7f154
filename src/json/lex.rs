//! Lexical primitives shared by the parser core.

use crate::json::cursor::Cursor;
use crate::json::scratch::ScratchBuffer;
use crate::json::{ParseError, Result, Value};

/// Match `literal` byte-for-byte and return `value` on success.
///
/// Nothing is consumed on mismatch.
pub(crate) fn match_literal(cursor: &mut Cursor<'_>, literal: &[u8], value: Value) -> Result<Value> {
	if cursor.eat(literal) {
		Ok(value)
	} else {
		Err(ParseError::InvalidValue { at: cursor.pos() })
	}
}

/// Match a strict JSON number and convert it to `f64`.
pub(crate) fn match_number(cursor: &mut Cursor<'_>) -> Result<f64> {
	let at = cursor.pos();
	let rest = cursor.rest();
	let len = number_len(rest).ok_or(ParseError::InvalidValue { at })?;

	// The grammar admits only ASCII, so this cannot fail.
	let text = std::str::from_utf8(&rest[..len]).map_err(|_| ParseError::InvalidValue { at })?;
	let number: f64 = text.parse().map_err(|_| ParseError::InvalidValue { at })?;
	if number.is_infinite() {
		return Err(ParseError::NumberTooBig { at });
	}

	cursor.advance(len);
	Ok(number)
}

/// Length of the JSON number at the start of `bytes`, if the grammar matches.
///
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn number_len(bytes: &[u8]) -> Option<usize> {
	let at = |idx: usize| bytes.get(idx).copied();
	let digits_from = |start: usize| bytes[start..].iter().take_while(|byte| byte.is_ascii_digit()).count();

	let mut idx = 0;
	if at(idx) == Some(b'-') {
		idx += 1;
	}

	match at(idx) {
		Some(b'0') => idx += 1,
		Some(b'1'..=b'9') => idx += digits_from(idx),
		_ => return None,
	}

	if at(idx) == Some(b'.') {
		idx += 1;
		let frac = digits_from(idx);
		if frac == 0 {
			return None;
		}
		idx += frac;
	}

	if let Some(b'e' | b'E') = at(idx) {
		idx += 1;
		if let Some(b'+' | b'-') = at(idx) {
			idx += 1;
		}
		let exp = digits_from(idx);
		if exp == 0 {
			return None;
		}
		idx += exp;
	}

	Some(idx)
}

/// Read exactly four hex digits into a UTF-16 code unit.
///
/// Nothing is consumed unless all four digits are valid.
pub(crate) fn read_hex4(cursor: &mut Cursor<'_>) -> Result<u16> {
	let at = cursor.pos();
	let digits = cursor.rest().get(..4).ok_or(ParseError::InvalidUnicodeHex { at })?;

	let mut unit = 0_u16;
	for byte in digits {
		let nibble = match byte {
			b'0'..=b'9' => byte - b'0',
			b'a'..=b'f' => byte - b'a' + 10,
			b'A'..=b'F' => byte - b'A' + 10,
			_ => return Err(ParseError::InvalidUnicodeHex { at }),
		};
		unit = (unit << 4) | u16::from(nibble);
	}

	cursor.advance(4);
	Ok(unit)
}

/// Combine a high and low surrogate into one scalar value.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
	debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
	0x10000 + ((u32::from(high - 0xD800) << 10) | u32::from(low - 0xDC00))
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
	(0xD800..=0xDBFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
	(0xDC00..=0xDFFF).contains(&unit)
}

/// Append the UTF-8 encoding of `scalar` to `out`.
pub(crate) fn encode_utf8(out: &mut ScratchBuffer, scalar: u32) {
	debug_assert!(scalar <= 0x10FFFF, "scalar 0x{scalar:x} out of unicode range");
	match scalar {
		0..=0x7F => out.push(scalar as u8),
		0x80..=0x7FF => {
			let bytes = out.reserve(2);
			bytes[0] = 0xC0 | (scalar >> 6) as u8;
			bytes[1] = 0x80 | (scalar & 0x3F) as u8;
		}
		0x800..=0xFFFF => {
			let bytes = out.reserve(3);
			bytes[0] = 0xE0 | (scalar >> 12) as u8;
			bytes[1] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
			bytes[2] = 0x80 | (scalar & 0x3F) as u8;
		}
		_ => {
			let bytes = out.reserve(4);
			bytes[0] = 0xF0 | (scalar >> 18) as u8;
			bytes[1] = 0x80 | ((scalar >> 12) & 0x3F) as u8;
			bytes[2] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
			bytes[3] = 0x80 | (scalar & 0x3F) as u8;
		}
	}
}
