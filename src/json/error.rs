use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while parsing JSON text.
///
/// Every variant records the byte offset where the offending token starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
	/// Input ended (or held only whitespace) where a value was required.
	#[error("expected a value at byte {at}")]
	ExpectValue {
		/// Byte offset of the missing value.
		at: usize,
	},
	/// Literal or number grammar mismatch.
	#[error("invalid value at byte {at}")]
	InvalidValue {
		/// Byte offset where the value starts.
		at: usize,
	},
	/// A complete top-level value was followed by more content.
	#[error("root value is not singular, trailing content at byte {at}")]
	RootNotSingular {
		/// Byte offset of the first trailing non-whitespace byte.
		at: usize,
	},
	/// Number grammar matched but the magnitude overflows `f64`.
	#[error("number too big at byte {at}")]
	NumberTooBig {
		/// Byte offset where the number starts.
		at: usize,
	},
	/// String ran into end of input before its closing quote.
	#[error("missing closing quotation mark for string at byte {at}")]
	MissQuotationMark {
		/// Byte offset where input ended.
		at: usize,
	},
	/// Unknown character after a backslash.
	#[error("invalid string escape at byte {at}")]
	InvalidStringEscape {
		/// Byte offset of the backslash.
		at: usize,
	},
	/// Unescaped control byte inside a string.
	#[error("invalid string char at byte {at}")]
	InvalidStringChar {
		/// Byte offset of the control byte.
		at: usize,
	},
	/// `\u` was not followed by four hex digits.
	#[error("invalid unicode hex at byte {at}")]
	InvalidUnicodeHex {
		/// Byte offset of the first hex digit.
		at: usize,
	},
	/// Unpaired or malformed UTF-16 surrogate escape.
	#[error("invalid unicode surrogate at byte {at}")]
	InvalidUnicodeSurrogate {
		/// Byte offset of the `\u` escape holding the bad surrogate.
		at: usize,
	},
	/// Array element followed by something other than `,` or `]`.
	#[error("expected ',' or ']' at byte {at}")]
	MissCommaOrSquareBracket {
		/// Byte offset where the separator was expected.
		at: usize,
	},
	/// Arrays nested deeper than the configured limit.
	#[error("nesting depth exceeded (max={max_depth}) at byte {at}")]
	NestingTooDeep {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Byte offset of the `[` that crossed the limit.
		at: usize,
	},
}

impl ParseError {
	/// Byte offset into the input where the error was detected.
	pub fn offset(&self) -> usize {
		match *self {
			Self::ExpectValue { at }
			| Self::InvalidValue { at }
			| Self::RootNotSingular { at }
			| Self::NumberTooBig { at }
			| Self::MissQuotationMark { at }
			| Self::InvalidStringEscape { at }
			| Self::InvalidStringChar { at }
			| Self::InvalidUnicodeHex { at }
			| Self::InvalidUnicodeSurrogate { at }
			| Self::MissCommaOrSquareBracket { at }
			| Self::NestingTooDeep { at, .. } => at,
		}
	}
}
