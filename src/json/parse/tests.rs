use crate::json::{Kind, ParseError, ParseOptions, Value, parse, parse_into, parse_with};

fn parse_err(text: &str) -> ParseError {
	parse(text).expect_err("input should be rejected")
}

fn parse_string(text: &str) -> Vec<u8> {
	let value = parse(text).expect("string parses");
	value.string().to_vec()
}

#[test]
fn literals_parse_to_matching_kind() {
	assert_eq!(parse("null").expect("null parses").kind(), Kind::Null);
	assert_eq!(parse("true").expect("true parses").kind(), Kind::True);
	assert_eq!(parse("false").expect("false parses").kind(), Kind::False);
}

#[test]
fn surrounding_whitespace_is_ignored() {
	let value = parse("  123.45  ").expect("number parses");
	assert_eq!(value.kind(), Kind::Number);
	assert_eq!(value.number(), 123.45);

	assert_eq!(parse(" \t\r\n null \n").expect("null parses").kind(), Kind::Null);
}

#[test]
fn numbers_match_decimal_interpretation() {
	for (text, expected) in [
		("0", 0.0),
		("-0", -0.0),
		("-0.0", -0.0),
		("1", 1.0),
		("-1", -1.0),
		("1.5", 1.5),
		("-1.5", -1.5),
		("3.1416", 3.1416),
		("1E10", 1e10),
		("1e10", 1e10),
		("1E+10", 1e10),
		("1E-10", 1e-10),
		("-1E10", -1e10),
		("-1e10", -1e10),
		("-1E+10", -1e10),
		("-1E-10", -1e-10),
		("1.234E+10", 1.234e10),
		("1.234E-10", 1.234e-10),
		("1e-10000", 0.0),
		("1.0000000000000002", 1.000_000_000_000_000_2),
		("4.9406564584124654e-324", 4.940_656_458_412_465_4e-324),
		("2.2250738585072014e-308", f64::MIN_POSITIVE),
		("1.7976931348623157e+308", f64::MAX),
		("-1.7976931348623157e+308", f64::MIN),
	] {
		let value = parse(text).expect("number parses");
		assert_eq!(value.number().to_bits(), expected.to_bits(), "{text}");
	}
}

#[test]
fn strings_decode_escapes() {
	assert_eq!(parse_string(r#""""#), b"");
	assert_eq!(parse_string(r#""Hello""#), b"Hello");
	assert_eq!(parse_string(r#""Hello\nWorld""#), b"Hello\nWorld");
	assert_eq!(parse_string(r#""\" \\ \/ \b \f \n \r \t""#), b"\" \\ / \x08 \x0c \n \r \t");
	assert_eq!(parse_string("\"ab\\nc\"").len(), 4);
}

#[test]
fn unicode_escapes_decode_to_utf8() {
	assert_eq!(parse_string(r#""Hello\u0000World""#), b"Hello\0World");
	assert_eq!(parse_string(r#""\u0024""#), "\u{24}".as_bytes());
	assert_eq!(parse_string(r#""\u00A2""#), "\u{A2}".as_bytes());
	assert_eq!(parse_string(r#""\u20AC""#), "\u{20AC}".as_bytes());
	assert_eq!(parse_string(r#""\uD834\uDD1E""#), "\u{1D11E}".as_bytes());
	assert_eq!(parse_string(r#""\ud834\udd1e""#), "\u{1D11E}".as_bytes());
}

#[test]
fn raw_non_ascii_bytes_pass_through() {
	assert_eq!(parse_string("\"caf\u{e9} \u{1F600}\""), "caf\u{e9} \u{1F600}".as_bytes());
}

#[test]
fn arrays_parse_elements_in_order() {
	let value = parse("[1,2,3]").expect("array parses");
	assert_eq!(value.kind(), Kind::Array);
	assert_eq!(value.array_len(), 3);
	for index in 0..3 {
		assert_eq!(value.array_element(index).number(), (index + 1) as f64);
	}
}

#[test]
fn empty_and_mixed_arrays_parse() {
	assert_eq!(parse("[ ]").expect("empty array parses").array_len(), 0);

	let value = parse(r#"[ null , false , true , 123 , "abc" ]"#).expect("array parses");
	let kinds: Vec<Kind> = (0..value.array_len()).map(|index| value.array_element(index).kind()).collect();
	assert_eq!(kinds, vec![Kind::Null, Kind::False, Kind::True, Kind::Number, Kind::String]);
	assert_eq!(value.array_element(4).string(), b"abc");
}

#[test]
fn nested_arrays_parse() {
	let value = parse("[ [ ] , [ 0 ] , [ 0 , 1 ] , [ 0 , 1 , 2 ] ]").expect("nested array parses");
	assert_eq!(value.array_len(), 4);
	for outer in 0..4 {
		let inner = value.array_element(outer);
		assert_eq!(inner.array_len(), outer);
		for index in 0..outer {
			assert_eq!(inner.array_element(index).number(), index as f64);
		}
	}
}

#[test]
fn expect_value_on_empty_input() {
	assert_eq!(parse_err(""), ParseError::ExpectValue { at: 0 });
	assert_eq!(parse_err(" "), ParseError::ExpectValue { at: 1 });
}

#[test]
fn invalid_value_on_bad_literals_and_numbers() {
	for text in ["nul", "?", "+0", "+1", ".123", "1.", "INF", "inf", "NAN", "nan", "tru", "fals", "{}", "]"] {
		assert!(matches!(parse_err(text), ParseError::InvalidValue { .. }), "{text}");
	}
}

#[test]
fn invalid_value_inside_array() {
	assert_eq!(parse_err("[1,]"), ParseError::InvalidValue { at: 3 });
	assert_eq!(parse_err(r#"["a", nul]"#), ParseError::InvalidValue { at: 6 });
}

#[test]
fn root_not_singular_on_trailing_content() {
	assert_eq!(parse_err("null x"), ParseError::RootNotSingular { at: 5 });
	for text in ["0123", "0x0", "0x123", "[] []", "\"a\"b"] {
		assert!(matches!(parse_err(text), ParseError::RootNotSingular { .. }), "{text}");
	}
}

#[test]
fn number_too_big_on_overflow() {
	assert_eq!(parse_err("1e309"), ParseError::NumberTooBig { at: 0 });
	assert_eq!(parse_err("-1e309"), ParseError::NumberTooBig { at: 0 });
	assert_eq!(parse_err("[0, 1e309]"), ParseError::NumberTooBig { at: 4 });
}

#[test]
fn miss_quotation_mark_on_unterminated_string() {
	assert_eq!(parse_err("\""), ParseError::MissQuotationMark { at: 1 });
	assert_eq!(parse_err("\"abc"), ParseError::MissQuotationMark { at: 4 });
}

#[test]
fn invalid_string_escape() {
	for text in [r#""\v""#, r#""\'""#, r#""\0""#, r#""\x12""#] {
		assert_eq!(parse_err(text), ParseError::InvalidStringEscape { at: 1 }, "{text}");
	}
}

#[test]
fn invalid_string_char_on_raw_control_byte() {
	assert_eq!(parse_err("\"\x01\""), ParseError::InvalidStringChar { at: 1 });
	assert_eq!(parse_err("\"a\x1F\""), ParseError::InvalidStringChar { at: 2 });
	assert_eq!(parse_err("\"\0\""), ParseError::InvalidStringChar { at: 1 });
}

#[test]
fn invalid_unicode_hex() {
	for text in [
		r#""\u""#,
		r#""\u0""#,
		r#""\u01""#,
		r#""\u012""#,
		r#""\u/000""#,
		r#""\uG000""#,
		r#""\u0/00""#,
		r#""\u0G00""#,
		r#""\u000/""#,
		r#""\u00G0""#,
		r#""\u 123""#,
	] {
		assert!(matches!(parse_err(text), ParseError::InvalidUnicodeHex { .. }), "{text}");
	}
	assert_eq!(parse_err(r#""\uD800\u12""#), ParseError::InvalidUnicodeHex { at: 9 });
}

#[test]
fn invalid_unicode_surrogate() {
	assert_eq!(parse_err("\"\\uD800\""), ParseError::InvalidUnicodeSurrogate { at: 1 });
	for text in [r#""\uDBFF""#, r#""\uD800\\""#, r#""\uD800\uDBFF""#, r#""\uD800\uE000""#, r#""\uDC00""#, r#""\uD800x""#] {
		assert!(matches!(parse_err(text), ParseError::InvalidUnicodeSurrogate { .. }), "{text}");
	}
}

#[test]
fn miss_comma_or_square_bracket() {
	assert_eq!(parse_err("[1,2"), ParseError::MissCommaOrSquareBracket { at: 4 });
	for text in ["[1", "[1}", "[1 2", "[[]", "[\"a\" \"b\"]"] {
		assert!(matches!(parse_err(text), ParseError::MissCommaOrSquareBracket { .. }), "{text}");
	}
}

#[test]
fn parse_into_resets_output_on_failure() {
	let opt = ParseOptions::default();
	let mut value = Value::new();
	parse_into("[\"keep\"]", &mut value, &opt).expect("array parses");
	assert_eq!(value.array_len(), 1);

	let err = parse_into("true false", &mut value, &opt).expect_err("trailing literal should fail");
	assert_eq!(err, ParseError::RootNotSingular { at: 5 });
	assert!(value.is_null());
}

#[test]
fn depth_limit_boundary() {
	let opt = ParseOptions { max_depth: 3 };
	let value = parse_with("[[[1]]]", &opt).expect("depth 3 is allowed");
	assert_eq!(value.array_element(0).array_element(0).array_element(0).number(), 1.0);

	let err = parse_with("[[[[1]]]]", &opt).expect_err("depth 4 should fail");
	assert_eq!(err, ParseError::NestingTooDeep { max_depth: 3, at: 3 });

	let err = parse_with("[\"a\", [\"b\", [0, [1]]]]", &opt).expect_err("depth 4 with staged elements should fail");
	assert!(matches!(err, ParseError::NestingTooDeep { max_depth: 3, .. }));
}

#[test]
fn zero_depth_rejects_any_array() {
	let opt = ParseOptions { max_depth: 0 };
	assert_eq!(parse_with("[]", &opt), Err(ParseError::NestingTooDeep { max_depth: 0, at: 0 }));
	assert_eq!(parse_with("\"x\"", &opt).expect("scalars need no depth").string(), b"x");
}

#[test]
fn error_display_names_offset() {
	assert_eq!(parse_err("[1 2]").to_string(), "expected ',' or ']' at byte 3");
	assert_eq!(parse_err("1e400").offset(), 0);
}
