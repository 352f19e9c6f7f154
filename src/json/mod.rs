mod cursor;
mod error;
mod lex;
mod parse;
mod scratch;
mod ser;
mod value;

/// Error and result aliases.
pub use error::{ParseError, Result};
/// Parse driver entry points and options.
pub use parse::{ParseOptions, parse, parse_into, parse_with};
/// Transient arenas used during one parse call.
pub use scratch::{Mark, RecordStack, ScratchBuffer};
/// Serializer entry points.
pub use ser::{stringify, stringify_pretty};
/// Value tree types.
pub use value::{Kind, Member, Value};
