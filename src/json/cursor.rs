/// Bounded read cursor over borrowed JSON input.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub(crate) fn pos(&self) -> usize {
		self.pos
	}

	/// Return unread input without consuming it.
	pub(crate) fn rest(&self) -> &'a [u8] {
		&self.bytes[self.pos..]
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.pos >= self.bytes.len()
	}

	/// Look at the next byte without consuming it.
	pub(crate) fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Consume and return the next byte.
	pub(crate) fn next_byte(&mut self) -> Option<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Some(byte)
	}

	/// Advance by `n` bytes that the caller has already inspected.
	pub(crate) fn advance(&mut self, n: usize) {
		debug_assert!(n <= self.bytes.len() - self.pos, "advance past end of input");
		self.pos += n;
	}

	/// Consume `prefix` if the unread input starts with it.
	pub(crate) fn eat(&mut self, prefix: &[u8]) -> bool {
		if self.rest().starts_with(prefix) {
			self.pos += prefix.len();
			true
		} else {
			false
		}
	}

	/// Skip JSON insignificant whitespace (space, tab, LF, CR).
	pub(crate) fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.pos += 1;
		}
	}
}
