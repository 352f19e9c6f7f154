//! Transient arenas used while one parse call is in flight.
//!
//! [`ScratchBuffer`] stages decoded string bytes and [`RecordStack`] stages
//! finished array elements until the enclosing container knows its final
//! size. Both grow geometrically and are rewound to a [`Mark`] when a nested
//! parse fails.

const MIN_CAPACITY: usize = 256;

/// Saved top-of-stack position for [`ScratchBuffer::rewind`] and [`RecordStack::pop_above`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

impl Mark {
	/// Occupied length at the time the mark was taken.
	pub fn offset(self) -> usize {
		self.0
	}
}

/// Next capacity for a request of `need` slots, growing by 1.5x from `current`.
fn grown_capacity(current: usize, need: usize) -> usize {
	let mut cap = current.max(MIN_CAPACITY);
	while cap < need {
		cap = cap.saturating_add(cap / 2);
	}
	cap
}

/// Growable byte arena with an explicit occupied length.
///
/// Slices returned by [`reserve`](Self::reserve) and [`take`](Self::take)
/// borrow the buffer, so any later `reserve` (which may reallocate) requires
/// re-deriving them.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
	buf: Vec<u8>,
	top: usize,
}

impl ScratchBuffer {
	/// Create an empty buffer without allocating.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of occupied bytes.
	pub fn top(&self) -> usize {
		self.top
	}

	/// Bytes the buffer can hold before it must grow again.
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Append `n` zeroed bytes at the top and return them for writing.
	pub fn reserve(&mut self, n: usize) -> &mut [u8] {
		let end = self.top + n;
		if end > self.buf.capacity() {
			let cap = grown_capacity(self.buf.capacity(), end);
			self.buf.reserve_exact(cap - self.buf.len());
		}
		if end > self.buf.len() {
			self.buf.resize(end, 0);
		}
		let start = self.top;
		self.top = end;
		&mut self.buf[start..end]
	}

	/// Append one byte.
	pub fn push(&mut self, byte: u8) {
		self.reserve(1)[0] = byte;
	}

	/// Append a run of bytes.
	pub fn extend(&mut self, bytes: &[u8]) {
		self.reserve(bytes.len()).copy_from_slice(bytes);
	}

	/// Remove the most recently reserved `n` bytes and return them.
	///
	/// # Panics
	///
	/// Panics if fewer than `n` bytes are occupied.
	pub fn take(&mut self, n: usize) -> &[u8] {
		assert!(n <= self.top, "scratch take of {n} bytes exceeds top {}", self.top);
		self.top -= n;
		&self.buf[self.top..self.top + n]
	}

	/// Save the current top.
	pub fn checkpoint(&self) -> Mark {
		Mark(self.top)
	}

	/// Discard everything written since `mark`.
	pub fn rewind(&mut self, mark: Mark) {
		debug_assert!(mark.0 <= self.top, "rewind to mark above top");
		self.top = mark.0.min(self.top);
	}
}

/// Typed stack of pending records, used for in-progress array elements.
#[derive(Debug)]
pub struct RecordStack<T> {
	items: Vec<T>,
}

impl<T> Default for RecordStack<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}

impl<T> RecordStack<T> {
	/// Create an empty stack without allocating.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of records on the stack.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the stack holds no records.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Records the stack can hold before it must grow again.
	pub fn capacity(&self) -> usize {
		self.items.capacity()
	}

	/// Push one finished record.
	pub fn push(&mut self, item: T) {
		let need = self.items.len() + 1;
		if need > self.items.capacity() {
			let cap = grown_capacity(self.items.capacity(), need);
			self.items.reserve_exact(cap - self.items.len());
		}
		self.items.push(item);
	}

	/// Save the current top.
	pub fn checkpoint(&self) -> Mark {
		Mark(self.items.len())
	}

	/// Pop one record if the stack is still above `mark`.
	pub fn pop_above(&mut self, mark: Mark) -> Option<T> {
		if self.items.len() > mark.0 { self.items.pop() } else { None }
	}

	/// Move every record pushed since `mark` into an exactly sized vector, oldest first.
	pub fn take_from(&mut self, mark: Mark) -> Vec<T> {
		debug_assert!(mark.0 <= self.items.len(), "take from mark above top");
		let start = mark.0.min(self.items.len());
		let mut out = Vec::with_capacity(self.items.len() - start);
		out.extend(self.items.drain(start..));
		out
	}
}
