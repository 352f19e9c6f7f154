//! Shared test helpers for workspace crates.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

thread_local! {
	static TRACKING: Cell<bool> = const { Cell::new(false) };
}

fn tracking() -> bool {
	TRACKING.try_with(Cell::get).unwrap_or(false)
}

/// Global allocator wrapper that counts allocations and frees.
///
/// Only activity on a thread inside [`CountingAlloc::measure`] is counted, so
/// tests in the same binary do not disturb each other.
pub struct CountingAlloc {
	allocs: AtomicUsize,
	frees: AtomicUsize,
	live_bytes: AtomicIsize,
}

/// Allocation activity observed during one [`CountingAlloc::measure`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocDelta {
	/// Successful allocations.
	pub allocs: usize,
	/// Deallocations.
	pub frees: usize,
	/// Net change in allocated bytes.
	pub live_bytes: isize,
}

impl AllocDelta {
	/// Whether every allocation was matched by exactly one free.
	pub fn is_balanced(&self) -> bool {
		self.allocs == self.frees && self.live_bytes == 0
	}
}

impl CountingAlloc {
	/// Create a counter with everything at zero.
	pub const fn new() -> Self {
		Self {
			allocs: AtomicUsize::new(0),
			frees: AtomicUsize::new(0),
			live_bytes: AtomicIsize::new(0),
		}
	}

	/// Run `f` with counting enabled on the current thread.
	pub fn measure<R>(&self, f: impl FnOnce() -> R) -> (R, AllocDelta) {
		let allocs = self.allocs.load(Ordering::SeqCst);
		let frees = self.frees.load(Ordering::SeqCst);
		let live_bytes = self.live_bytes.load(Ordering::SeqCst);

		TRACKING.with(|flag| flag.set(true));
		let out = f();
		TRACKING.with(|flag| flag.set(false));

		let delta = AllocDelta {
			allocs: self.allocs.load(Ordering::SeqCst) - allocs,
			frees: self.frees.load(Ordering::SeqCst) - frees,
			live_bytes: self.live_bytes.load(Ordering::SeqCst) - live_bytes,
		};
		(out, delta)
	}
}

impl Default for CountingAlloc {
	fn default() -> Self {
		Self::new()
	}
}

unsafe impl GlobalAlloc for CountingAlloc {
	unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
		let ptr = unsafe { System.alloc(layout) };
		if !ptr.is_null() && tracking() {
			self.allocs.fetch_add(1, Ordering::SeqCst);
			self.live_bytes.fetch_add(layout.size() as isize, Ordering::SeqCst);
		}
		ptr
	}

	unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
		unsafe { System.dealloc(ptr, layout) };
		if tracking() {
			self.frees.fetch_add(1, Ordering::SeqCst);
			self.live_bytes.fetch_sub(layout.size() as isize, Ordering::SeqCst);
		}
	}

	unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
		let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
		if !new_ptr.is_null() && tracking() {
			self.live_bytes.fetch_add(new_size as isize - layout.size() as isize, Ordering::SeqCst);
		}
		new_ptr
	}
}

/// Build `depth` nested arrays around `leaf`, e.g. `[[leaf]]` for depth 2.
pub fn nested_arrays(depth: usize, leaf: &str) -> String {
	let mut out = String::with_capacity(depth * 2 + leaf.len());
	out.push_str(&"[".repeat(depth));
	out.push_str(leaf);
	out.push_str(&"]".repeat(depth));
	out
}

/// Parse `text` with `serde_json` for structural cross-checks.
pub fn oracle(text: &str) -> serde_json::Value {
	serde_json::from_str(text).unwrap_or_else(|err| panic!("oracle rejected {text:?}: {err}"))
}
