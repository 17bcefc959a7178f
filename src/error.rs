use std::alloc::Layout;

use thiserror::Error;

/// Failures raised by the storage layer.
///
/// Both variants are raised before any live element is touched: a failed
/// request leaves the container exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
	/// The requested element count exceeds the maximum the element type allows.
	#[error("capacity overflow: requested {requested} elements, maximum is {max}")]
	CapacityOverflow {
		/// Number of elements requested.
		requested: usize,
		/// Maximum representable element count for the type.
		max: usize
	},
	/// The global allocator failed to provide a block of the given layout.
	#[error("allocation of {} bytes failed", .layout.size())]
	AllocFailed {
		/// Layout of the failed request.
		layout: Layout
	}
}

/// Checked access used an index at or beyond the current length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexOutOfBounds {
	/// Index that was accessed.
	pub index: usize,
	/// Length of the container at the time of access.
	pub len: usize
}
