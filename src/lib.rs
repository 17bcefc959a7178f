//! This crate provides the [`ContigVec`] data structure: a contiguous growable
//! array with value semantics, amortized-constant-time append and explicit
//! control over allocation, element lifetime and failure behavior.
//!
//! A `ContigVec<T>` owns exactly one heap block. The first `len()` slots hold
//! live elements, the rest is raw capacity; the block doubles when an append
//! finds it full. Raw-memory ownership and element lifetime are kept apart
//! internally: the storage layer only ever moves and frees bytes, while the
//! container constructs and destroys elements in place, with rollback guards
//! so that a panicking `Clone`, `Default` or closure never leaks an element or
//! a block.
//!
//! ## Basic usage
//!
//! ```rust
//! use contig_vec::{contig_vec, ContigVec};
//!
//! let mut v = contig_vec![1, 2, 3];
//! v.push(4);
//! assert_eq!(v, [1, 2, 3, 4]);
//!
//! v.insert(0, 0);
//! assert_eq!(v.remove(0), 0);
//!
//! assert_eq!(v.try_get(1), Ok(&2));
//! assert!(v.try_get(7).is_err());
//! ```
//!
//! Borrowed iteration goes through `Deref<Target = [T]>`, so every slice
//! method and iterator is available; `into_iter()` consumes the container and
//! yields elements by value:
//!
//! ```rust
//! # use contig_vec::contig_vec;
//! let v = contig_vec![String::from("a"), String::from("b")];
//! let joined: String = v.into_iter().collect();
//! assert_eq!(joined, "ab");
//! ```
//!
//! Fallible variants of the allocating operations ([`ContigVec::try_reserve`])
//! report [`StorageError`] values instead of panicking, and checked element
//! access ([`ContigVec::try_get`]) reports [`IndexOutOfBounds`].

pub mod error;
mod iter;
mod raw;
mod vec;

pub use error::{IndexOutOfBounds, StorageError};
pub use iter::IntoIter;
pub use vec::ContigVec;

/// Creates a [`ContigVec`] containing the arguments.
///
/// `contig_vec!` allows `ContigVec`s to be defined with the same syntax as
/// array expressions:
///
/// ```
/// use contig_vec::contig_vec;
///
/// let v = contig_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let v = contig_vec![0u8; 4];
/// assert_eq!(v, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! contig_vec {
	() => {
		$crate::ContigVec::new()
	};
	($elem:expr; $n:expr) => {
		$crate::ContigVec::from_elem($elem, $n)
	};
	($($x:expr),+ $(,)?) => {
		$crate::ContigVec::from([$($x),+])
	};
}
