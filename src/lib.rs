//! # Iterator adaptor template
//!
//! Container authors describe iteration once, as a small cursor ("iterator
//! state"), and get a complete iterator type for free: input, forward,
//! bidirectional or random access, in a mutable and a read-only variant, with
//! reverse iterators on top.
//!
//! ## Moving parts
//!
//! 1. **State**: an [`IteratorState`] family declares the category, the
//!    container and element types, and one [`Cursor`] per variant.
//! 2. **Capabilities**: higher categories add [`BidirectionalCursor`] and
//!    [`RandomAccessCursor`]. The adaptor exposes an operation only when the
//!    cursor implements the trait that supplies it, so misuse is a compile
//!    error and correct use costs nothing at runtime.
//! 3. **Adaptor**: [`CursorIter`] forwards dereference, movement, arithmetic,
//!    indexing and comparison to the cursor. Mutable and read-only iterators
//!    compare and subtract against each other, and a mutable iterator converts
//!    into a read-only one (never the other way around).
//! 4. **Container entry points**: [`Traversable`] adds `begin`/`end`,
//!    `range_mut`, `rbegin`/`rend` and [`Span`]s to the container.
//!
//! Copies of a mutable iterator share their container, so writing through one
//! ([`CursorIter::get_mut`], [`CursorIter::at_mut`]) is `unsafe`.
//! [`Traversable::for_each_mut`] covers the common case safely.
//!
//! ## Usage Example
//!
//! ```
//! use iter_template::{sample::SampleContainer, Traversable};
//!
//! let container = SampleContainer::from_values([1, 2, 3, 4, 5, 6, 7, 8]);
//! let begin = container.begin();
//!
//! assert_eq!(((begin.clone() + 5) - 3).member, 3);
//! assert_eq!((5 + begin.clone()).member, 6);
//! assert_eq!((begin.clone() + 3)[-2].member, 2);
//! assert_eq!((begin.clone() + 5) - (begin.clone() + 2), 3);
//! assert_eq!(container.rbegin().member, 8);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adaptor; // The iterator adaptor and its operator surface
pub mod binding; // Non-owning container references
pub mod category; // Iterator category tags
pub mod container; // begin/end entry points
pub mod sample; // Demonstration container
pub mod state; // Cursor contract for container authors
pub mod variant; // Mutable and read-only variants

// Re-exports for convenience
pub use adaptor::{ConstIter, ConstRevIter, CursorIter, IterMut, RevIterMut, ReverseIter, Span};
pub use binding::Binding;
pub use category::{
    BidirectionalTag, Category, ForwardTag, InputTag, MultiPass, RandomAccessTag, RandomAccessible,
    Reversible,
};
pub use container::Traversable;
pub use state::{
    BidirectionalCursor, Cursor, CursorMut, IteratorState, RandomAccessCursor,
    RandomAccessCursorMut,
};
pub use variant::{Access, Mutable, ReadOnly};

use thiserror::Error;

/// Errors reported by the checked iterator accessors.
///
/// The unchecked operations never return these: they treat the same
/// situations as contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorError {
    /// The iterator is not bound to a container.
    #[error("{variant} iterator is not bound to a container")]
    Unbound {
        /// Variant name of the offending iterator.
        variant: &'static str,
    },

    /// Distance requested between iterators with different connectivity.
    #[error("cannot measure distance: lhs connected = {lhs_connected}, rhs connected = {rhs_connected}")]
    ConnectivityMismatch {
        /// Whether the left-hand iterator is bound.
        lhs_connected: bool,
        /// Whether the right-hand iterator is bound.
        rhs_connected: bool,
    },
}
