//! The contract a container author implements.
//!
//! A container describes its iteration once, as an [`IteratorState`] family,
//! and supplies one cursor type per [variant](crate::variant). The cursor
//! holds the container [`Binding`] and an opaque position (index, pointer,
//! inner iterator: the container author decides).
//!
//! Capabilities are split across traits so that a cursor only implements what
//! its category supports:
//!
//! | Trait | Input | Forward | Bidirectional | Random access |
//! |---|---|---|---|---|
//! | [`Cursor`] | required | required | required | required |
//! | [`CursorMut`] (mutable variant) | required | required | required | required |
//! | [`BidirectionalCursor`] | | | required | required |
//! | [`RandomAccessCursor`] | | | | required |
//! | [`RandomAccessCursorMut`] (mutable variant) | | | | required |
//!
//! The adaptor only exposes an operation under the bound that supplies it.
//! Calling `decrement` on a forward iterator is a type error naming
//! `BidirectionalCursor`, never a runtime failure.
//!
//! The mutable accessors are `unsafe`: copies of a mutable cursor share one
//! container, and only the caller can rule out overlapping access.

use crate::{
    binding::Binding,
    category::Category,
    variant::{Access, Mutable, ReadOnly},
};

/// Family of cursors describing how one container is iterated.
///
/// Usually implemented by an uninhabited marker type next to the container.
pub trait IteratorState: Sized {
    /// Declared iterator category.
    type Category: Category;

    /// Container the cursors walk.
    type Container: ?Sized;

    /// Element type yielded on dereference.
    type Value: ?Sized;

    /// Cursor for variant `A`, bound for at most `'a`.
    type Cursor<'a, A: Access>: Cursor<'a, A, Self>
    where
        Self: 'a;
}

/// Operations every cursor provides, regardless of category.
pub trait Cursor<'a, A: Access, S: IteratorState + 'a>: Clone {
    /// A cursor bound to no container.
    fn unbound() -> Self;

    /// A cursor bound to `container`. The position is set afterwards by
    /// [`seek_begin`](Self::seek_begin) or [`seek_end`](Self::seek_end).
    fn bind(container: Binding<'a, S::Container, A>) -> Self;

    /// Copy of this cursor in the read-only variant.
    fn to_read_only(&self) -> S::Cursor<'a, ReadOnly>;

    /// Move to the first element, or past-the-end when the container is empty.
    fn seek_begin(&mut self);

    /// Move to the past-the-end position.
    fn seek_end(&mut self);

    /// Whether the cursor is bound to a container.
    fn is_connected(&self) -> bool;

    /// Position equality against a cursor of either variant.
    ///
    /// Only called when both cursors are connected.
    fn is_equal<B: Access>(&self, other: &S::Cursor<'a, B>) -> bool;

    /// Advance by one position.
    fn next(&mut self);

    /// Signed number of increments from `other` to `self`, when it is known
    /// without stepping. [`Span`](crate::Span) reports it as its size hint.
    fn distance_hint<B: Access>(&self, _other: &S::Cursor<'a, B>) -> Option<isize> {
        None
    }

    /// The element at the current position.
    fn get(&self) -> &S::Value;
}

/// Mutable element access, required from the mutable variant of every category.
pub trait CursorMut<'a, S: IteratorState + 'a>: Cursor<'a, Mutable, S> {
    /// The element at the current position.
    ///
    /// # Safety
    ///
    /// While the returned reference lives, the element must not be reached
    /// through any other cursor bound to the same container, in either variant.
    unsafe fn get_mut(&mut self) -> &mut S::Value;
}

/// Backward movement for bidirectional and random-access cursors.
pub trait BidirectionalCursor<'a, A: Access, S: IteratorState + 'a>: Cursor<'a, A, S> {
    /// Step back by one position.
    fn prev(&mut self);
}

/// Offset movement, indexing and distance for random-access cursors.
///
/// `move_by` and `at` must not be implemented by repeated stepping.
pub trait RandomAccessCursor<'a, A: Access, S: IteratorState + 'a>:
    BidirectionalCursor<'a, A, S>
{
    /// Move by a signed offset in one step.
    fn move_by(&mut self, offset: isize);

    /// The element `offset` positions away, without moving.
    fn at(&self, offset: isize) -> &S::Value;

    /// Number of increments needed to get from `other` to `self`.
    fn distance<B: Access>(&self, other: &S::Cursor<'a, B>) -> isize;
}

/// Mutable indexed access for random-access cursors.
pub trait RandomAccessCursorMut<'a, S: IteratorState + 'a>:
    RandomAccessCursor<'a, Mutable, S> + CursorMut<'a, S>
{
    /// The element `offset` positions away, without moving.
    ///
    /// # Safety
    ///
    /// Same obligation as [`CursorMut::get_mut`].
    unsafe fn at_mut(&mut self, offset: isize) -> &mut S::Value;
}
