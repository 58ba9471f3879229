//! The iterator adaptor.
//!
//! [`CursorIter`] owns one cursor of its variant and forwards every iterator
//! operation to it. Operations beyond the input-iterator minimum only exist
//! under the matching capability bound (see [`state`](crate::state)), so the
//! same generic type serves all four categories without runtime dispatch.
//!
//! Dereferencing an unbound or past-the-end iterator, and moving outside the
//! container, are contract violations. The adaptor does not check for them;
//! what happens is up to the cursor (the bundled sample panics on the slice
//! bounds check). Only connectivity is tracked, so that default-constructed
//! iterators compare safely.

mod ops;
mod reverse;
mod span;

pub use reverse::{ConstRevIter, RevIterMut, ReverseIter};
pub use span::Span;

use tracing::trace;

use crate::{
    binding::Binding,
    category::{Category, MultiPass, RandomAccessible, Reversible},
    state::{
        BidirectionalCursor, Cursor, CursorMut, IteratorState, RandomAccessCursor,
        RandomAccessCursorMut,
    },
    variant::{Access, Mutable, ReadOnly},
    IteratorError,
};

/// Iterator over the container described by `S`, in variant `A`.
///
/// Operations the declared category does not support do not exist on the
/// type. A forward iterator cannot step back:
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, ConstIter, ForwardTag};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let mut it = ConstIter::<SampleState<ForwardTag>>::begin(&container);
/// it.increment();
/// it.decrement();
/// ```
///
/// Neither can an input iterator:
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, ConstIter, InputTag};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let mut it = ConstIter::<SampleState<InputTag>>::begin(&container);
/// it.increment();
/// it.decrement();
/// ```
///
/// A bidirectional iterator steps back but has no offset moves, indexing,
/// ordering or distance:
///
/// ```
/// use iter_template::{sample::{SampleContainer, SampleState}, BidirectionalTag, ConstIter};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let mut it = ConstIter::<SampleState<BidirectionalTag>>::end(&container);
/// it.decrement();
/// assert_eq!(it.member, 2);
/// ```
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, BidirectionalTag, ConstIter};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let mut it = ConstIter::<SampleState<BidirectionalTag>>::begin(&container);
/// it += 1;
/// ```
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, BidirectionalTag, ConstIter};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let it = ConstIter::<SampleState<BidirectionalTag>>::begin(&container);
/// let _ = it[1].member;
/// ```
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, BidirectionalTag, ConstIter};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let begin = ConstIter::<SampleState<BidirectionalTag>>::begin(&container);
/// let end = ConstIter::<SampleState<BidirectionalTag>>::end(&container);
/// let _ = begin < end;
/// ```
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, BidirectionalTag, ConstIter};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let begin = ConstIter::<SampleState<BidirectionalTag>>::begin(&container);
/// let end = ConstIter::<SampleState<BidirectionalTag>>::end(&container);
/// let _: isize = end - begin;
/// ```
///
/// A read-only iterator never becomes a mutable one:
///
/// ```compile_fail
/// use iter_template::{sample::{SampleContainer, SampleState}, ConstIter, IterMut, Traversable};
///
/// let container = SampleContainer::from_values([1, 2]);
/// let it: ConstIter<'_, SampleState> = container.begin();
/// let _: IterMut<'_, SampleState> = it.into();
/// ```
///
/// Mutable element access is `unsafe`, because copies of a mutable iterator
/// share the container. There is no `DerefMut`:
///
/// ```compile_fail
/// use iter_template::{sample::SampleContainer, Traversable};
///
/// let mut container = SampleContainer::from_values([1, 2]);
/// let mut it = container.begin_mut();
/// it.member = 10;
/// ```
///
/// ```compile_fail
/// use iter_template::{sample::SampleContainer, Traversable};
///
/// let mut container = SampleContainer::from_values([1, 2]);
/// let mut it = container.begin_mut();
/// it.get_mut().member = 10;
/// ```
///
/// ```
/// use iter_template::{sample::SampleContainer, Traversable};
///
/// let mut container = SampleContainer::from_values([1, 2]);
/// let mut it = container.begin_mut();
/// // SAFETY: `it` is the only iterator bound to the container.
/// unsafe { it.get_mut() }.member = 10;
/// assert_eq!(it.member, 10);
/// ```
pub struct CursorIter<'a, S: IteratorState + 'a, A: Access> {
    cursor: S::Cursor<'a, A>,
}

/// Mutable iterator over the container described by `S`.
pub type IterMut<'a, S> = CursorIter<'a, S, Mutable>;

/// Read-only iterator over the container described by `S`.
pub type ConstIter<'a, S> = CursorIter<'a, S, ReadOnly>;

impl<'a, S: IteratorState + 'a, A: Access> CursorIter<'a, S, A> {
    /// A singular iterator: bound to nothing, only safe to compare and drop.
    pub fn unbound() -> Self {
        Self {
            cursor: <S::Cursor<'a, A> as Cursor<'a, A, S>>::unbound(),
        }
    }

    /// Iterator at the first element of the bound container.
    pub fn begin_with(binding: Binding<'a, S::Container, A>) -> Self {
        trace!(
            category = <S::Category as Category>::NAME,
            variant = A::NAME,
            "binding iterator at begin"
        );
        let mut cursor = <S::Cursor<'a, A> as Cursor<'a, A, S>>::bind(binding);
        cursor.seek_begin();
        Self { cursor }
    }

    /// Iterator at the past-the-end position of the bound container.
    pub fn end_with(binding: Binding<'a, S::Container, A>) -> Self {
        trace!(
            category = <S::Category as Category>::NAME,
            variant = A::NAME,
            "binding iterator at end"
        );
        let mut cursor = <S::Cursor<'a, A> as Cursor<'a, A, S>>::bind(binding);
        cursor.seek_end();
        Self { cursor }
    }

    /// Whether the iterator is bound to a container.
    pub fn is_connected(&self) -> bool {
        self.cursor.is_connected()
    }

    /// Advance by one position (pre-increment).
    pub fn increment(&mut self) -> &mut Self {
        self.cursor.next();
        self
    }

    /// Advance by one position, returning the iterator as it was before.
    pub fn post_increment(&mut self) -> Self {
        let result = self.clone();
        self.cursor.next();
        result
    }

    /// The current element.
    pub fn get(&self) -> &S::Value {
        self.cursor.get()
    }

    /// The current element, or an error if the iterator is unbound.
    ///
    /// Past-the-end positions are not detected.
    pub fn try_get(&self) -> Result<&S::Value, IteratorError> {
        if !self.is_connected() {
            return Err(IteratorError::Unbound { variant: A::NAME });
        }
        Ok(self.cursor.get())
    }

    /// Read-only copy of this iterator.
    pub fn read_only(&self) -> ConstIter<'a, S> {
        CursorIter {
            cursor: self.cursor.to_read_only(),
        }
    }

    /// The underlying cursor.
    pub fn cursor(&self) -> &S::Cursor<'a, A> {
        &self.cursor
    }

    /// Equality rule shared by all variant pairs.
    fn is_equal<B: Access>(&self, other: &CursorIter<'a, S, B>) -> bool {
        match (self.cursor.is_connected(), other.cursor.is_connected()) {
            (false, false) => true,
            (true, true) => self.cursor.is_equal(&other.cursor),
            _ => false,
        }
    }
}

impl<'a, S: IteratorState + 'a> CursorIter<'a, S, ReadOnly> {
    /// Read-only iterator at the first element of `container`.
    pub fn begin(container: &'a S::Container) -> Self {
        Self::begin_with(Binding::new(container))
    }

    /// Read-only iterator past the last element of `container`.
    pub fn end(container: &'a S::Container) -> Self {
        Self::end_with(Binding::new(container))
    }
}

impl<'a, S: IteratorState + 'a> CursorIter<'a, S, Mutable> {
    /// Mutable iterator at the first element of `container`.
    ///
    /// Use [`Traversable::range_mut`](crate::Traversable::range_mut) to obtain a
    /// matching `begin`/`end` pair.
    pub fn begin(container: &'a mut S::Container) -> Self {
        Self::begin_with(Binding::new_mut(container))
    }

    /// Mutable iterator past the last element of `container`.
    pub fn end(container: &'a mut S::Container) -> Self {
        Self::end_with(Binding::new_mut(container))
    }

    /// The current element, mutably.
    ///
    /// # Safety
    ///
    /// While the returned reference lives, the element must not be reached
    /// through any other iterator bound to the same container: clones, the
    /// matching `end`, read-only copies and reverse iterators included.
    pub unsafe fn get_mut(&mut self) -> &mut S::Value
    where
        S::Cursor<'a, Mutable>: CursorMut<'a, S>,
    {
        // SAFETY: forwarded to the caller.
        unsafe { self.cursor.get_mut() }
    }
}

impl<'a, S, A> CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: MultiPass,
    A: Access,
{
    /// Iterator at the first element of the same container.
    ///
    /// Must only be called on a connected iterator.
    pub fn to_begin(&self) -> Self {
        let mut cursor = self.cursor.clone();
        cursor.seek_begin();
        Self { cursor }
    }

    /// Iterator at the past-the-end position of the same container.
    ///
    /// Must only be called on a connected iterator.
    pub fn to_end(&self) -> Self {
        let mut cursor = self.cursor.clone();
        cursor.seek_end();
        Self { cursor }
    }
}

impl<'a, S, A> CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: Reversible,
    S::Cursor<'a, A>: BidirectionalCursor<'a, A, S>,
    A: Access,
{
    /// Step back by one position (pre-decrement).
    pub fn decrement(&mut self) -> &mut Self {
        self.cursor.prev();
        self
    }

    /// Step back by one position, returning the iterator as it was before.
    pub fn post_decrement(&mut self) -> Self {
        let result = self.clone();
        self.cursor.prev();
        result
    }
}

impl<'a, S, A> CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    /// The element `offset` positions away. Same as `self[offset]`.
    pub fn at(&self, offset: isize) -> &S::Value {
        self.cursor.at(offset)
    }

    /// The element `offset` positions away, or an error if the iterator is unbound.
    pub fn try_at(&self, offset: isize) -> Result<&S::Value, IteratorError> {
        if !self.is_connected() {
            return Err(IteratorError::Unbound { variant: A::NAME });
        }
        Ok(self.cursor.at(offset))
    }

    /// Signed number of increments from `other` to `self`. Same as `self - other`.
    pub fn distance_from<B: Access>(&self, other: &CursorIter<'a, S, B>) -> isize {
        self.cursor.distance(&other.cursor)
    }

    /// Like [`distance_from`](Self::distance_from), but fails unless both
    /// iterators are connected.
    pub fn try_distance<B: Access>(&self, other: &CursorIter<'a, S, B>) -> Result<isize, IteratorError> {
        let (lhs_connected, rhs_connected) = (self.is_connected(), other.is_connected());
        if !(lhs_connected && rhs_connected) {
            return Err(IteratorError::ConnectivityMismatch {
                lhs_connected,
                rhs_connected,
            });
        }
        Ok(self.cursor.distance(&other.cursor))
    }
}

impl<'a, S> CursorIter<'a, S, Mutable>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, Mutable>: RandomAccessCursorMut<'a, S>,
{
    /// The element `offset` positions away, mutably.
    ///
    /// # Safety
    ///
    /// Same obligation as [`get_mut`](Self::get_mut).
    pub unsafe fn at_mut(&mut self, offset: isize) -> &mut S::Value {
        // SAFETY: forwarded to the caller.
        unsafe { self.cursor.at_mut(offset) }
    }
}
