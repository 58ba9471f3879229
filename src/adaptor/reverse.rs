//! Reverse iteration over a bidirectional [`CursorIter`].
//!
//! A reverse iterator stores the forward position one past the element it
//! refers to, so `rbegin` wraps `end` and `rend` wraps `begin`. Dereference
//! reads the element just before the base position.

use std::{
    cell::OnceCell,
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Deref, Index, Sub, SubAssign},
};

use super::CursorIter;
use crate::{
    category::{RandomAccessible, Reversible},
    state::{BidirectionalCursor, CursorMut, IteratorState, RandomAccessCursor, RandomAccessCursorMut},
    variant::{Access, Mutable, ReadOnly},
};

/// Reverse iterator adapting a bidirectional [`CursorIter`].
pub struct ReverseIter<'a, S: IteratorState + 'a, A: Access> {
    base: CursorIter<'a, S, A>,
    // `base - 1`, computed on first dereference and dropped on every move.
    current: OnceCell<CursorIter<'a, S, A>>,
    // The same position once handed out mutably.
    current_mut: Option<CursorIter<'a, S, A>>,
}

/// Mutable reverse iterator over the container described by `S`.
pub type RevIterMut<'a, S> = ReverseIter<'a, S, Mutable>;

/// Read-only reverse iterator over the container described by `S`.
pub type ConstRevIter<'a, S> = ReverseIter<'a, S, ReadOnly>;

impl<'a, S: IteratorState + 'a, A: Access> ReverseIter<'a, S, A> {
    /// Reverse iterator referring to the element before `base`.
    pub fn new(base: CursorIter<'a, S, A>) -> Self {
        Self {
            base,
            current: OnceCell::new(),
            current_mut: None,
        }
    }

    /// The underlying forward iterator.
    pub fn base(&self) -> &CursorIter<'a, S, A> {
        &self.base
    }

    /// Unwrap into the underlying forward iterator.
    pub fn into_base(self) -> CursorIter<'a, S, A> {
        self.base
    }

    /// Whether the iterator is bound to a container.
    pub fn is_connected(&self) -> bool {
        self.base.is_connected()
    }

    /// Read-only copy of this iterator.
    pub fn read_only(&self) -> ReverseIter<'a, S, ReadOnly> {
        ReverseIter::new(self.base.read_only())
    }

    fn moved(&mut self) -> &mut Self {
        self.current = OnceCell::new();
        self.current_mut = None;
        self
    }
}

impl<'a, S, A> ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: Reversible,
    S::Cursor<'a, A>: BidirectionalCursor<'a, A, S>,
    A: Access,
{
    fn shifted(base: &CursorIter<'a, S, A>) -> CursorIter<'a, S, A> {
        let mut it = base.clone();
        it.decrement();
        it
    }

    fn current(&self) -> &CursorIter<'a, S, A> {
        match &self.current_mut {
            Some(current) => current,
            None => self.current.get_or_init(|| Self::shifted(&self.base)),
        }
    }

    /// The current element.
    pub fn get(&self) -> &S::Value {
        self.current().get()
    }

    /// Advance in reverse order (moves the base backwards).
    pub fn increment(&mut self) -> &mut Self {
        self.base.decrement();
        self.moved()
    }

    /// Advance in reverse order, returning the iterator as it was before.
    pub fn post_increment(&mut self) -> Self {
        let result = self.clone();
        self.increment();
        result
    }

    /// Step back in reverse order (moves the base forwards).
    pub fn decrement(&mut self) -> &mut Self {
        self.base.increment();
        self.moved()
    }

    /// Step back in reverse order, returning the iterator as it was before.
    pub fn post_decrement(&mut self) -> Self {
        let result = self.clone();
        self.decrement();
        result
    }
}

impl<'a, S> ReverseIter<'a, S, Mutable>
where
    S: IteratorState + 'a,
    S::Category: Reversible,
    S::Cursor<'a, Mutable>: BidirectionalCursor<'a, Mutable, S> + CursorMut<'a, S>,
{
    /// The current element, mutably.
    ///
    /// # Safety
    ///
    /// Same obligation as [`CursorIter::get_mut`].
    pub unsafe fn get_mut(&mut self) -> &mut S::Value {
        let current = match self.current_mut.take() {
            Some(current) => current,
            None => self
                .current
                .take()
                .unwrap_or_else(|| Self::shifted(&self.base)),
        };
        // SAFETY: forwarded to the caller.
        unsafe { self.current_mut.insert(current).get_mut() }
    }
}

impl<'a, S, A> ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    /// The element `offset` positions further in reverse order.
    pub fn at(&self, offset: isize) -> &S::Value {
        self.base.at(-offset - 1)
    }

    /// Signed number of reverse increments from `other` to `self`.
    pub fn distance_from<B: Access>(&self, other: &ReverseIter<'a, S, B>) -> isize {
        -self.base.distance_from(&other.base)
    }
}

impl<'a, S> ReverseIter<'a, S, Mutable>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, Mutable>: RandomAccessCursorMut<'a, S>,
{
    /// The element `offset` positions further in reverse order, mutably.
    ///
    /// # Safety
    ///
    /// Same obligation as [`CursorIter::get_mut`].
    pub unsafe fn at_mut(&mut self, offset: isize) -> &mut S::Value {
        // SAFETY: forwarded to the caller.
        unsafe { self.base.at_mut(-offset - 1) }
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Default for ReverseIter<'a, S, A> {
    fn default() -> Self {
        Self::new(CursorIter::unbound())
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Clone for ReverseIter<'a, S, A> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            current: self.current.clone(),
            current_mut: self.current_mut.clone(),
        }
    }
}

impl<'a, S, A> fmt::Debug for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Cursor<'a, A>: fmt::Debug,
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseIter").field("base", &self.base).finish()
    }
}

impl<'a, S: IteratorState + 'a> From<ReverseIter<'a, S, Mutable>> for ReverseIter<'a, S, ReadOnly> {
    fn from(source: ReverseIter<'a, S, Mutable>) -> Self {
        ReverseIter::new(source.base.into())
    }
}

impl<'a, S, A> Deref for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: Reversible,
    S::Cursor<'a, A>: BidirectionalCursor<'a, A, S>,
    A: Access,
{
    type Target = S::Value;

    fn deref(&self) -> &S::Value {
        self.get()
    }
}

impl<'a, S, A> Index<isize> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    type Output = S::Value;

    fn index(&self, offset: isize) -> &S::Value {
        self.at(offset)
    }
}

impl<'a, S, A, B> PartialEq<ReverseIter<'a, S, B>> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    A: Access,
    B: Access,
{
    fn eq(&self, other: &ReverseIter<'a, S, B>) -> bool {
        self.base == other.base
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Eq for ReverseIter<'a, S, A> {}

impl<'a, S, A, B> PartialOrd<ReverseIter<'a, S, B>> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
    B: Access,
{
    fn partial_cmp(&self, other: &ReverseIter<'a, S, B>) -> Option<Ordering> {
        self.base.partial_cmp(&other.base).map(Ordering::reverse)
    }
}

impl<'a, S, A> AddAssign<isize> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    fn add_assign(&mut self, offset: isize) {
        self.base -= offset;
        self.moved();
    }
}

impl<'a, S, A> SubAssign<isize> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    fn sub_assign(&mut self, offset: isize) {
        self.base += offset;
        self.moved();
    }
}

impl<'a, S, A> Add<isize> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<'a, S, A> Add<ReverseIter<'a, S, A>> for isize
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    type Output = ReverseIter<'a, S, A>;

    fn add(self, rhs: ReverseIter<'a, S, A>) -> ReverseIter<'a, S, A> {
        rhs + self
    }
}

impl<'a, S, A> Sub<isize> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<'a, S, A, B> Sub<ReverseIter<'a, S, B>> for ReverseIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
    B: Access,
{
    type Output = isize;

    fn sub(self, rhs: ReverseIter<'a, S, B>) -> isize {
        self.distance_from(&rhs)
    }
}
