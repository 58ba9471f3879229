//! Operator surface of [`CursorIter`].

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Deref, Index, Sub, SubAssign},
};

use super::CursorIter;
use crate::{
    category::RandomAccessible,
    state::{IteratorState, RandomAccessCursor},
    variant::{Access, Mutable, ReadOnly},
};

impl<'a, S: IteratorState + 'a, A: Access> Default for CursorIter<'a, S, A> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Clone for CursorIter<'a, S, A> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, S, A> fmt::Debug for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Cursor<'a, A>: fmt::Debug,
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorIter")
            .field("variant", &A::NAME)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<'a, S: IteratorState + 'a> From<CursorIter<'a, S, Mutable>> for CursorIter<'a, S, ReadOnly> {
    fn from(source: CursorIter<'a, S, Mutable>) -> Self {
        source.read_only()
    }
}

// *** Element access (shared only; see `get_mut`) ***

impl<'a, S: IteratorState + 'a, A: Access> Deref for CursorIter<'a, S, A> {
    type Target = S::Value;

    fn deref(&self) -> &S::Value {
        self.get()
    }
}

impl<'a, S, A> Index<isize> for CursorIter<'a, S, A>
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

// *** Comparison across variants ***

impl<'a, S, A, B> PartialEq<CursorIter<'a, S, B>> for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    A: Access,
    B: Access,
{
    fn eq(&self, other: &CursorIter<'a, S, B>) -> bool {
        self.is_equal(other)
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Eq for CursorIter<'a, S, A> {}

impl<'a, S, A, B> PartialOrd<CursorIter<'a, S, B>> for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
    B: Access,
{
    fn partial_cmp(&self, other: &CursorIter<'a, S, B>) -> Option<Ordering> {
        match (self.is_connected(), other.is_connected()) {
            (false, false) => Some(Ordering::Equal),
            (true, true) => Some(self.distance_from(other).cmp(&0)),
            _ => None,
        }
    }
}

// *** Random access arithmetic ***

impl<'a, S, A> AddAssign<isize> for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    fn add_assign(&mut self, offset: isize) {
        self.cursor.move_by(offset);
    }
}

impl<'a, S, A> SubAssign<isize> for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    fn sub_assign(&mut self, offset: isize) {
        self.cursor.move_by(-offset);
    }
}

impl<'a, S, A> Add<isize> for CursorIter<'a, S, A>
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

impl<'a, S, A> Add<CursorIter<'a, S, A>> for isize
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    type Output = CursorIter<'a, S, A>;

    fn add(self, rhs: CursorIter<'a, S, A>) -> CursorIter<'a, S, A> {
        rhs + self
    }
}

impl<'a, S, A> Sub<isize> for CursorIter<'a, S, A>
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

impl<'a, S, A, B> Sub<CursorIter<'a, S, B>> for CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
    B: Access,
{
    type Output = isize;

    fn sub(self, rhs: CursorIter<'a, S, B>) -> isize {
        self.distance_from(&rhs)
    }
}

impl<'l, 'r, 'a, S, A, B> Sub<&'r CursorIter<'a, S, B>> for &'l CursorIter<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
    B: Access,
{
    type Output = isize;

    fn sub(self, rhs: &'r CursorIter<'a, S, B>) -> isize {
        self.distance_from(rhs)
    }
}
