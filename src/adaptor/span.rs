//! Bridge from a `begin`/`end` pair to [`std::iter::Iterator`].

use std::{fmt, iter::FusedIterator};

use super::CursorIter;
use crate::{
    category::{MultiPass, RandomAccessible, Reversible},
    state::{BidirectionalCursor, Cursor, IteratorState, RandomAccessCursor},
    variant::Access,
};

/// The positions in `[begin, end)`, yielded as iterator copies.
///
/// Each item is a [`CursorIter`] that can be dereferenced on its own:
///
/// ```
/// use iter_template::{sample::SampleContainer, Traversable};
///
/// let container = SampleContainer::from_values([1, 2, 3]);
/// let span = container.span();
/// assert_eq!(span.size_hint(), (3, Some(3)));
/// let values: Vec<i32> = span.map(|it| it.member * 10).collect();
/// assert_eq!(values, [10, 20, 30]);
/// ```
///
/// Items of a mutable span share the container, so writing through one is
/// `unsafe` (see [`CursorIter::get_mut`]).
pub struct Span<'a, S: IteratorState + 'a, A: Access> {
    front: CursorIter<'a, S, A>,
    back: CursorIter<'a, S, A>,
}

impl<'a, S: IteratorState + 'a, A: Access> Span<'a, S, A> {
    /// Span from `begin` (inclusive) to `end` (exclusive).
    pub fn new(begin: CursorIter<'a, S, A>, end: CursorIter<'a, S, A>) -> Self {
        Self {
            front: begin,
            back: end,
        }
    }

    /// Whether no positions remain.
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<'a, S, A> Span<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: RandomAccessible,
    S::Cursor<'a, A>: RandomAccessCursor<'a, A, S>,
    A: Access,
{
    /// Number of remaining positions.
    pub fn len(&self) -> usize {
        usize::try_from(self.back.distance_from(&self.front)).unwrap_or(0)
    }
}

impl<'a, S: IteratorState + 'a, A: Access> Iterator for Span<'a, S, A> {
    type Item = CursorIter<'a, S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        Some(self.front.post_increment())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.back.cursor().distance_hint(self.front.cursor()) {
            Some(remaining) => {
                let remaining = usize::try_from(remaining).unwrap_or(0);
                (remaining, Some(remaining))
            }
            None if self.is_empty() => (0, Some(0)),
            None => (1, None),
        }
    }
}

impl<'a, S, A> DoubleEndedIterator for Span<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: Reversible,
    S::Cursor<'a, A>: BidirectionalCursor<'a, A, S>,
    A: Access,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        self.back.decrement();
        Some(self.back.clone())
    }
}

impl<'a, S: IteratorState + 'a, A: Access> FusedIterator for Span<'a, S, A> {}

impl<'a, S, A> Clone for Span<'a, S, A>
where
    S: IteratorState + 'a,
    S::Category: MultiPass,
    A: Access,
{
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, S, A> fmt::Debug for Span<'a, S, A>
where
    S: IteratorState + 'a,
    S::Cursor<'a, A>: fmt::Debug,
    A: Access,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
