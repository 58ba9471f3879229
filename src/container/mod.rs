//! Iterator entry points for containers.
//!
//! Implementing [`Traversable`] names the container's [`IteratorState`] and
//! provides the usual `begin`/`end` family, reverse iteration included.
//! [`for_each_mut`](Traversable::for_each_mut) is the safe way to write
//! through the mutable variant.

use std::convert::Infallible;

use crate::{
    adaptor::{ConstIter, ConstRevIter, IterMut, RevIterMut, ReverseIter, Span},
    binding::Binding,
    category::Reversible,
    state::{BidirectionalCursor, CursorMut, IteratorState},
    variant::{Mutable, ReadOnly},
};

/// A container iterated through the adaptor.
pub trait Traversable {
    /// Iteration description for this container.
    type State: IteratorState<Container = Self>;

    /// Read-only iterator at the first element.
    fn begin<'a>(&'a self) -> ConstIter<'a, Self::State>
    where
        Self::State: 'a,
    {
        ConstIter::<Self::State>::begin(self)
    }

    /// Read-only iterator past the last element.
    fn end<'a>(&'a self) -> ConstIter<'a, Self::State>
    where
        Self::State: 'a,
    {
        ConstIter::<Self::State>::end(self)
    }

    /// Same as [`begin`](Self::begin).
    fn cbegin<'a>(&'a self) -> ConstIter<'a, Self::State>
    where
        Self::State: 'a,
    {
        self.begin()
    }

    /// Same as [`end`](Self::end).
    fn cend<'a>(&'a self) -> ConstIter<'a, Self::State>
    where
        Self::State: 'a,
    {
        self.end()
    }

    /// Mutable iterator at the first element.
    fn begin_mut<'a>(&'a mut self) -> IterMut<'a, Self::State>
    where
        Self::State: 'a,
    {
        IterMut::<Self::State>::begin(self)
    }

    /// Mutable `begin`/`end` pair over the whole container.
    ///
    /// Both iterators share one binding; writing through either is `unsafe`.
    fn range_mut<'a>(&'a mut self) -> (IterMut<'a, Self::State>, IterMut<'a, Self::State>)
    where
        Self::State: 'a,
    {
        let binding = Binding::new_mut(self);
        (
            IterMut::<Self::State>::begin_with(binding),
            IterMut::<Self::State>::end_with(binding),
        )
    }

    /// Visit every element mutably, front to back.
    ///
    /// ```
    /// use iter_template::{sample::SampleContainer, Traversable};
    ///
    /// let mut container = SampleContainer::from_values([1, 2, 3]);
    /// container.for_each_mut(|element| element.member *= 10);
    /// assert_eq!(container.to_string(), "[10, 20, 30]");
    /// ```
    fn for_each_mut<'a, F>(&'a mut self, mut f: F)
    where
        Self::State: 'a,
        <Self::State as IteratorState>::Cursor<'a, Mutable>: CursorMut<'a, Self::State>,
        F: FnMut(&mut <Self::State as IteratorState>::Value),
    {
        let visited = self.try_for_each_mut(|element| {
            f(element);
            Ok::<(), Infallible>(())
        });
        match visited {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Visit every element mutably, stopping at the first error.
    ///
    /// Elements before the failing one keep their updates.
    fn try_for_each_mut<'a, E, F>(&'a mut self, mut f: F) -> Result<(), E>
    where
        Self::State: 'a,
        <Self::State as IteratorState>::Cursor<'a, Mutable>: CursorMut<'a, Self::State>,
        F: FnMut(&mut <Self::State as IteratorState>::Value) -> Result<(), E>,
    {
        let (mut it, end) = self.range_mut();
        while it != end {
            // SAFETY: `end` is only compared, never dereferenced, and each
            // element reference ends before the iterator moves on.
            f(unsafe { it.get_mut() })?;
            it.increment();
        }
        Ok(())
    }

    /// Read-only positions from `begin` to `end`.
    fn span<'a>(&'a self) -> Span<'a, Self::State, ReadOnly>
    where
        Self::State: 'a,
    {
        Span::new(self.begin(), self.end())
    }

    /// Mutable positions from `begin` to `end`.
    ///
    /// Prefer [`for_each_mut`](Self::for_each_mut) when every element is
    /// written; items of this span share the container.
    fn span_mut<'a>(&'a mut self) -> Span<'a, Self::State, Mutable>
    where
        Self::State: 'a,
    {
        let (begin, end) = self.range_mut();
        Span::new(begin, end)
    }

    /// Read-only reverse iterator at the last element.
    fn rbegin<'a>(&'a self) -> ConstRevIter<'a, Self::State>
    where
        Self::State: 'a,
        <Self::State as IteratorState>::Category: Reversible,
        <Self::State as IteratorState>::Cursor<'a, ReadOnly>:
            BidirectionalCursor<'a, ReadOnly, Self::State>,
    {
        ReverseIter::new(self.end())
    }

    /// Read-only reverse iterator before the first element.
    fn rend<'a>(&'a self) -> ConstRevIter<'a, Self::State>
    where
        Self::State: 'a,
        <Self::State as IteratorState>::Category: Reversible,
        <Self::State as IteratorState>::Cursor<'a, ReadOnly>:
            BidirectionalCursor<'a, ReadOnly, Self::State>,
    {
        ReverseIter::new(self.begin())
    }

    /// Mutable reverse `rbegin`/`rend` pair over the whole container.
    fn rrange_mut<'a>(&'a mut self) -> (RevIterMut<'a, Self::State>, RevIterMut<'a, Self::State>)
    where
        Self::State: 'a,
        <Self::State as IteratorState>::Category: Reversible,
        <Self::State as IteratorState>::Cursor<'a, Mutable>:
            BidirectionalCursor<'a, Mutable, Self::State>,
    {
        let (begin, end) = self.range_mut();
        (ReverseIter::new(end), ReverseIter::new(begin))
    }
}
