//! Demonstration container with a random-access iteration state.
//!
//! [`SampleContainer`] stores [`SampleElement`]s contiguously and iterates them
//! through a signed index cursor. It doubles as a template for container
//! authors: everything a random-access state must provide is implemented here,
//! each capability behind the category bound that grants it.

use std::{fmt, marker::PhantomData, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{
    binding::Binding,
    category::{at_least, Category, RandomAccessTag, RandomAccessible, Reversible},
    container::Traversable,
    state::{
        BidirectionalCursor, Cursor, CursorMut, IteratorState, RandomAccessCursor,
        RandomAccessCursorMut,
    },
    variant::{Access, Mutable, ReadOnly},
};

/// Element stored in a [`SampleContainer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SampleElement {
    /// Payload.
    pub member: i32,
}

impl SampleElement {
    /// Element holding `member`.
    pub fn new(member: i32) -> Self {
        Self { member }
    }
}

impl From<i32> for SampleElement {
    fn from(member: i32) -> Self {
        Self::new(member)
    }
}

impl fmt::Display for SampleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.member)
    }
}

/// Errors raised while building a [`SampleContainer`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// A token is not a valid 32-bit integer.
    #[error("invalid value '{token}' at position {position}")]
    InvalidValue {
        /// Offending token.
        token: String,
        /// Zero-based token index.
        position: usize,
    },
}

/// Contiguous container of [`SampleElement`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleContainer {
    elements: Vec<SampleElement>,
}

impl SampleContainer {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container holding `values` in order.
    pub fn from_values(values: impl IntoIterator<Item = i32>) -> Self {
        values.into_iter().collect()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element.
    ///
    /// Iterators bound to this container must not be used afterwards.
    pub fn push(&mut self, element: impl Into<SampleElement>) {
        self.elements.push(element.into());
    }

    /// The elements in order.
    pub fn as_slice(&self) -> &[SampleElement] {
        &self.elements
    }
}

impl FromIterator<i32> for SampleContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(SampleElement::new).collect(),
        }
    }
}

impl FromStr for SampleContainer {
    type Err = SampleError;

    /// Parse integers separated by commas and/or whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let elements = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<i32>()
                    .map(SampleElement::new)
                    .map_err(|_| SampleError::InvalidValue {
                        token: token.to_string(),
                        position,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(len = elements.len(), "parsed sample container");
        Ok(Self { elements })
    }
}

impl fmt::Display for SampleContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl Traversable for SampleContainer {
    type State = SampleState;
}

/// Iteration over a [`SampleContainer`] declared as category `C`.
///
/// The default is random access. Narrower categories reuse the same index
/// cursor and only lose the operations their tag does not grant, which makes
/// them handy for checking what each category allows.
#[derive(Debug)]
pub struct SampleState<C = RandomAccessTag>(PhantomData<C>);

impl<C: Category> IteratorState for SampleState<C> {
    type Category = C;
    type Container = SampleContainer;
    type Value = SampleElement;
    type Cursor<'a, A: Access> = SampleCursor<'a, A, C>;
}

/// Index cursor into a [`SampleContainer`].
#[derive(Debug)]
pub struct SampleCursor<'a, A: Access, C = RandomAccessTag> {
    container: Option<Binding<'a, SampleContainer, A>>,
    current: isize,
    _category: PhantomData<C>,
}

impl<'a, A: Access, C> SampleCursor<'a, A, C> {
    fn at_index(container: Option<Binding<'a, SampleContainer, A>>, current: isize) -> Self {
        Self {
            container,
            current,
            _category: PhantomData,
        }
    }

    fn container(&self) -> &SampleContainer {
        match &self.container {
            Some(binding) => binding.get(),
            None => panic!("{} iterator is not bound to a container", A::NAME),
        }
    }

    fn slot(&self, offset: isize) -> usize {
        // Negative positions map past any valid index so the slice bounds
        // check rejects them.
        usize::try_from(self.current + offset).unwrap_or(usize::MAX)
    }
}

impl<'a, C> SampleCursor<'a, Mutable, C> {
    /// # Safety
    ///
    /// No other cursor may reach the returned element while it lives.
    unsafe fn element_mut(&mut self, offset: isize) -> &mut SampleElement {
        let slot = self.slot(offset);
        match &mut self.container {
            // SAFETY: forwarded to the caller.
            Some(binding) => &mut unsafe { binding.get_mut() }.elements[slot],
            None => panic!("mutable iterator is not bound to a container"),
        }
    }
}

impl<A: Access, C> Clone for SampleCursor<'_, A, C> {
    fn clone(&self) -> Self {
        Self::at_index(self.container, self.current)
    }
}

impl<'a, A: Access, C: Category> Cursor<'a, A, SampleState<C>> for SampleCursor<'a, A, C> {
    fn unbound() -> Self {
        Self::at_index(None, -1)
    }

    fn bind(container: Binding<'a, SampleContainer, A>) -> Self {
        Self::at_index(Some(container), -1)
    }

    fn to_read_only(&self) -> SampleCursor<'a, ReadOnly, C> {
        SampleCursor::at_index(self.container.map(Binding::read_only), self.current)
    }

    fn seek_begin(&mut self) {
        self.current = 0;
    }

    fn seek_end(&mut self) {
        // `Vec` never holds more than `isize::MAX` elements.
        self.current = self.container().len() as isize;
    }

    fn is_connected(&self) -> bool {
        self.container.is_some()
    }

    fn is_equal<B: Access>(&self, other: &SampleCursor<'a, B, C>) -> bool {
        let same_container = match (&self.container, &other.container) {
            (Some(lhs), Some(rhs)) => lhs.same_container(rhs),
            (None, None) => true,
            _ => false,
        };
        same_container && self.current == other.current
    }

    fn next(&mut self) {
        self.current += 1;
    }

    fn distance_hint<B: Access>(&self, other: &SampleCursor<'a, B, C>) -> Option<isize> {
        at_least::<C, RandomAccessTag>().then(|| self.current - other.current)
    }

    fn get(&self) -> &SampleElement {
        &self.container().elements[self.slot(0)]
    }
}

impl<'a, C: Category> CursorMut<'a, SampleState<C>> for SampleCursor<'a, Mutable, C> {
    unsafe fn get_mut(&mut self) -> &mut SampleElement {
        // SAFETY: forwarded to the caller.
        unsafe { self.element_mut(0) }
    }
}

impl<'a, A: Access, C: Reversible> BidirectionalCursor<'a, A, SampleState<C>>
    for SampleCursor<'a, A, C>
{
    fn prev(&mut self) {
        self.current -= 1;
    }
}

impl<'a, A: Access, C: RandomAccessible> RandomAccessCursor<'a, A, SampleState<C>>
    for SampleCursor<'a, A, C>
{
    fn move_by(&mut self, offset: isize) {
        self.current += offset;
    }

    fn at(&self, offset: isize) -> &SampleElement {
        &self.container().elements[self.slot(offset)]
    }

    fn distance<B: Access>(&self, other: &SampleCursor<'a, B, C>) -> isize {
        self.current - other.current
    }
}

impl<'a, C: RandomAccessible> RandomAccessCursorMut<'a, SampleState<C>>
    for SampleCursor<'a, Mutable, C>
{
    unsafe fn at_mut(&mut self, offset: isize) -> &mut SampleElement {
        // SAFETY: forwarded to the caller.
        unsafe { self.element_mut(offset) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BidirectionalTag, ForwardTag, InputTag};

    #[test]
    fn parses_mixed_separators() {
        let container: SampleContainer = "1, 2 3,4".parse().expect("valid input");
        assert_eq!(container, SampleContainer::from_values([1, 2, 3, 4]));
        assert_eq!(container.to_string(), "[1, 2, 3, 4]");
    }

    #[test]
    fn invalid_token_reports_position() {
        let result = "1,x,3".parse::<SampleContainer>();
        assert_eq!(
            result,
            Err(SampleError::InvalidValue {
                token: "x".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn empty_input_is_empty_container() {
        let container: SampleContainer = "  ".parse().expect("blank input is valid");
        assert!(container.is_empty());
        assert!(container.begin() == container.end());
    }

    #[test]
    fn cursor_equality_requires_same_container() {
        let left = SampleContainer::from_values([1, 2]);
        let right = SampleContainer::from_values([1, 2]);
        assert!(left.begin() != right.begin());
        assert!(left.begin() == left.begin());
    }

    #[test]
    fn narrower_categories_walk_the_same_elements() {
        let container = SampleContainer::from_values([1, 2, 3]);
        let collect = |it| {
            let mut it: crate::ConstIter<'_, SampleState<ForwardTag>> = it;
            let end = crate::ConstIter::<SampleState<ForwardTag>>::end(&container);
            let mut seen = Vec::new();
            while it != end {
                seen.push(it.member);
                it.increment();
            }
            seen
        };
        assert_eq!(collect(crate::ConstIter::begin(&container)), [1, 2, 3]);

        let mut it = crate::ConstIter::<SampleState<BidirectionalTag>>::end(&container);
        it.decrement();
        assert_eq!(it.member, 3);

        let input = crate::ConstIter::<SampleState<InputTag>>::begin(&container);
        assert_eq!(input.member, 1);
    }

    #[test]
    fn distance_hint_needs_random_access() {
        let container = SampleContainer::from_values([1, 2, 3]);
        let begin = crate::ConstIter::<SampleState>::begin(&container);
        let end = crate::ConstIter::<SampleState>::end(&container);
        assert_eq!(end.cursor().distance_hint(begin.cursor()), Some(3));

        let begin = crate::ConstIter::<SampleState<ForwardTag>>::begin(&container);
        let end = crate::ConstIter::<SampleState<ForwardTag>>::end(&container);
        assert_eq!(end.cursor().distance_hint(begin.cursor()), None);
    }

    #[test]
    fn element_writes_land_in_the_container() {
        let mut container = SampleContainer::from_values([1, 2, 3]);
        {
            let mut it = crate::IterMut::<SampleState>::begin(&mut container);
            // SAFETY: `it` is the only iterator bound to the container.
            unsafe {
                it.get_mut().member = 10;
                it.at_mut(2).member = 30;
            }
        }
        assert_eq!(container.to_string(), "[10, 2, 30]");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn dereferencing_end_panics() {
        let container = SampleContainer::from_values([1]);
        let end = container.end();
        let _ = end.get();
    }

    #[test]
    #[should_panic(expected = "not bound")]
    fn dereferencing_unbound_panics() {
        let it = crate::ConstIter::<SampleState>::unbound();
        let _ = it.get();
    }
}
