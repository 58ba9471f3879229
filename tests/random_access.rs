//! Random-access arithmetic, indexing and ordering over both variants.

mod common;

use std::cmp::Ordering;

use common::*;
use iter_template::{
    sample::{SampleContainer, SampleState},
    ConstIter, IterMut, IteratorError, RandomAccessTag, Traversable,
};
use test_case::test_case;

fn scenario() -> SampleContainer {
    SampleContainer::from_values([1, 2, 3, 4, 5, 6, 7, 8])
}

#[test_case(3, 2, 6 ; "ahead of position")]
#[test_case(3, -2, 2 ; "behind position")]
#[test_case(3, 0, 4 ; "at position")]
#[test_case(0, 7, 8 ; "last from begin")]
fn index_relative_to_position(start: isize, offset: isize, expected: i32) {
    let container = scenario();
    let it = container.begin() + start;
    assert_eq!(it[offset].member, expected);
    assert_eq!(it.at(offset).member, expected);
    assert_eq!(it.try_at(offset).map(|e| e.member), Ok(expected));
}

#[test_case(5, 3, 3 ; "add then subtract")]
#[test_case(7, 7, 1 ; "back to begin")]
#[test_case(2, 0, 3 ; "add only")]
fn add_then_subtract(add: isize, sub: isize, expected: i32) {
    let container = scenario();
    let it = (container.begin() + add) - sub;
    assert_eq!(it.member, expected);
}

#[test]
fn offset_on_the_left() {
    let container = scenario();
    assert_eq!((5 + container.begin()).member, 6);
    assert_eq!((0 + container.begin()).member, 1);
}

#[test]
fn compound_assignment() {
    let container = scenario();
    let mut it = container.begin();
    it += 6;
    assert_eq!(it.member, 7);
    it -= 4;
    assert_eq!(it.member, 3);
    it += -2;
    assert!(it == container.begin());
}

#[test_case(5, 2, 3 ; "ahead")]
#[test_case(2, 5, -3 ; "behind")]
#[test_case(4, 4, 0 ; "same position")]
#[test_case(8, 0, 8 ; "end to begin")]
fn distance_between_positions(lhs: isize, rhs: isize, expected: isize) {
    let container = scenario();
    let a = container.begin() + lhs;
    let b = container.begin() + rhs;
    assert_eq!(&a - &b, expected);
    assert_eq!(a.distance_from(&b), expected);
    assert_eq!(a.try_distance(&b), Ok(expected));
    assert_eq!(a - b, expected);
}

#[test_case(1, 3, Ordering::Less ; "less")]
#[test_case(3, 1, Ordering::Greater ; "greater")]
#[test_case(2, 2, Ordering::Equal ; "equal")]
fn ordering_follows_distance(lhs: isize, rhs: isize, expected: Ordering) {
    let container = scenario();
    let a = container.begin() + lhs;
    let b = container.begin() + rhs;
    assert_eq!(a.partial_cmp(&b), Some(expected));
    assert_eq!(a < b, expected == Ordering::Less);
    assert_eq!(a <= b, expected != Ordering::Greater);
    assert_eq!(a > b, expected == Ordering::Greater);
    assert_eq!(a >= b, expected != Ordering::Less);
}

#[test]
fn unbound_iterators_are_unordered_against_bound_ones() {
    let container = scenario();
    let bound = container.begin();
    let singular = ConstIter::<SampleState>::default();
    assert_eq!(bound.partial_cmp(&singular), None);
    assert_eq!(singular.partial_cmp(&bound), None);
    assert_eq!(
        singular.partial_cmp(&ConstIter::<SampleState>::default()),
        Some(Ordering::Equal)
    );
    assert!(!(bound < singular));
    assert!(!(bound > singular));
}

#[test]
fn checked_accessors_report_unbound() {
    let singular = ConstIter::<SampleState>::default();
    assert_eq!(
        singular.try_at(0).map(|e| e.member),
        Err(IteratorError::Unbound { variant: "read-only" })
    );
    assert_eq!(
        singular.try_distance(&ConstIter::<SampleState>::default()),
        Err(IteratorError::ConnectivityMismatch {
            lhs_connected: false,
            rhs_connected: false,
        })
    );
}

#[test]
fn mutable_indexing_writes_through() {
    let mut container = scenario();
    {
        let (begin, end) = container.range_mut();
        let mut it = begin.clone() + 3;
        // SAFETY: each element reference ends before the next access.
        unsafe {
            it.at_mut(2).member = 60;
            it.at_mut(-2).member = 20;
            it.at_mut(0).member = 40;
        }

        assert_eq!(end.distance_from(&begin), 8);
        assert_eq!(it.distance_from(&begin.read_only()), 3);
        assert!(it > begin);
        assert!(it < end);
    }
    let members: Vec<i32> = container.as_slice().iter().map(|e| e.member).collect();
    assert_eq!(members, vec![1, 20, 3, 40, 5, 60, 7, 8]);
}

#[test]
fn mutable_and_read_only_mix_in_arithmetic() {
    let mut container = scenario();
    let begin = IterMut::<SampleState>::begin(&mut container);
    let end = begin.to_end();
    let read_only_end = end.read_only();

    assert_eq!(&read_only_end - &begin, 8);
    assert_eq!(&begin - &read_only_end, -8);
    assert!(begin < read_only_end);
    assert!(read_only_end > begin);
    assert!(begin.read_only() + 8 == end);
}

#[test]
fn span_size_hint_is_exact_for_random_access() {
    let container = scenario();
    let mut span = container.span();
    assert_eq!(span.size_hint(), (8, Some(8)));
    span.next();
    span.next_back();
    assert_eq!(span.size_hint(), (6, Some(6)));
    assert_eq!(span.count(), 6);

    let fixture = CustomContainer::new(&[1, 2, 3]);
    let span = iter_template::Span::new(
        fixture.begin::<RandomAccessTag>(),
        fixture.end::<RandomAccessTag>(),
    );
    assert_eq!(span.size_hint(), (3, Some(3)));
}

#[test]
fn index_cursor_container_supports_random_access() {
    let container = CustomContainer::new(&[10, 20, 30, 40]);
    let begin = container.begin::<RandomAccessTag>();
    let end = container.end::<RandomAccessTag>();

    assert_eq!(end.distance_from(&begin), 4);
    assert_eq!(begin[3], CustomElement::new(40));
    assert_eq!((end.clone() - 1)[-1], CustomElement::new(30));
    assert!(begin < end);

    let mut container = CustomContainer::new(&[1, 2, 3]);
    {
        let (mut first, _end) = container.range_mut::<RandomAccessTag>();
        // SAFETY: `_end` is never dereferenced.
        unsafe { first.at_mut(2) }.set_value(33);
    }
    assert_eq!(container.values(), vec![1, 2, 33]);
}
