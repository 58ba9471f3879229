//! Iterator category tags.
//!
//! A state declares exactly one tag. The capability traits form the same
//! hierarchy as the tags, so a bound such as `S::Category: Reversible` accepts
//! bidirectional and random-access states but rejects forward-only ones.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::InputTag {}
    impl Sealed for super::ForwardTag {}
    impl Sealed for super::BidirectionalTag {}
    impl Sealed for super::RandomAccessTag {}
}

/// Implemented by every category tag.
pub trait Category: sealed::Sealed + fmt::Debug + 'static {
    /// Category name used in diagnostics and trace events.
    const NAME: &'static str;

    /// Position in the capability hierarchy (input = 0).
    const RANK: u8;
}

/// Forward and above: copies of an iterator traverse independently.
pub trait MultiPass: Category {}

/// Bidirectional and above: the cursor can step backwards.
pub trait Reversible: MultiPass {}

/// Random access: the cursor moves by arbitrary offsets and measures distance.
pub trait RandomAccessible: Reversible {}

/// Single-pass iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTag {}

/// Multi-pass forward iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForwardTag {}

/// Forward iteration plus single steps backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidirectionalTag {}

/// Bidirectional iteration plus constant-time jumps, indexing and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomAccessTag {}

impl Category for InputTag {
    const NAME: &'static str = "input";
    const RANK: u8 = 0;
}

impl Category for ForwardTag {
    const NAME: &'static str = "forward";
    const RANK: u8 = 1;
}

impl Category for BidirectionalTag {
    const NAME: &'static str = "bidirectional";
    const RANK: u8 = 2;
}

impl Category for RandomAccessTag {
    const NAME: &'static str = "random-access";
    const RANK: u8 = 3;
}

impl MultiPass for ForwardTag {}
impl MultiPass for BidirectionalTag {}
impl MultiPass for RandomAccessTag {}

impl Reversible for BidirectionalTag {}
impl Reversible for RandomAccessTag {}

impl RandomAccessible for RandomAccessTag {}

/// Returns `true` when category `C` offers at least the capabilities of `D`.
pub const fn at_least<C: Category, D: Category>() -> bool {
    C::RANK >= D::RANK
}
