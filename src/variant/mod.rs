//! Mutable and read-only iterator variants.
//!
//! Every cursor is instantiated twice, once per variant. The variant decides
//! how the container is borrowed ([`Binding`](crate::binding::Binding)) and
//! whether the adaptor hands out `&mut` element references.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mutable {}
    impl Sealed for super::ReadOnly {}
}

/// Marker trait implemented by the two iterator variants.
pub trait Access: sealed::Sealed + fmt::Debug + 'static {
    /// Variant name used in diagnostics and trace events.
    const NAME: &'static str;
}

/// Variant whose iterators yield mutable element references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutable {}

/// Variant whose iterators yield shared element references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadOnly {}

impl Access for Mutable {
    const NAME: &'static str = "mutable";
}

impl Access for ReadOnly {
    const NAME: &'static str = "read-only";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_variants() {
        assert_eq!(Mutable::NAME, "mutable");
        assert_eq!(ReadOnly::NAME, "read-only");
    }
}
