//! Non-owning container references.
//!
//! A [`Binding`] records which container an iterator walks. It never owns the
//! container: the borrow lifetime `'a` keeps the container alive for as long
//! as any iterator bound to it exists.
//!
//! # Aliasing
//!
//! Iterators are positions, and several positions over one container must
//! coexist (`begin` and `end` at minimum). Bindings are therefore plain
//! pointers that can be copied freely, also in the mutable variant. Shared
//! access through [`Binding::get`] is safe. Exclusive access through
//! [`Binding::get_mut`] is `unsafe`, because nothing stops another copy of the
//! same binding from reading or writing the container at the same time.

use std::{fmt, marker::PhantomData, ptr::NonNull};

use crate::variant::{Access, Mutable, ReadOnly};

/// Non-owning reference from an iterator state to its container.
pub struct Binding<'a, C: ?Sized, A: Access> {
    container: NonNull<C>,
    _marker: PhantomData<(&'a mut C, A)>,
}

impl<'a, C: ?Sized> Binding<'a, C, ReadOnly> {
    /// Bind to a container for read-only iteration.
    pub fn new(container: &'a C) -> Self {
        Self {
            container: NonNull::from(container),
            _marker: PhantomData,
        }
    }
}

impl<'a, C: ?Sized> Binding<'a, C, Mutable> {
    /// Bind to a container for mutable iteration.
    pub fn new_mut(container: &'a mut C) -> Self {
        Self {
            container: NonNull::from(container),
            _marker: PhantomData,
        }
    }

    /// Exclusive access to the container.
    ///
    /// # Safety
    ///
    /// Copies of this binding (and read-only bindings downgraded from them)
    /// point at the same container. While the returned reference lives, the
    /// caller must not access the container through any other copy.
    ///
    /// ```compile_fail
    /// use iter_template::Binding;
    ///
    /// let mut values = vec![1, 2, 3];
    /// let mut binding = Binding::new_mut(&mut values);
    /// binding.get_mut().push(4);
    /// ```
    pub unsafe fn get_mut(&mut self) -> &mut C {
        // SAFETY: created from `&'a mut C`, so only copies of this binding can
        // reach the container during `'a`; the caller excludes those.
        unsafe { self.container.as_mut() }
    }
}

impl<'a, C: ?Sized, A: Access> Binding<'a, C, A> {
    /// Shared access to the container.
    pub fn get(&self) -> &C {
        // SAFETY: the pointer came from a reference that lives for `'a`.
        unsafe { self.container.as_ref() }
    }

    /// Downgrade to a read-only binding of the same container.
    pub fn read_only(self) -> Binding<'a, C, ReadOnly> {
        Binding {
            container: self.container,
            _marker: PhantomData,
        }
    }

    /// Whether both bindings refer to the same container instance.
    pub fn same_container<B: Access>(&self, other: &Binding<'a, C, B>) -> bool {
        self.container.cast::<()>() == other.container.cast::<()>()
    }
}

impl<'a, C: ?Sized, A: Access> Clone for Binding<'a, C, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized, A: Access> Copy for Binding<'a, C, A> {}

impl<'a, C: ?Sized> From<&'a C> for Binding<'a, C, ReadOnly> {
    fn from(container: &'a C) -> Self {
        Self::new(container)
    }
}

impl<'a, C: ?Sized> From<&'a mut C> for Binding<'a, C, Mutable> {
    fn from(container: &'a mut C) -> Self {
        Self::new_mut(container)
    }
}

impl<C: ?Sized, A: Access> fmt::Debug for Binding<'_, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("variant", &A::NAME)
            .field("container", &self.container.cast::<()>())
            .finish()
    }
}
