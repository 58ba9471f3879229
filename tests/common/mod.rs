//! Shared fixtures: one container type iterated through four states, one per
//! category, all sharing an index cursor that counts binds and drops.

#![allow(dead_code)]

use std::{cell::Cell, marker::PhantomData};

use iter_template::{
    category::at_least, Access, BidirectionalCursor, BidirectionalTag, Binding, Category,
    ConstIter, Cursor, CursorMut, ForwardTag, InputTag, IterMut, IteratorState, Mutable,
    RandomAccessCursor, RandomAccessCursorMut, RandomAccessTag, RandomAccessible, ReadOnly,
    Reversible,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomElement {
    data: i32,
}

impl CustomElement {
    pub fn new(data: i32) -> Self {
        Self { data }
    }

    pub fn value(&self) -> i32 {
        self.data
    }

    pub fn set_value(&mut self, data: i32) {
        self.data = data;
    }
}

#[derive(Debug, Default)]
pub struct CustomContainer {
    data: Vec<CustomElement>,
    connects: Cell<u32>,
    disconnects: Cell<u32>,
}

impl CustomContainer {
    pub fn new(values: &[i32]) -> Self {
        Self {
            data: values.iter().copied().map(CustomElement::new).collect(),
            ..Self::default()
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.data.iter().map(CustomElement::value).collect()
    }

    pub fn connect_count(&self) -> u32 {
        self.connects.get()
    }

    pub fn disconnect_count(&self) -> u32 {
        self.disconnects.get()
    }

    pub fn begin<T: Category>(&self) -> ConstIter<'_, States<T>> {
        ConstIter::begin(self)
    }

    pub fn end<T: Category>(&self) -> ConstIter<'_, States<T>> {
        ConstIter::end(self)
    }

    pub fn range_mut<T: Category>(&mut self) -> (IterMut<'_, States<T>>, IterMut<'_, States<T>>) {
        let binding = Binding::new_mut(self);
        (IterMut::begin_with(binding), IterMut::end_with(binding))
    }
}

/// Iteration description declaring category `T` over [`CustomContainer`].
#[derive(Debug)]
pub struct States<T>(PhantomData<T>);

pub type InputStates = States<InputTag>;
pub type ForwardStates = States<ForwardTag>;
pub type BidirectionalStates = States<BidirectionalTag>;
pub type RandomAccessStates = States<RandomAccessTag>;

impl<T: Category> IteratorState for States<T> {
    type Category = T;
    type Container = CustomContainer;
    type Value = CustomElement;
    type Cursor<'a, A: Access> = IndexCursor<'a, T, A> where Self: 'a;
}

#[derive(Debug)]
pub struct IndexCursor<'a, T, A: Access> {
    container: Option<Binding<'a, CustomContainer, A>>,
    index: isize,
    _category: PhantomData<T>,
}

impl<'a, T, A: Access> IndexCursor<'a, T, A> {
    fn container(&self) -> &CustomContainer {
        match &self.container {
            Some(binding) => binding.get(),
            None => panic!("unbound cursor dereferenced"),
        }
    }

    fn slot(&self, offset: isize) -> usize {
        usize::try_from(self.index + offset).unwrap_or(usize::MAX)
    }
}

impl<'a, T> IndexCursor<'a, T, Mutable> {
    unsafe fn element_mut(&mut self, offset: isize) -> &mut CustomElement {
        let slot = self.slot(offset);
        match &mut self.container {
            Some(binding) => &mut unsafe { binding.get_mut() }.data[slot],
            None => panic!("unbound cursor dereferenced"),
        }
    }
}

impl<T, A: Access> Clone for IndexCursor<'_, T, A> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            index: self.index,
            _category: PhantomData,
        }
    }
}

impl<T, A: Access> Drop for IndexCursor<'_, T, A> {
    fn drop(&mut self) {
        if let Some(binding) = &self.container {
            let counter = &binding.get().disconnects;
            counter.set(counter.get() + 1);
        }
    }
}

impl<'a, T: Category, A: Access> Cursor<'a, A, States<T>> for IndexCursor<'a, T, A> {
    fn unbound() -> Self {
        Self {
            container: None,
            index: 0,
            _category: PhantomData,
        }
    }

    fn bind(container: Binding<'a, CustomContainer, A>) -> Self {
        let counter = &container.get().connects;
        counter.set(counter.get() + 1);
        Self {
            container: Some(container),
            index: 0,
            _category: PhantomData,
        }
    }

    fn to_read_only(&self) -> IndexCursor<'a, T, ReadOnly> {
        IndexCursor {
            container: self.container.map(Binding::read_only),
            index: self.index,
            _category: PhantomData,
        }
    }

    fn seek_begin(&mut self) {
        self.index = 0;
    }

    fn seek_end(&mut self) {
        self.index = self.container().data.len() as isize;
    }

    fn is_connected(&self) -> bool {
        self.container.is_some()
    }

    fn is_equal<B: Access>(&self, other: &IndexCursor<'a, T, B>) -> bool {
        self.index == other.index
    }

    fn next(&mut self) {
        self.index += 1;
    }

    fn distance_hint<B: Access>(&self, other: &IndexCursor<'a, T, B>) -> Option<isize> {
        at_least::<T, RandomAccessTag>().then(|| self.index - other.index)
    }

    fn get(&self) -> &CustomElement {
        &self.container().data[self.slot(0)]
    }
}

impl<'a, T: Category> CursorMut<'a, States<T>> for IndexCursor<'a, T, Mutable> {
    unsafe fn get_mut(&mut self) -> &mut CustomElement {
        unsafe { self.element_mut(0) }
    }
}

impl<'a, T: Reversible, A: Access> BidirectionalCursor<'a, A, States<T>> for IndexCursor<'a, T, A> {
    fn prev(&mut self) {
        self.index -= 1;
    }
}

impl<'a, T: RandomAccessible, A: Access> RandomAccessCursor<'a, A, States<T>>
    for IndexCursor<'a, T, A>
{
    fn move_by(&mut self, offset: isize) {
        self.index += offset;
    }

    fn at(&self, offset: isize) -> &CustomElement {
        &self.container().data[self.slot(offset)]
    }

    fn distance<B: Access>(&self, other: &IndexCursor<'a, T, B>) -> isize {
        self.index - other.index
    }
}

impl<'a, T: RandomAccessible> RandomAccessCursorMut<'a, States<T>> for IndexCursor<'a, T, Mutable> {
    unsafe fn at_mut(&mut self, offset: isize) -> &mut CustomElement {
        unsafe { self.element_mut(offset) }
    }
}
