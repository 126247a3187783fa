//! Lazy, restartable views over underlying sequences.
//!
//! Analyses compose expressions like "the successors of `u`, transformed by `f`"
//! inside the inner loop of fixed-point iteration, so materializing an intermediate
//! container per query would dominate the cost of the analysis itself. This module
//! provides non-materializing view types instead: each view borrows (or cheaply
//! clones) its source and yields elements on demand, with O(1) additional memory per
//! composed layer.
//!
//! # Key Components
//!
//! - [`View`] - The restartable read-only sequence abstraction
//! - [`RangeView`] - A view over a begin/end cursor pair of a backing slice
//! - [`MapView`] - A lazily transformed view
//! - [`IterView`] - Adapter turning any restartable (cloneable) iterator into a view
//!
//! # Examples
//!
//! ```rust
//! use cfgcore::view::{RangeView, View};
//!
//! let order = [0usize, 1, 2];
//! let view = RangeView::new(&order);
//! assert_eq!(view.front().unwrap(), 0);
//! assert_eq!(view.back().unwrap(), 2);
//!
//! let doubled: Vec<usize> = view.map(|x| x * 2).iter().collect();
//! assert_eq!(doubled, vec![0, 2, 4]);
//! ```

use crate::{Error, Result};

/// A restartable, read-only view over a sequence.
///
/// A view can be iterated any number of times; as long as the underlying source is
/// unchanged, each run yields the same sequence. Views are cheap to clone and never
/// own a buffer of their elements.
///
/// `front` and `back` are precondition-checked accessors: calling either on an empty
/// view is a contract violation and fails fast with [`Error::EmptyViewAccess`].
/// Callers are expected to check [`is_empty`](Self::is_empty) first.
pub trait View: Clone {
    /// The element type yielded by this view.
    type Item;
    /// The iterator type produced by [`iter`](Self::iter).
    type Iter: Iterator<Item = Self::Item>;

    /// Starts a fresh iteration over the view.
    fn iter(&self) -> Self::Iter;

    /// Returns `true` if the view yields no elements.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns the number of elements the view yields.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first element of the view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyViewAccess`] if the view is empty.
    fn front(&self) -> Result<Self::Item> {
        self.iter().next().ok_or(Error::EmptyViewAccess)
    }

    /// Returns the last element of the view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyViewAccess`] if the view is empty.
    fn back(&self) -> Result<Self::Item> {
        self.iter().last().ok_or(Error::EmptyViewAccess)
    }

    /// Wraps this view in a lazy element-wise transform.
    ///
    /// No intermediate buffer is allocated; `transform` runs as elements are pulled.
    fn map<B, F>(self, transform: F) -> MapView<Self, F>
    where
        F: Fn(Self::Item) -> B + Clone,
        Self: Sized,
    {
        MapView {
            inner: self,
            transform,
        }
    }
}

/// A view over a begin/end cursor pair of a backing slice.
///
/// Elements are yielded by clone, so the view stays read-only and restartable.
#[derive(Debug, Clone)]
pub struct RangeView<'a, T> {
    items: &'a [T],
}

impl<'a, T: Clone> RangeView<'a, T> {
    /// Creates a view over the whole slice.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }
}

impl<'a, T: Clone> View for RangeView<'a, T> {
    type Item = T;
    type Iter = RangeIter<'a, T>;

    fn iter(&self) -> Self::Iter {
        RangeIter {
            items: self.items,
            pos: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn back(&self) -> Result<Self::Item> {
        self.items.last().cloned().ok_or(Error::EmptyViewAccess)
    }
}

/// Cursor over a [`RangeView`].
///
/// Two cursors are equal iff they reference the same backing slice at the same
/// position.
#[derive(Debug, Clone)]
pub struct RangeIter<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<T> PartialEq for RangeIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.pos == other.pos
    }
}

impl<T> Eq for RangeIter<'_, T> {}

impl<T: Clone> Iterator for RangeIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

/// A lazily transformed view.
///
/// Wraps an inner view and a pure transform; elements are transformed as they are
/// pulled, with no intermediate buffer.
#[derive(Debug, Clone)]
pub struct MapView<V, F> {
    inner: V,
    transform: F,
}

impl<V, F, B> View for MapView<V, F>
where
    V: View,
    F: Fn(V::Item) -> B + Clone,
{
    type Item = B;
    type Iter = MapIter<V::Iter, F>;

    fn iter(&self) -> Self::Iter {
        MapIter {
            inner: self.inner.iter(),
            transform: self.transform.clone(),
        }
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Cursor over a [`MapView`].
#[derive(Clone)]
pub struct MapIter<I, F> {
    inner: I,
    transform: F,
}

/// Like equality, the debug representation follows the underlying source cursor;
/// the transform does not participate.
impl<I: core::fmt::Debug, F> core::fmt::Debug for MapIter<I, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapIter").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Two map cursors are equal iff their underlying source cursors are equal; the
/// transform does not participate.
impl<I: PartialEq, F> PartialEq for MapIter<I, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I: Eq, F> Eq for MapIter<I, F> {}

impl<I, F, B> Iterator for MapIter<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(&self.transform)
    }
}

/// Adapter turning any restartable (cloneable) iterator into a [`View`].
///
/// The graph's successor and predecessor scans are cloneable lazy iterators; wrapping
/// one in `IterView` lets it compose with [`MapView`] without collecting into a
/// temporary sequence.
#[derive(Debug, Clone)]
pub struct IterView<I> {
    source: I,
}

impl<I: Iterator + Clone> IterView<I> {
    /// Creates a view that restarts iteration by cloning `source`.
    #[must_use]
    pub const fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I: Iterator + Clone> View for IterView<I> {
    type Item = I::Item;
    type Iter = I;

    fn iter(&self) -> Self::Iter {
        self.source.clone()
    }
}
