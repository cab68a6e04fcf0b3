//! Borrowed, order-preserving views of an item slice.
//!
//! [`Filtered`] is what flows between pipeline stages. A stage that has
//! nothing to do hands its input back untouched, so an unfiltered view still
//! points at the caller's slice (`Filtered::All`). Only a stage that
//! actually drops items produces `Filtered::Subset`.

use std::slice;

/// A subsequence of a source slice, in source order.
#[derive(Debug)]
pub enum Filtered<'a, T> {
    /// Every item of the source, as the source slice itself.
    All(&'a [T]),
    /// The surviving items, in source order.
    Subset(Vec<&'a T>),
}

impl<T> Clone for Filtered<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Filtered::All(items) => Filtered::All(*items),
            Filtered::Subset(items) => Filtered::Subset(items.clone()),
        }
    }
}

impl<'a, T> Filtered<'a, T> {
    /// A view over the whole slice.
    pub fn all(items: &'a [T]) -> Self {
        Filtered::All(items)
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        match self {
            Filtered::All(items) => items.len(),
            Filtered::Subset(items) => items.len(),
        }
    }

    /// `true` when nothing is in the view.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when the view is still the untouched source slice.
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, Filtered::All(_))
    }

    /// The source slice, when the view has not been narrowed.
    pub fn as_source(&self) -> Option<&'a [T]> {
        match self {
            Filtered::All(items) => Some(*items),
            Filtered::Subset(_) => None,
        }
    }

    /// Iterate the items in order.
    pub fn iter(&self) -> Iter<'a, '_, T> {
        match self {
            Filtered::All(items) => Iter::All(items.iter()),
            Filtered::Subset(items) => Iter::Subset(items.iter()),
        }
    }

    /// Keep the items for which `pred` holds, preserving order.
    pub fn retain(self, mut pred: impl FnMut(&T) -> bool) -> Self {
        let kept = match self {
            Filtered::All(items) => items.iter().filter(|item| pred(item)).collect(),
            Filtered::Subset(items) => items.into_iter().filter(|item| pred(item)).collect(),
        };
        Filtered::Subset(kept)
    }

    /// Collect the view into a vector of references.
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T> From<&'a [T]> for Filtered<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Filtered::All(items)
    }
}

impl<'a, 'v, T> IntoIterator for &'v Filtered<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, 'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Filtered`] view.
#[derive(Debug)]
pub enum Iter<'a, 'v, T> {
    #[doc(hidden)]
    All(slice::Iter<'a, T>),
    #[doc(hidden)]
    Subset(slice::Iter<'v, &'a T>),
}

impl<'a, T> Iterator for Iter<'a, '_, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::All(it) => it.next(),
            Iter::Subset(it) => it.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::All(it) => it.size_hint(),
            Iter::Subset(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {}
