//! An immutable singly-linked sequence with structural sharing.
//!
//! [`ConsList`] is either empty or a head element followed by a shared tail.
//! Prepending is O(1) and never touches the existing sequence: the new node
//! points to the old spine through an [`Arc`], so any number of sequences can
//! share the same suffix. Iteration is head-first, i.e. last-inserted-first.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    sync::Arc,
};

use itertools::Itertools;

/// `head` or `tail` was requested on the empty sequence.
///
/// Always a programming error at the call site: check [`ConsList::is_empty`]
/// first, or iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the sequence is empty")]
pub struct EmptySequenceError;

#[derive(Debug)]
struct Node<T> {
    head: T,
    tail: ConsList<T>,
}

/// A persistent cons list.
///
/// Cloning is O(1) (a reference-count bump), whatever the length. All
/// observers borrow; no element is ever copied or moved by the list itself.
#[derive(Debug)]
pub struct ConsList<T>(Option<Arc<Node<T>>>);

impl<T> ConsList<T> {
    /// The empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Returns a new sequence with `head` in front of `self`.
    ///
    /// O(1); `self` is shared as the tail of the result, not copied.
    #[must_use]
    pub fn prepend(&self, head: T) -> Self {
        Self(Some(Arc::new(Node {
            head,
            tail: self.clone(),
        })))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Splits into the first element and the remainder, or `None` when empty.
    #[inline]
    pub fn split(&self) -> Option<(&T, &ConsList<T>)> {
        self.0.as_deref().map(|node| (&node.head, &node.tail))
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> Result<&T, EmptySequenceError> {
        self.split().map(|(head, _)| head).ok_or(EmptySequenceError)
    }

    /// The sequence without its first element.
    #[inline]
    pub fn tail(&self) -> Result<&ConsList<T>, EmptySequenceError> {
        self.split().map(|(_, tail)| tail).ok_or(EmptySequenceError)
    }

    /// Number of elements, computed by traversal.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Head-first iteration, last-inserted-first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cursor: self }
    }

    /// Whether some element equals `item`, checked head-first and
    /// short-circuiting on the first match.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().contains(item)
    }
}

impl<T> Clone for ConsList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same elements in the same order.
impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for ConsList<T> {}

/// Combined over the elements in iteration order, so that structurally equal
/// sequences hash equal regardless of how they were built.
impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for item in self {
            item.hash(state);
            len += 1;
        }
        state.write_usize(len);
    }
}

/// Renders oldest-first (the reverse of iteration order), joined by `";"`.
/// Diagnostics only, not a parseable format.
impl<T: Display> Display for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.iter().collect_vec();
        write!(f, "{}", items.iter().rev().join(";"))
    }
}

/// Borrowing head-first iterator over a [`ConsList`].
///
/// Each call to [`ConsList::iter`] starts fresh from the same immutable
/// structure.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    cursor: &'a ConsList<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.cursor.split()?;
        self.cursor = tail;
        Some(head)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
