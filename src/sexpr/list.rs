//! Persistent singly-linked list
//!
//! Token streams and s-expression children are held in this list. It supports
//! exactly the access pattern the parser needs: O(1) prepend and decomposition
//! into "empty" or "head + tail". Tails are shared between lists through `Rc`,
//! so handing the remaining tokens to a recursive call never copies them.
//!
//! Indexed access (`nth`) exists for convenience and is O(n).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

/// An immutable, structurally shared sequence.
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
}

struct Node<T> {
    value: T,
    next: List<T>,
}

impl<T> List<T> {
    /// The empty list
    pub fn empty() -> Self {
        List { head: None }
    }

    /// A new list with `value` in front of `tail`
    pub fn cons(value: T, tail: List<T>) -> Self {
        List {
            head: Some(Rc::new(Node { value, next: tail })),
        }
    }

    /// A new list with `value` in front of this one. `self` is shared, not copied.
    pub fn prepend(&self, value: T) -> Self {
        List::cons(value, self.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Decompose into the first element and the remaining list.
    ///
    /// Returns `None` for the empty list. This is the only way the parser reads
    /// a token stream.
    pub fn uncons(&self) -> Option<(&T, &List<T>)> {
        self.head.as_deref().map(|node| (&node.value, &node.next))
    }

    pub fn head(&self) -> Option<&T> {
        self.uncons().map(|(head, _)| head)
    }

    pub fn tail(&self) -> Option<&List<T>> {
        self.uncons().map(|(_, tail)| tail)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Number of elements (O(n))
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The element at `index`, or `None` when out of range (O(n))
    pub fn nth(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// A new list with the elements satisfying `predicate`, in order
    pub fn filter<P>(&self, mut predicate: P) -> List<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(value)).cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Drop for List<T> {
    // Unlink uniquely owned cells one by one so a long list never drops recursively.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |tail, value| List::cons(value, tail))
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for value in self.iter() {
            value.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.head.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
