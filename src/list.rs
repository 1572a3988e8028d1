use alloc::boxed::Box;
use core::fmt;
use core::ops::Index;

use crate::error::ListError;
use crate::iter::{Iter, Nodes};
use crate::node::{Link, Node};

/// An owned singly linked list.
///
/// The list owns its first node through the head slot and every node owns
/// its successor, so the chain is acyclic by construction and dropping the
/// list releases every node exactly once. `len` is kept in lockstep with
/// the chain: it changes only when a node is actually linked or unlinked.
///
/// Positions are 0-indexed from the head. The element type is
/// unconstrained; operations that compare elements ask for [`PartialEq`]
/// and nothing more.
///
/// # Examples
///
/// ```
/// use chainlist::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.insert(10, 0)?;
/// list.insert(20, 1)?;
/// list.insert(15, 1)?;
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], 15);
///
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [20, 15, 10]);
/// # Ok::<(), chainlist::ListError>(())
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// The number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the elements, head to tail.
    ///
    /// The iterator borrows the list, so the sequence it yields cannot
    /// change underneath it; call `iter` again (or clone the iterator) to
    /// restart the traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Iterates over the nodes, head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.head.as_deref())
    }

    /// The element at `index`, or `None` when `index` is past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(Node::item)
    }

    /// The node at `index`, or `None` when `index` is past the end.
    ///
    /// Never fails; asking an empty list for any position is answered with
    /// `None`.
    pub fn node_at(&self, index: usize) -> Option<&Node<T>> {
        self.nodes().nth(index)
    }

    /// Inserts `item` so that it occupies `index`; the nodes previously at
    /// `index` and after shift one position towards the tail.
    ///
    /// `index` may be anything in `0..=len`: `0` makes the item the new
    /// head and `len` appends it after the tail.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexTooBig`] when `index > len`. The list is
    /// left untouched in that case.
    pub fn insert(&mut self, item: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexTooBig);
        }
        let slot = self.slot_mut(index);
        let next = slot.take();
        *slot = Some(Box::new(Node::new(item, next)));
        self.len += 1;
        Ok(())
    }

    /// Unlinks the node at `index` and returns its item; the nodes after
    /// it shift one position towards the head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexTooBig`] when `index >= len`; unlike
    /// insertion, removal has no meaningful position at `len`. The list is
    /// left untouched in that case, so removing from an empty list is an
    /// error, not a crash.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexTooBig);
        }
        let slot = self.slot_mut(index);
        let node = slot.take().expect("Positions below the length are occupied");
        let Node { item, next } = *node;
        *slot = next;
        self.len -= 1;
        Ok(item)
    }

    /// Unlinks every node whose item equals `item`, in one pass over the
    /// chain, and returns how many were removed.
    ///
    /// Matches at the head, at the tail and in adjacent runs are all
    /// removed; a slot is examined again after the node behind it is
    /// unlinked. An empty list, or a list without matches, is left as it
    /// is.
    pub fn remove_all(&mut self, item: &T) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut slot = &mut self.head;
        loop {
            match slot.take() {
                Some(node) if node.item == *item => {
                    *slot = node.next;
                    removed += 1;
                }
                Some(node) => slot = &mut slot.insert(node).next,
                None => break,
            }
        }
        self.len -= removed;
        removed
    }

    /// Iterates over every node whose item equals `item`, in traversal
    /// order. The sequence is empty when nothing matches, including on an
    /// empty list.
    pub fn find_all<'a>(&'a self, item: &'a T) -> impl Iterator<Item = &'a Node<T>>
    where
        T: PartialEq,
    {
        self.nodes().filter(move |node| node.item() == item)
    }

    /// The position of the first node whose item equals `item`, or `None`
    /// when nothing matches.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Reverses the chain in place by relinking every node's successor to
    /// its former predecessor and pointing the head at the former tail.
    ///
    /// Runs in O(len) time and O(1) extra space; the length does not
    /// change. Reversing twice restores the original order.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Unlinks the whole chain and resets the length to zero.
    ///
    /// The nodes are released one by one from the head, so clearing (and
    /// therefore dropping) an arbitrarily long list uses constant stack.
    pub fn clear(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            head = node.next;
        }
        self.len = 0;
    }

    /// Walks to the `index`-th successor slot; the head slot is slot 0, a
    /// node's `next` slot is one past that node. Callers keep `index`
    /// within `0..=len`, which makes slot `len` the vacant one after the
    /// tail.
    fn slot_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot
                .as_mut()
                .expect("The walk stays inside the chain")
                .next;
        }
        slot
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    /// Two lists are equal when they have the same length and element-wise
    /// equal items in traversal order. The length check runs first, so
    /// comparison never walks past the shorter chain.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// Direct access to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len`. Callers are expected to keep the index
    /// in bounds — validate with [`LinkedList::len`] or use
    /// [`LinkedList::get`] when the position is not known to be valid.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Renders the elements in traversal order as `[a, b, c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds a list holding the iterator's items in iteration order, in
    /// O(n) by keeping a cursor on the tail slot.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for item in iter {
            tail = &mut tail.insert(Box::new(Node::new(item, None))).next;
            list.len += 1;
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
