use alloc::boxed::Box;
use core::fmt;

/// An owning successor slot: either the next node of the chain or the end
/// of it. The list's head is the first such slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of the chain, holding one element and the exclusive link
/// to its successor.
///
/// Nodes are created by the list when an element is inserted and released
/// when their slot is relinked past them, so there is exactly one owner per
/// node and teardown cannot leak or double-free. Callers only ever see
/// shared references to nodes, handed out by
/// [`LinkedList::node_at`](crate::LinkedList::node_at),
/// [`LinkedList::nodes`](crate::LinkedList::nodes) and
/// [`LinkedList::find_all`](crate::LinkedList::find_all).
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(item: T, next: Link<T>) -> Self {
        Node { item, next }
    }

    /// The element stored in this node.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The successor node, or `None` at the end of the chain.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    /// Shows the item only; printing the successor chain recursively could
    /// exhaust the stack on a long list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
