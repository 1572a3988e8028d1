use crate::node::Node;

/// An iterator over the nodes of a chain, head to tail.
///
/// Holds the position it will yield next, so cloning it restarts the walk
/// from that point.
pub struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Nodes { next: head }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            node
        })
    }
}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Nodes { next: self.next }
    }
}

/// An iterator over the elements of a chain, head to tail.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Iter {
            nodes: Nodes::new(head),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::item)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes.clone(),
        }
    }
}
