//! An owned singly linked list.
//!
//! [`LinkedList`] owns its first node through the head slot and every
//! [`Node`] owns its successor through an exclusive boxed link, so the
//! chain is acyclic by construction and teardown releases every node
//! exactly once. Everything is plain in-memory link manipulation; the
//! crate contains no `unsafe`. A length counter is maintained in lockstep
//! with the chain, which lets equality gate on size before walking and
//! keeps bounds checks O(1).
//!
//! The list offers positional insertion and removal, removal of every
//! element equal to a probe, search by equality, in-place reversal, and
//! lazy head-to-tail traversal. Elements only need [`PartialEq`], and only
//! for the operations that compare them.
//!
//! The crate is `no_std` and requires only `alloc`.
//!
//! # Examples
//!
//! ```
//! use chainlist::LinkedList;
//!
//! let mut list: LinkedList<i32> = LinkedList::new();
//! list.insert(1, 0)?;
//! list.insert(2, 1)?;
//! list.insert(1, 2)?;
//!
//! assert_eq!(list.index_of(&2), Some(1));
//! assert_eq!(list.remove_all(&1), 2);
//! assert_eq!(list, LinkedList::from_iter([2]));
//! # Ok::<(), chainlist::ListError>(())
//! ```
//!
//! Sharing a list across threads is the caller's business: mutation takes
//! `&mut self`, so concurrent use needs the usual external synchronization
//! (for example one mutex per list).
#![no_std]

extern crate alloc;

pub mod error;
pub mod iter;
pub mod list;
pub mod node;

pub use error::ListError;
pub use iter::{Iter, Nodes};
pub use list::LinkedList;
pub use node::Node;
