#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod singly_linked_list;

extern crate alloc;

use core::num::NonZeroU32;

pub use singly_linked_list::IntoIter;
pub use singly_linked_list::Iter;
pub use singly_linked_list::SinglyLinkedList;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A pointer type used to identify nodes in a singly linked list.
///
/// This is an opaque handle that can be used to read a node's value without
/// walking the chain from the head. It provides O(1) access to nodes. It is
/// **non-generational**, meaning that once a node is removed, the pointer may
/// be re-used for a new node.
///
/// `Option<Ptr>` is the same size as `Ptr` itself (4 bytes), so links cost no
/// more than a plain index.
///
/// # Examples
///
/// ```
/// use strand_list::Ptr;
/// use strand_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// let ptr: Ptr = list.push_front(42);
///
/// // Use the pointer for direct access
/// assert_eq!(list.ptr_get(ptr), Some(&42));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
