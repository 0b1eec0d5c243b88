//! Singly linked list implementation.
//!
//! This module provides the core [`SinglyLinkedList`] type and its iterators.
//! The list stores its nodes in an arena indexed by [`Ptr`] handles and keeps
//! only a head link, so the classic pointer-rewiring algorithms, from in-place
//! reversal to cycle detection, operate on plain indices in safe Rust.
//!
//! # Examples
//!
//! ```
//! use strand_list::singly_linked_list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! // Iteration runs from head to tail
//! let values: Vec<_> = list.iter().collect();
//! assert_eq!(values, [&1, &2, &3]);
//! ```

use crate::Ptr;
use crate::arena::Arena;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;

/// A singly linked list that stores its nodes in an index arena.
///
/// The list keeps a link to the head node and nothing else. Each node links
/// to its successor through a [`Ptr`] index into the arena, which keeps the
/// usual pointer-rewiring algorithms expressible in safe Rust and allows a
/// chain to be deliberately tied into a cycle with [`create_cycle`].
///
/// Two deliberate departures from the std containers:
///
/// - There is no tail link and no cached length, so [`len`], [`back`], and
///   [`push_back`] walk the chain in O(n). Any method that walks to the end
///   of the chain does not terminate once the chain is cyclic.
/// - Values are immutable once inserted. There is no `iter_mut` and no
///   `&mut T` accessor; replace a value by removing and re-inserting it.
///
/// [`create_cycle`]: SinglyLinkedList::create_cycle
/// [`len`]: SinglyLinkedList::len
/// [`back`]: SinglyLinkedList::back
/// [`push_back`]: SinglyLinkedList::push_back
///
/// # Examples
///
/// ```
/// use strand_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_front(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
/// assert!(list.contains(&2));
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<Ptr>,
    nodes: Arena<T>,
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(1);
    /// ```
    pub fn new() -> Self {
        SinglyLinkedList {
            head: None,
            nodes: Arena::new(),
        }
    }

    /// Creates an empty list with space preallocated for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        SinglyLinkedList {
            head: None,
            nodes: Arena::with_capacity(capacity),
        }
    }

    /// Inserts `value` at the head of the list in O(1) and returns the
    /// pointer to its node.
    ///
    /// The new node's successor is the old head.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    ///
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, value: T) -> Ptr {
        let ptr = self.nodes.alloc(value, self.head);
        self.head = Some(ptr);
        ptr
    }

    /// Removes the head node and returns its value, or `None` if the list is
    /// empty. Runs in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let slot = self.nodes.free(head);
        self.head = slot.next();
        Some(slot.into_value())
    }

    /// Returns a reference to the first value, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head])
    }

    /// Returns a reference to the last value, or `None` if the list is
    /// empty.
    ///
    /// Walks the chain from the head, so this is O(n) and does not terminate
    /// on a cyclic list.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.last_ptr().map(|last| &self.nodes[last])
    }

    /// Walks to the final node of the chain. Does not terminate on a cyclic
    /// list.
    fn last_ptr(&self) -> Option<Ptr> {
        let mut cur = self.head?;
        while let Some(next) = self.nodes.slot(cur).next() {
            cur = next;
        }
        Some(cur)
    }

    /// Appends `value` at the end of the list and returns the pointer to its
    /// node.
    ///
    /// There is no tail link, so this walks the whole chain first: O(n), and
    /// non-terminating on a cyclic list. To build a list front-to-back in
    /// O(n) total, collect from an iterator or use [`Extend`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) -> Ptr {
        match self.last_ptr() {
            Some(last) => {
                let ptr = self.nodes.alloc(value, None);
                *self.nodes.slot_mut(last).next_mut() = Some(ptr);
                ptr
            }
            None => self.push_front(value),
        }
    }

    /// Returns the number of values in the list.
    ///
    /// The length is not cached, so this counts nodes by traversal: O(n),
    /// and non-terminating on a cyclic list. Prefer [`is_empty`] when only
    /// emptiness matters.
    ///
    /// [`is_empty`]: SinglyLinkedList::is_empty
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert_eq!(list.len(), 0);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list contains no values. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// list.push_front(1);
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Clears the list, dropping all values.
    ///
    /// This resets the arena rather than walking the chain, so it also works
    /// on a cyclic list. Keeps the allocated memory for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(1);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.head = None;
        self.nodes.clear();
    }

    /// Returns a reference to the value at `index`, counted from the head
    /// starting at zero, or `None` if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a reference to the value associated with the given pointer,
    /// without walking the chain. O(1).
    ///
    /// Returns `None` if the node was removed and its slot has not been
    /// reused since. Pointers are non-generational; see [`Ptr`].
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// let ptr = list.push_front(42);
    ///
    /// assert_eq!(list.ptr_get(ptr), Some(&42));
    /// ```
    pub fn ptr_get(&self, ptr: Ptr) -> Option<&T> {
        self.nodes.get(ptr)
    }

    /// Returns an iterator over the values of the list, from head to tail.
    ///
    /// The iterator element type is `&'s T`. On a cyclic list the iterator
    /// never finishes.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// for value in list.iter() {
    ///     println!("{}", value);
    /// }
    /// ```
    pub fn iter<'s>(&'s self) -> Iter<'s, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Reverses the list in place by relinking successor pointers.
    ///
    /// No values are moved or copied. The old final node becomes the head.
    /// O(n), and non-terminating on a cyclic list.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// list.reverse();
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(ptr) = cur {
            let next = self.nodes.slot(ptr).next();
            *self.nodes.slot_mut(ptr).next_mut() = prev;
            prev = Some(ptr);
            cur = next;
        }
        self.head = prev;
    }

    /// Returns the value `n` nodes from the end of the list, where
    /// `nth_back(0)` is the last value. Returns `None` if `n >= len`.
    ///
    /// Walks the chain once with two cursors spaced `n` nodes apart instead
    /// of computing the length first.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.nth_back(0), Some(&3));
    /// assert_eq!(list.nth_back(2), Some(&1));
    /// assert_eq!(list.nth_back(3), None);
    /// ```
    pub fn nth_back(&self, n: usize) -> Option<&T> {
        let mut lead = self.head?;
        for _ in 0..n {
            lead = self.nodes.slot(lead).next()?;
        }

        let mut trail = self.head?;
        while let Some(next) = self.nodes.slot(lead).next() {
            lead = next;
            trail = self.nodes.slot(trail).next()?;
        }
        Some(&self.nodes[trail])
    }

    /// Returns the value at the middle of the list, or `None` if the list is
    /// empty.
    ///
    /// For an even number of nodes this returns the second of the two
    /// central values, i.e. the value at index `len / 2`. Uses a slow cursor
    /// and a fast cursor advancing two nodes at a time, so the chain is
    /// walked only once.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let odd: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(odd.middle(), Some(&2));
    ///
    /// let even: SinglyLinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(even.middle(), Some(&3));
    /// ```
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head?;
        let mut fast = self.head?;
        while let Some(step) = self.nodes.slot(fast).next() {
            fast = match self.nodes.slot(step).next() {
                Some(two_ahead) => two_ahead,
                None => step,
            };
            slow = self.nodes.slot(slow).next()?;
        }
        Some(&self.nodes[slow])
    }

    /// Returns `true` if the chain loops back on itself.
    ///
    /// Implements Floyd's two-cursor algorithm: the fast cursor advances two
    /// nodes for every one node of the slow cursor, and a cycle exists
    /// exactly when they meet. Unlike the traversing accessors, this
    /// terminates on every list, cyclic or not, in O(n) time and O(1) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(!list.has_cycle());
    ///
    /// list.create_cycle();
    /// assert!(list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let Some(head) = self.head else {
            return false;
        };

        let mut slow = head;
        let mut fast = head;
        loop {
            let Some(one_ahead) = self.nodes.slot(fast).next() else {
                return false;
            };
            let Some(two_ahead) = self.nodes.slot(one_ahead).next() else {
                return false;
            };
            fast = two_ahead;

            slow = match self.nodes.slot(slow).next() {
                Some(next) => next,
                None => return false,
            };

            if slow == fast {
                return true;
            }
        }
    }

    /// Links the final node back to the head, deliberately making the chain
    /// cyclic. Does nothing on an empty list.
    ///
    /// This exists to exercise [`has_cycle`]. After this call the chain has
    /// no end, so a cyclic list should only be inspected through
    /// [`has_cycle`] and the O(1) accessors, cleared with [`clear`], or
    /// dropped. Calling it again on an already cyclic list does not
    /// terminate.
    ///
    /// [`has_cycle`]: SinglyLinkedList::has_cycle
    /// [`clear`]: SinglyLinkedList::clear
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// list.create_cycle();
    ///
    /// assert!(list.has_cycle());
    /// list.clear();
    /// assert!(!list.has_cycle());
    /// ```
    pub fn create_cycle(&mut self) {
        let Some(last) = self.last_ptr() else {
            return;
        };
        *self.nodes.slot_mut(last).next_mut() = self.head;
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns `true` if some value in the list equals `value`.
    ///
    /// Scans every node from head to tail, including the final one, until a
    /// match is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(list.contains(&3));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }

    /// Removes the first node, from the head, whose value equals `value` and
    /// returns the removed value. Returns `None` and leaves the list
    /// untouched if no node matches.
    ///
    /// The predecessor is relinked to the removed node's successor; later
    /// duplicates stay in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&9), None);
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let head = self.head?;
        if self.nodes[head] == *value {
            let slot = self.nodes.free(head);
            self.head = slot.next();
            return Some(slot.into_value());
        }

        let mut prev = head;
        while let Some(cur) = self.nodes.slot(prev).next() {
            if self.nodes[cur] == *value {
                let slot = self.nodes.free(cur);
                *self.nodes.slot_mut(prev).next_mut() = slot.next();
                return Some(slot.into_value());
            }
            prev = cur;
        }

        None
    }
}

impl<T: Ord> SinglyLinkedList<T> {
    /// Returns a reference to the greatest value, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [-5, -3, -9].into_iter().collect();
    ///
    /// assert_eq!(list.max(), Some(&-3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.iter().max()
    }

    /// Returns a reference to the smallest value, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = [-5, -3, -9].into_iter().collect();
    ///
    /// assert_eq!(list.min(), Some(&-9));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.iter().min()
    }

    /// Inserts `value` into an ascending-sorted list, keeping it sorted, and
    /// returns the pointer to the new node.
    ///
    /// The list must already be sorted in ascending order; building a list
    /// exclusively through this method maintains that invariant. On an
    /// unsorted list the insertion point is unspecified. A value equal to
    /// existing ones is inserted after them.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [1, 3, 5].into_iter().collect();
    /// list.insert_sorted(4);
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 3, 4, 5]);
    /// ```
    pub fn insert_sorted(&mut self, value: T) -> Ptr {
        let Some(head) = self.head else {
            return self.push_front(value);
        };
        if value < self.nodes[head] {
            return self.push_front(value);
        }

        let mut cur = head;
        while let Some(next) = self.nodes.slot(cur).next() {
            if self.nodes[next] > value {
                break;
            }
            cur = next;
        }

        let next = self.nodes.slot(cur).next();
        let ptr = self.nodes.alloc(value, next);
        *self.nodes.slot_mut(cur).next_mut() = Some(ptr);
        ptr
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends the values in source order. Tracks the growing tail, so
    /// extending by `n` values walks the existing chain once instead of once
    /// per value.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_ptr();
        for value in iter {
            let ptr = self.nodes.alloc(value, None);
            match tail {
                Some(prev) => *self.nodes.slot_mut(prev).next_mut() = Some(ptr),
                None => self.head = Some(ptr),
            }
            tail = Some(ptr);
        }
    }
}

impl<'a, T: Clone> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
