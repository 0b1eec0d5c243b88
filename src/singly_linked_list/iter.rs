use core::iter::FusedIterator;

use crate::Ptr;
use crate::singly_linked_list::SinglyLinkedList;

#[derive(Debug, Clone, Copy)]
/// An iterator over the values of a `SinglyLinkedList`.
///
/// This struct is created by the [`iter`] method on [`SinglyLinkedList`]. See
/// its documentation for more.
///
/// [`iter`]: SinglyLinkedList::iter
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
/// for value in list.iter() {
///     println!("{}", value);
/// }
/// ```
pub struct Iter<'a, T> {
    pub(crate) list: &'a SinglyLinkedList<T>,
    pub(crate) cursor: Option<Ptr>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.cursor?;
        self.cursor = self.list.nodes.slot(ptr).next();
        Some(&self.list.nodes[ptr])
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
/// An owning iterator over the values of a `SinglyLinkedList`.
///
/// This struct is created by the [`into_iter`] method on [`SinglyLinkedList`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
///
/// # Examples
///
/// ```
/// use strand_list::SinglyLinkedList;
///
/// let list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
///
/// for value in list {
///     println!("{}", value);
/// }
/// ```
pub struct IntoIter<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
