use alloc::vec::Vec;
use core::clone::Clone;
use core::ops::Index;
use core::panic;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[derive(Debug, Clone, Copy)]
enum DataOrFree<T> {
    Free,
    Data(T),
}

/// One arena slot: the successor link plus the stored value. The `next` field
/// of a free slot threads the free list instead.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<T> {
    next: Option<Ptr>,
    data: DataOrFree<T>,
}

impl<T> Slot<T> {
    pub(crate) fn next(&self) -> Option<Ptr> {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Option<Ptr> {
        &mut self.next
    }

    pub(crate) fn value(&self) -> &T {
        match &self.data {
            DataOrFree::Data(value) => value,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn into_value(self) -> T {
        match self.data {
            DataOrFree::Data(value) => value,
            DataOrFree::Free => assert_free(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Ptr>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn slot(&self, ptr: Ptr) -> &Slot<T> {
        &self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn slot_mut(&mut self, ptr: Ptr) -> &mut Slot<T> {
        &mut self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    pub(crate) fn alloc(&mut self, value: T, next: Option<Ptr>) -> Ptr {
        if let Some(ptr) = self.free_head {
            let old = core::mem::replace(
                &mut self.slots[ptr.unchecked_get()],
                Slot {
                    next,
                    data: DataOrFree::Data(value),
                },
            );
            self.free_head = old.next;
            ptr
        } else {
            let ptr = Ptr::unchecked_from(self.slots.len());
            self.slots.push(Slot {
                next,
                data: DataOrFree::Data(value),
            });
            ptr
        }
    }

    /// Occupancy check that tolerates stale pointers, including ones that
    /// outlived a `clear` and now point past the end of the slot vector.
    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        self.slots
            .get(ptr.unchecked_get())
            .is_some_and(|slot| matches!(slot.data, DataOrFree::Data(_)))
    }

    pub(crate) fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.slots.get(ptr.unchecked_get()) {
            Some(Slot {
                data: DataOrFree::Data(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Slot<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                data: DataOrFree::Free,
            },
        );
        self.free_head = Some(ptr);

        result
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = T;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.slots[index.unchecked_get()].value()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::assert_eq;

    use super::*;

    #[test]
    fn test_ptr_roundtrip() {
        let ptr = Ptr::unchecked_from(42);
        assert_eq!(ptr.unchecked_get(), 42);
    }

    #[test]
    fn test_ptr_debug() {
        let ptr = Ptr::unchecked_from(42);
        assert_eq!(format!("{:?}", ptr), "Ptr(42)");
    }

    #[test]
    fn test_ptr_equality() {
        let ptr1 = Ptr::unchecked_from(42);
        let ptr2 = Ptr::unchecked_from(42);
        let ptr3 = Ptr::unchecked_from(43);

        assert_eq!(ptr1, ptr2);
        assert_ne!(ptr1, ptr3);
    }

    #[test]
    fn test_arena_new() {
        let arena: Arena<Vec<i32>> = Arena::new();
        assert_eq!(arena.slots.len(), 0);
        assert_eq!(arena.free_head, None);
    }

    #[test]
    fn test_arena_with_capacity() {
        let arena: Arena<Vec<i32>> = Arena::with_capacity(10);
        assert_eq!(arena.slots.capacity(), 10);
    }

    #[test]
    fn test_arena_alloc_single() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(vec![1, 2, 3, 4, 5], None);

        assert!(arena.is_occupied(ptr));
        assert_eq!(arena.slots.len(), 1);
        assert_eq!(arena[ptr], [1, 2, 3, 4, 5]);
        assert_eq!(arena.slot(ptr).next(), None);
    }

    #[test]
    fn test_arena_alloc_multiple() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), Some(ptr1));
        let ptr3 = arena.alloc("three".to_string(), Some(ptr2));

        assert_ne!(ptr1, ptr2);
        assert_ne!(ptr2, ptr3);
        assert_ne!(ptr1, ptr3);

        assert!(arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));
        assert!(arena.is_occupied(ptr3));

        assert_eq!(arena[ptr1], "one");
        assert_eq!(arena[ptr2], "two");
        assert_eq!(arena[ptr3], "three");
        assert_eq!(arena.slot(ptr3).next(), Some(ptr2));
        assert_eq!(arena.slot(ptr2).next(), Some(ptr1));
        assert_eq!(arena.slot(ptr1).next(), None);
    }

    #[test]
    fn test_arena_free_and_reuse() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), Some(ptr1));

        assert!(arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        let slot = arena.free(ptr1);
        assert_eq!(slot.next(), None);
        assert_eq!(slot.into_value(), "one");
        assert!(!arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        let ptr3 = arena.alloc("three".to_string(), None);
        assert_eq!(ptr3, ptr1);
        assert!(arena.is_occupied(ptr3));
        assert_eq!(arena[ptr3], "three");
    }

    #[test]
    fn test_arena_free_list_order() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc(1, None);
        let ptr2 = arena.alloc(2, None);
        arena.alloc(3, None);

        arena.free(ptr1);
        arena.free(ptr2);

        // Most recently freed slot is reused first.
        assert_eq!(arena.alloc(4, None), ptr2);
        assert_eq!(arena.alloc(5, None), ptr1);
    }

    #[test]
    fn test_arena_get() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(7, None);

        assert_eq!(arena.get(ptr), Some(&7));

        arena.free(ptr);
        assert_eq!(arena.get(ptr), None);

        assert_eq!(arena.get(Ptr::unchecked_from(100)), None);
    }

    #[test]
    fn test_arena_links() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), None);

        assert_eq!(arena.slot(ptr1).next(), None);

        *arena.slot_mut(ptr1).next_mut() = Some(ptr2);
        assert_eq!(arena.slot(ptr1).next(), Some(ptr2));
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = Arena::new();
        arena.alloc("one".to_string(), None);
        arena.alloc("two".to_string(), None);

        assert_eq!(arena.slots.len(), 2);

        arena.clear();

        assert_eq!(arena.slots.len(), 0);
        assert_eq!(arena.free_head, None);
    }

    #[test]
    fn test_arena_clear_stale_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc("one".to_string(), None);

        arena.clear();

        assert!(!arena.is_occupied(ptr));
        assert_eq!(arena.get(ptr), None);
    }

    #[test]
    fn test_arena_clone() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), None);

        *arena.slot_mut(ptr1).next_mut() = Some(ptr2);

        let cloned_arena = arena.clone();

        assert_eq!(cloned_arena.slots.len(), arena.slots.len());
        assert_eq!(cloned_arena.free_head, arena.free_head);
        assert_eq!(cloned_arena[ptr1], arena[ptr1]);
        assert_eq!(cloned_arena[ptr2], arena[ptr2]);
        assert_eq!(cloned_arena.slot(ptr1).next(), Some(ptr2));
    }

    #[test]
    fn test_arena_clone_with_free_slots() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), None);
        let ptr3 = arena.alloc("three".to_string(), None);

        arena.free(ptr2);

        let cloned_arena = arena.clone();

        assert!(cloned_arena.is_occupied(ptr1));
        assert!(!cloned_arena.is_occupied(ptr2));
        assert!(cloned_arena.is_occupied(ptr3));

        assert_eq!(cloned_arena.free_head, arena.free_head);
    }

    #[test]
    #[should_panic]
    fn test_arena_index_unoccupied_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc("one".to_string(), None);
        arena.free(ptr);
        let _ = &arena[ptr];
    }

    #[test]
    #[should_panic]
    fn test_arena_free_unoccupied_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc("one".to_string(), None);
        arena.free(ptr);
        arena.free(ptr);
    }

    #[test]
    fn test_niche_optimization() {
        use core::mem::size_of;
        assert_eq!(size_of::<Option<Ptr>>(), size_of::<u32>());
        assert_eq!(
            size_of::<DataOrFree<Vec<i32>>>(),
            size_of::<Vec<i32>>()
        );
        assert_eq!(
            size_of::<Slot<Vec<i32>>>(),
            size_of::<(Option<Ptr>, Vec<i32>)>()
        );
    }
}
