use std::fmt::{Debug, Formatter};

use crate::error::{ListError, Result};
use crate::{IntoIter, Iter, IterMut};
use self::arena::{Arena, GHOST};

pub mod display;
pub mod iterator;

mod algorithms;
mod arena;

/// The `List` is a circular doubly-linked list anchored by a ghost (sentinel)
/// node. It allows inserting and removing elements next to a known node in
/// constant time. In compromise, searching by value or by position takes
/// *O*(*n*) time.
///
/// The `List` contains:
/// - an arena of nodes, where slot 0 is the ghost node and every other live
///   slot carries one element;
/// - a length field `len` caching the number of elements.
///
/// Links between nodes are slot indices, so a link can never dangle.
///
/// # Indexing
///
/// Positions are 1-based: the first element is at index 1 and the ghost node
/// is never addressable.
///
/// With the default `legacy-indexing` feature, two operations keep a
/// historical numbering:
/// - [`List::find_index_by_value`] reports the first element at index 2;
/// - [`List::insert_at_index`] only accepts `1 <= index < len`.
///
/// Disable the feature to get plain 1-based numbering everywhere:
/// ```text
/// [dependencies]
/// circular_list = { default-features = false }
/// ```
/// [`List::position`] always uses plain 1-based numbering.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    arena: Arena<T>,
    /// the length of the list
    pub(crate) len: usize,
}

// private methods
impl<T> List<T> {
    #[inline]
    pub(crate) fn ghost_node(&self) -> usize {
        GHOST
    }
    #[inline]
    pub(crate) fn front_node(&self) -> usize {
        self.arena.node(GHOST).next
    }
    #[inline]
    pub(crate) fn back_node(&self) -> usize {
        self.arena.node(GHOST).prev
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.arena.node_mut(prev).next = next;
        self.arena.node_mut(next).prev = prev;
    }

    /// Attach a detached node `node` to the list, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent nodes of this list (only checked
    /// in `#[cfg(debug_assertions)]`).
    fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        assert_adjacent(&self.arena, prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(&self.arena, prev, node);
            assert_adjacent(&self.arena, node, next);
        }
    }

    /// Detach the element node `node` from the list, release its slot and
    /// return its element.
    fn detach_node(&mut self, node: usize) -> Option<T> {
        debug_assert_ne!(node, GHOST);
        let (prev, next) = {
            let node = self.arena.node(node);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        self.len -= 1;
        self.arena.release(node)
    }

    /// Allocate a node for `elt` and attach it between `prev` and `next`.
    ///
    /// Nothing is linked if the allocation fails.
    fn try_insert_between(&mut self, prev: usize, next: usize, elt: T) -> Result<()> {
        let node = self.arena.try_insert(elt)?;
        self.attach_node(prev, next, node);
        Ok(())
    }

    /// Find the first node, in forward order, whose element equals `value`.
    fn find_node(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut slot = self.front_node();
        while slot != GHOST {
            let node = self.arena.node(slot);
            if node.element.as_ref() == Some(value) {
                return Some(slot);
            }
            slot = node.next;
        }
        None
    }

    /// Find the node at the 1-based `index`, walking from whichever end is
    /// closer.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index == 0 || index > self.len {
            return None;
        }
        let mut slot;
        if index <= self.len / 2 + 1 {
            slot = self.front_node();
            for _ in 1..index {
                slot = self.arena.node(slot).next;
            }
        } else {
            slot = self.back_node();
            for _ in index..self.len {
                slot = self.arena.node(slot).prev;
            }
        }
        Some(slot)
    }

    /// The node a new element at `index` is inserted in front of.
    #[cfg(feature = "legacy-indexing")]
    fn insertion_node(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.len {
            return None;
        }
        self.node_at(index)
    }

    /// The node a new element at `index` is inserted in front of.
    #[cfg(not(feature = "legacy-indexing"))]
    fn insertion_node(&self, index: usize) -> Option<usize> {
        if self.len.checked_add(1) == Some(index) {
            return Some(self.ghost_node());
        }
        self.node_at(index)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            len: 0,
        }
    }

    /// Create an empty `List`, reporting [`ListError::Allocation`] instead of
    /// aborting if the ghost node cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list = List::<u32>::try_new().unwrap();
    /// assert!(list.is_empty());
    /// ```
    pub fn try_new() -> Result<Self> {
        Self::try_with_capacity(0)
    }

    /// Create an empty `List` with room for at least `capacity` elements
    /// before any reallocation.
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list = List::<u32>::try_with_capacity(16).unwrap();
    /// assert!(list.capacity() >= 16);
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            arena: Arena::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Counts the elements by walking the links from the ghost node back to
    /// itself. Always equal to [`List::len`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut slot = self.front_node();
        while slot != GHOST {
            count += 1;
            slot = self.arena.node(slot).next;
        }
        count
    }

    /// Number of elements the list can hold without reallocating its node
    /// storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.arena.reset();
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.arena.element(self.front_node())
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let front = self.front_node();
        self.arena.element_mut(front)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.arena.element(self.back_node())
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let back = self.back_node();
        self.arena.element_mut(back)
    }

    /// Adds an element first in the list, right after the ghost node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = self.arena.insert(elt);
        let front = self.front_node();
        self.attach_node(GHOST, front, node);
    }

    /// Like [`List::push_front`], but reports [`ListError::Allocation`] and
    /// leaves the list unchanged if the node cannot be allocated.
    pub fn try_push_front(&mut self, elt: T) -> Result<()> {
        let front = self.front_node();
        self.try_insert_between(GHOST, front, elt)
    }

    /// Appends an element to the back of a list, right before the ghost node.
    ///
    /// The last node is reached through the ghost node's `prev` link rather
    /// than by walking the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = self.arena.insert(elt);
        let back = self.back_node();
        self.attach_node(back, GHOST, node);
    }

    /// Like [`List::push_back`], but reports [`ListError::Allocation`] and
    /// leaves the list unchanged if the node cannot be allocated.
    pub fn try_push_back(&mut self, elt: T) -> Result<()> {
        let back = self.back_node();
        self.try_insert_between(back, GHOST, elt)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front_node();
        self.detach_node(front)
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.back_node();
        self.detach_node(back)
    }

    /// Inserts `elt` right after the first element equal to `target`.
    ///
    /// Returns [`ListError::NotFound`] and leaves the list unchanged if no
    /// element equals `target`. When several elements match, the one met
    /// first walking forward from the ghost node is used.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.insert_after_value(&2, 99).unwrap();
    /// assert_eq!(list, List::from_iter([1, 2, 99, 3]));
    ///
    /// assert_eq!(list.insert_after_value(&7, 0), Err(ListError::NotFound));
    /// ```
    pub fn insert_after_value(&mut self, target: &T, elt: T) -> Result<()>
    where
        T: PartialEq,
    {
        let prev = self.find_node(target).ok_or(ListError::NotFound)?;
        let next = self.arena.node(prev).next;
        self.try_insert_between(prev, next, elt)
    }

    /// Inserts `elt` right before the first element equal to `target`.
    ///
    /// Returns [`ListError::NotFound`] and leaves the list unchanged if no
    /// element equals `target`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    /// list.insert_before_value(&2, 99).unwrap();
    /// assert_eq!(list, List::from_iter([1, 99, 2, 3, 2]));
    /// ```
    pub fn insert_before_value(&mut self, target: &T, elt: T) -> Result<()>
    where
        T: PartialEq,
    {
        let next = self.find_node(target).ok_or(ListError::NotFound)?;
        let prev = self.arena.node(next).prev;
        self.try_insert_between(prev, next, elt)
    }

    /// Inserts `elt` so that it occupies the 1-based position `index`,
    /// shifting the element previously there one step back.
    ///
    /// With the `legacy-indexing` feature (default) the accepted range is
    /// `1 <= index < len`: the last position is rejected, and so is every
    /// index of a list with fewer than two elements. Without it the range is
    /// `1 <= index <= len + 1`, where `len + 1` appends.
    ///
    /// Returns [`ListError::IndexOutOfRange`] and leaves the list unchanged
    /// outside the accepted range.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.insert_at_index(2, 7).unwrap();
    /// assert_eq!(list, List::from_iter([1, 7, 2, 3]));
    ///
    /// assert_eq!(
    ///     list.insert_at_index(0, 7),
    ///     Err(ListError::IndexOutOfRange { index: 0, len: 4 })
    /// );
    /// ```
    pub fn insert_at_index(&mut self, index: usize, elt: T) -> Result<()> {
        let next = self
            .insertion_node(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })?;
        let prev = self.arena.node(next).prev;
        self.try_insert_between(prev, next, elt)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns [`ListError::NotFound`] and leaves the list unchanged if no
    /// element matches. Later duplicates are kept.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    /// assert_eq!(list.delete_by_value(&2), Ok(2));
    /// assert_eq!(list, List::from_iter([1, 3, 2]));
    /// assert_eq!(list.delete_by_value(&5), Err(ListError::NotFound));
    /// ```
    pub fn delete_by_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let node = self.find_node(value).ok_or(ListError::NotFound)?;
        self.detach_node(node).ok_or(ListError::NotFound)
    }

    /// Returns the plain 1-based position of the first element equal to
    /// `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([4, 5, 6]);
    /// assert_eq!(list.position(&4), Some(1));
    /// assert_eq!(list.position(&6), Some(3));
    /// assert_eq!(list.position(&7), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|elt| elt == value).map(|i| i + 1)
    }

    /// Returns the index of the first element equal to `value`, or
    /// [`ListError::NotFound`].
    ///
    /// With the `legacy-indexing` feature (default) the count starts at 1
    /// before the first element and is bumped once more on a match, so the
    /// first element is reported at index 2 (`position + 1`). Without the
    /// feature this is the same as [`List::position`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([4, 5, 6]);
    /// #[cfg(feature = "legacy-indexing")]
    /// assert_eq!(list.find_index_by_value(&4), Ok(2));
    /// #[cfg(not(feature = "legacy-indexing"))]
    /// assert_eq!(list.find_index_by_value(&4), Ok(1));
    /// assert_eq!(list.find_index_by_value(&7), Err(ListError::NotFound));
    /// ```
    pub fn find_index_by_value(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        let index = self.position(value).ok_or(ListError::NotFound)?;
        #[cfg(feature = "legacy-indexing")]
        let index = index + 1;
        Ok(index)
    }

    /// Returns the element at the 1-based `index`, or
    /// [`ListError::NotFound`] if `index` is 0 or past the last element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 99, 3]);
    /// assert_eq!(list.find_value_by_index(2), Ok(&99));
    /// assert_eq!(list.find_value_by_index(4), Err(ListError::NotFound));
    /// ```
    pub fn find_value_by_index(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .and_then(|node| self.arena.element(node))
            .ok_or(ListError::NotFound)
    }

    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_node(value).is_some()
    }

    /// Provides a forward iterator. Use `.rev()` to walk backward along the
    /// `prev` links.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    /// assert_eq!(Vec::from_iter(list.iter()), vec![&0, &1, &2]);
    /// assert_eq!(Vec::from_iter(list.iter().rev()), vec![&2, &1, &0]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    /// list.iter_mut().for_each(|x| *x *= 10);
    /// assert_eq!(list, List::from_iter([0, 10, 20]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(arena: &Arena<T>, prev: usize, next: usize) {
    assert_eq!(arena.node(prev).next, next);
    assert_eq!(arena.node(next).prev, prev);
}

#[cfg(test)]
impl<T> List<T> {
    /// Check the whole ring: link symmetry at every node, one cycle through
    /// the ghost node, and `len` matching a recount.
    pub(crate) fn assert_well_formed(&self) {
        let mut count = 0;
        let mut slot = GHOST;
        loop {
            let node = self.arena.node(slot);
            assert_eq!(self.arena.node(node.next).prev, slot);
            assert_eq!(self.arena.node(node.prev).next, slot);
            assert_eq!(node.element.is_some(), slot != GHOST);
            slot = node.next;
            if slot == GHOST {
                break;
            }
            count += 1;
            assert!(count <= self.len, "ring does not close at the ghost node");
        }
        assert_eq!(count, self.len);
        assert_eq!(self.count_nodes(), self.len);
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.assert_well_formed();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.assert_well_formed();
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_delete_drops_once() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for i in 1..=4 {
            list.push_back(DropChecker::new(i, &dropped));
        }
        let removed = list.pop_front();
        assert!(dropped.borrow().is_empty());
        drop(removed);
        assert_eq!(dropped.borrow().as_slice(), &[1]);

        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3, 4]);
        drop(list);
        assert_eq!(dropped.borrow().len(), 4);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_well_formed();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.assert_well_formed();
    }

    #[test]
    fn list_try_push() {
        let mut list = List::try_new().unwrap();
        list.try_push_back(2).unwrap();
        list.try_push_front(1).unwrap();
        list.try_push_back(3).unwrap();
        list_eq(&list, [1, 2, 3]);
    }

    #[test]
    fn list_insert_after_value() {
        let mut list = List::from_iter([1, 2, 3]);
        list.insert_after_value(&2, 99).unwrap();
        list_eq(&list, [1, 2, 99, 3]);

        list.insert_after_value(&3, 4).unwrap();
        assert_eq!(list.back(), Some(&4));
        list_eq(&list, [1, 2, 99, 3, 4]);

        // first match wins
        let mut list = List::from_iter([5, 6, 5]);
        list.insert_after_value(&5, 0).unwrap();
        list_eq(&list, [5, 0, 6, 5]);

        assert_eq!(list.insert_after_value(&8, 1), Err(ListError::NotFound));
        list_eq(&list, [5, 0, 6, 5]);

        let mut empty = List::new();
        assert_eq!(empty.insert_after_value(&1, 1), Err(ListError::NotFound));
        list_eq(&empty, None);
    }

    #[test]
    fn list_insert_before_value() {
        let mut list = List::from_iter([1, 2, 3]);
        list.insert_before_value(&1, 0).unwrap();
        assert_eq!(list.front(), Some(&0));
        list.insert_before_value(&3, 9).unwrap();
        list_eq(&list, [0, 1, 2, 9, 3]);

        assert_eq!(list.insert_before_value(&4, 4), Err(ListError::NotFound));
        list_eq(&list, [0, 1, 2, 9, 3]);
    }

    #[cfg(feature = "legacy-indexing")]
    #[test]
    fn list_insert_at_index() {
        let mut list = List::from_iter(1..=4);
        list.insert_at_index(1, 10).unwrap();
        list_eq(&list, [10, 1, 2, 3, 4]);
        list.insert_at_index(3, 20).unwrap();
        list_eq(&list, [10, 1, 20, 2, 3, 4]);

        // the last position is rejected
        assert_eq!(
            list.insert_at_index(6, 30),
            Err(ListError::IndexOutOfRange { index: 6, len: 6 })
        );
        list.insert_at_index(5, 30).unwrap();
        list_eq(&list, [10, 1, 20, 2, 30, 3, 4]);

        assert_eq!(
            list.insert_at_index(0, 0),
            Err(ListError::IndexOutOfRange { index: 0, len: 7 })
        );

        let mut single = List::from_iter([1]);
        assert_eq!(
            single.insert_at_index(1, 0),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
        let mut empty = List::new();
        assert_eq!(
            empty.insert_at_index(1, 0),
            Err(ListError::IndexOutOfRange { index: 1, len: 0 })
        );
        list_eq(&single, [1]);
        list_eq(&empty, None);
    }

    #[cfg(not(feature = "legacy-indexing"))]
    #[test]
    fn list_insert_at_index() {
        let mut list = List::new();
        list.insert_at_index(1, 2).unwrap();
        list.insert_at_index(1, 1).unwrap();
        list.insert_at_index(3, 4).unwrap();
        list.insert_at_index(3, 3).unwrap();
        list_eq(&list, [1, 2, 3, 4]);

        assert_eq!(
            list.insert_at_index(6, 0),
            Err(ListError::IndexOutOfRange { index: 6, len: 4 })
        );
        assert_eq!(
            list.insert_at_index(0, 0),
            Err(ListError::IndexOutOfRange { index: 0, len: 4 })
        );
        list_eq(&list, [1, 2, 3, 4]);
    }

    #[test]
    fn list_delete_by_value() {
        let mut list = List::from_iter([1, 2, 3, 2]);
        assert_eq!(list.delete_by_value(&2), Ok(2));
        list_eq(&list, [1, 3, 2]);
        assert_eq!(list.delete_by_value(&1), Ok(1));
        assert_eq!(list.delete_by_value(&2), Ok(2));
        list_eq(&list, [3]);
        assert_eq!(list.delete_by_value(&2), Err(ListError::NotFound));
        assert_eq!(list.delete_by_value(&3), Ok(3));
        list_eq(&list, None);
        assert_eq!(list.delete_by_value(&3), Err(ListError::NotFound));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_insert_then_delete_restores() {
        let original = [3, 1, 4, 1, 5];
        let mut list = List::from_iter(original);
        list.insert_after_value(&4, 42).unwrap();
        assert_eq!(list.delete_by_value(&42), Ok(42));
        list_eq(&list, original);

        list.push_front(42);
        assert_eq!(list.delete_by_value(&42), Ok(42));
        list_eq(&list, original);
    }

    #[test]
    fn list_find_index_by_value() {
        let list = List::from_iter([7, 8, 9, 8]);
        #[cfg(feature = "legacy-indexing")]
        {
            assert_eq!(list.find_index_by_value(&7), Ok(2));
            assert_eq!(list.find_index_by_value(&8), Ok(3));
            assert_eq!(list.find_index_by_value(&9), Ok(4));
        }
        #[cfg(not(feature = "legacy-indexing"))]
        {
            assert_eq!(list.find_index_by_value(&7), Ok(1));
            assert_eq!(list.find_index_by_value(&8), Ok(2));
            assert_eq!(list.find_index_by_value(&9), Ok(3));
        }
        assert_eq!(list.position(&8), Some(2));
        assert_eq!(list.find_index_by_value(&1), Err(ListError::NotFound));

        let empty = List::<i32>::new();
        assert_eq!(empty.find_index_by_value(&1), Err(ListError::NotFound));
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn list_find_value_by_index() {
        let list = List::from_iter(10..20);
        for index in 1..=10 {
            assert_eq!(list.find_value_by_index(index), Ok(&(index + 9)));
        }
        assert_eq!(list.find_value_by_index(0), Err(ListError::NotFound));
        assert_eq!(list.find_value_by_index(11), Err(ListError::NotFound));

        let empty = List::<usize>::new();
        assert_eq!(empty.find_value_by_index(1), Err(ListError::NotFound));
    }

    #[test]
    fn list_scenario() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        list_eq(&list, [1, 2, 3]);
        assert_eq!(list.len(), 3);

        list.insert_after_value(&2, 99).unwrap();
        list_eq(&list, [1, 2, 99, 3]);

        list.delete_by_value(&2).unwrap();
        list_eq(&list, [1, 99, 3]);
        assert_eq!(list.len(), 3);

        assert_eq!(list.find_value_by_index(2), Ok(&99));
    }

    #[test]
    fn list_len_matches_recount() {
        let mut list = List::new();
        for i in 0..50 {
            match i % 5 {
                0 | 1 => list.push_back(i),
                2 => list.push_front(i),
                3 => {
                    let _ = list.insert_after_value(&(i - 2), i);
                }
                _ => {
                    let _ = list.delete_by_value(&(i - 3));
                }
            }
            list.assert_well_formed();
            assert_eq!(list.len(), list.count_nodes());
        }
        while list.pop_back().is_some() {
            list.assert_well_formed();
        }
    }

    #[test]
    fn list_reuses_slots() {
        let mut list = List::try_with_capacity(4).unwrap();
        let capacity = list.capacity();
        for round in 0..10 {
            list.extend([round, round + 1, round + 2, round + 3]);
            list_eq(&list, round..round + 4);
            while list.pop_front().is_some() {}
        }
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(["a", "b"]);
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));
    }
}
