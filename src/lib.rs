//! This crate provides a circular doubly-linked list anchored by a ghost
//! (sentinel) node, with nodes stored in an arena.
//!
//! The [`List`] supports the classic linked-list operations: inserting at the
//! head, at the tail, next to a given value or at a given position, deleting
//! by value, and searching by value or by position. Walking the list is
//! possible in both directions.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//! assert_eq!(list.to_string(), "1\t2\t3\n");
//!
//! list.insert_after_value(&2, 99).unwrap();
//! assert_eq!(list.to_string(), "1\t2\t99\t3\n");
//!
//! list.delete_by_value(&2).unwrap();
//! assert_eq!(list.to_string(), "1\t99\t3\n");
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.find_value_by_index(2), Ok(&99));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   ↓   slot 0 (Ghost)          slot a                     slot z     │
//!  ┌───────────┐           ╔═══════════╗              ╔═══════════╗   │
//!  │   next    │ ────────→ ║   next    ║ ──→ ┄┄ ────→ ║   next    ║ ──┘
//!  ├───────────┤           ╟───────────╢              ╟───────────╢
//!  │   prev    │ ─┐     ┌─ ║   prev    ║ ←── ┄┄ ←──── ║   prev    ║
//!  ├───────────┤  │     │  ╟───────────╢              ╟───────────╢
//!  ┊No payload ┊  │     │  ║ payload T ║              ║ payload T ║
//!  └╌╌╌╌╌╌╌╌╌╌╌┘  │     │  ╚═══════════╝              ╚═══════════╝
//!        ↑        │     │                                   ↑
//!        └────────┼─────┘                                   │
//!                 └─────────────────────────────────────────┘
//! ```
//! The `List` contains:
//! - an arena (a `Vec` of slots), where slot 0 is always the ghost node;
//! - a length field `len` caching the number of elements.
//!
//! Each element node lives in its own arena slot, which contains:
//! - the `next` slot index of the next element (or the ghost node if it is
//!   the last element in the list);
//! - the `prev` slot index of the previous element (or the ghost node if it
//!   is the first element in the list);
//! - the actual payload `T`. The ghost node has no payload.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and
//! `prev` links point to itself. As elements are inserted into the list,
//! `ghost.next` points to the first element, and `ghost.prev` points to the
//! last element of the list.
//!
//! Slots freed by deletions are chained into a free list and reused by later
//! insertions, so slot indices never dangle and storage is not returned to the
//! allocator until the list is cleared or dropped.
//!
//! Positions are 1-based: the first element is at index 1, and the ghost node
//! is never addressable. See [`List`] for the `legacy-indexing` feature,
//! which controls the numbering of [`List::find_index_by_value`] and the range
//! accepted by [`List::insert_at_index`].
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic): forward iteration follows the `next` links from the ghost
//! node, `.rev()` follows the `prev` links.
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list.iter().rev()), vec![&6, &4, &2]);
//! ```
//!
//! # Handles
//!
//! [`Handle`] wraps a list together with its initialization state. It starts
//! uninitialized, and every operation fails with
//! [`ListError::Uninitialized`] until [`Handle::initialize`] is called, and
//! again after [`Handle::destroy`].
//!
//! ```
//! use circular_list::{Handle, ListError};
//!
//! let mut handle = Handle::new();
//! handle.initialize().unwrap();
//! handle.insert_at_tail(1).unwrap();
//! handle.insert_at_head(0).unwrap();
//! assert_eq!(handle.render_reverse().unwrap(), "1\t0\n");
//!
//! handle.destroy().unwrap();
//! assert_eq!(handle.delete_by_value(&1), Err(ListError::Uninitialized));
//! ```
//!
//! # Concurrency
//!
//! Lists are plain single-owner data. To share one between threads, put the
//! whole list (or handle) behind a single `Mutex`.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Handle`]: crate::Handle

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use handle::Handle;
#[doc(inline)]
pub use list::display::DisplayRev;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod handle;
pub mod list;
