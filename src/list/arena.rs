//! Slot storage for list nodes.
//!
//! Nodes live in a `Vec` and link to each other by slot index, so a link can
//! never dangle. Released slots are chained into a free list through their
//! `next` field and reused by later insertions.

use crate::error::{ListError, Result};
use std::ptr::NonNull;

/// Slot of the ghost (sentinel) node. It is created with the arena and is
/// never released.
pub(crate) const GHOST: usize = 0;

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    /// `None` for the ghost node and for free slots.
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    fn detached(slot: usize, element: Option<T>) -> Self {
        Self {
            next: slot,
            prev: slot,
            element,
        }
    }
}

pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    /// Head of the free chain. The chain is terminated by `GHOST`, which is
    /// never free.
    free: Option<usize>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::detached(GHOST, None)],
            free: None,
        }
    }

    /// Create an arena with room for `capacity` elements besides the ghost
    /// node, reporting allocation failure instead of aborting.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self> {
        let additional = capacity.checked_add(1).ok_or(ListError::Allocation)?;
        let mut nodes = Vec::new();
        nodes
            .try_reserve(additional)
            .map_err(|_| ListError::Allocation)?;
        nodes.push(Node::detached(GHOST, None));
        Ok(Self { nodes, free: None })
    }

    /// Number of elements the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    #[inline]
    pub(crate) fn node(&self, slot: usize) -> &Node<T> {
        &self.nodes[slot]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        &mut self.nodes[slot]
    }

    #[inline]
    pub(crate) fn element(&self, slot: usize) -> Option<&T> {
        self.nodes[slot].element.as_ref()
    }

    #[inline]
    pub(crate) fn element_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.nodes[slot].element.as_mut()
    }

    /// Pointer to the first slot, used by iterators that hand out mutable
    /// references to distinct elements.
    pub(crate) fn as_non_null(&mut self) -> NonNull<Node<T>> {
        NonNull::from(self.nodes.as_mut_slice()).cast()
    }

    /// Store `element` in a detached node and return its slot.
    ///
    /// Aborts on allocation failure like `Vec::push`.
    pub(crate) fn insert(&mut self, element: T) -> usize {
        match self.free {
            Some(slot) => {
                let node = &mut self.nodes[slot];
                self.free = if node.next == GHOST {
                    None
                } else {
                    Some(node.next)
                };
                *node = Node::detached(slot, Some(element));
                slot
            }
            None => {
                let slot = self.nodes.len();
                self.nodes.push(Node::detached(slot, Some(element)));
                slot
            }
        }
    }

    /// Like [`Arena::insert`], but reports allocation failure. The arena is
    /// untouched when it fails.
    pub(crate) fn try_insert(&mut self, element: T) -> Result<usize> {
        if self.free.is_none() {
            self.nodes
                .try_reserve(1)
                .map_err(|_| ListError::Allocation)?;
        }
        Ok(self.insert(element))
    }

    /// Move the node at `slot` to the free chain and return its element.
    ///
    /// The node must already be unlinked from the list.
    pub(crate) fn release(&mut self, slot: usize) -> Option<T> {
        debug_assert_ne!(slot, GHOST, "the ghost node is never released");
        let next_free = self.free.unwrap_or(GHOST);
        let node = &mut self.nodes[slot];
        let element = node.element.take();
        node.prev = slot;
        node.next = next_free;
        self.free = Some(slot);
        element
    }

    /// Drop every slot except the ghost node and reset its links. Elements
    /// still stored are dropped in slot order.
    pub(crate) fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[GHOST] = Node::detached(GHOST, None);
        self.free = None;
    }
}
