//! A list handle with an explicit initialization state.
//!
//! A [`Handle`] starts out uninitialized. Every operation checks the state
//! first and fails with [`ListError::Uninitialized`] until
//! [`Handle::initialize`] has been called, and again after
//! [`Handle::destroy`].
//!
//! Failed operations are reported through `log::warn!`; successful mutations
//! are traced with `log::trace!`. The library installs no logger.

use crate::error::{ListError, Result};
use crate::list::List;
use crate::Iter;
use std::fmt::Display;
use std::iter::Rev;

enum State<T> {
    Uninitialized,
    Initialized(List<T>),
}

/// An owning handle to a [`List`] that may be uninitialized.
///
/// # Examples
///
/// ```
/// use circular_list::{Handle, ListError};
///
/// let mut handle = Handle::new();
/// assert_eq!(handle.insert_at_tail(1), Err(ListError::Uninitialized));
///
/// handle.initialize().unwrap();
/// handle.insert_at_tail(1).unwrap();
/// handle.insert_at_tail(2).unwrap();
/// handle.insert_at_head(0).unwrap();
/// assert_eq!(handle.render().unwrap(), "0\t1\t2\n");
/// assert_eq!(handle.length(), Ok(3));
///
/// handle.destroy().unwrap();
/// assert_eq!(handle.length(), Err(ListError::Uninitialized));
/// ```
pub struct Handle<T> {
    state: State<T>,
}

/// Log the outcome of `op` and pass it through.
fn logged<R>(op: &'static str, result: Result<R>) -> Result<R> {
    match &result {
        Ok(_) => log::trace!("{}: ok", op),
        Err(err) => log::warn!("{}: {}", op, err),
    }
    result
}

impl<T> Handle<T> {
    /// Create an uninitialized handle.
    pub const fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Returns `true` between [`Handle::initialize`] and [`Handle::destroy`].
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Initialized(_))
    }

    fn list(&self) -> Result<&List<T>> {
        match &self.state {
            State::Initialized(list) => Ok(list),
            State::Uninitialized => Err(ListError::Uninitialized),
        }
    }

    fn list_mut(&mut self) -> Result<&mut List<T>> {
        match &mut self.state {
            State::Initialized(list) => Ok(list),
            State::Uninitialized => Err(ListError::Uninitialized),
        }
    }

    /// Create the ghost node of a fresh, empty list.
    ///
    /// Initializing a handle that already holds a list discards that list
    /// (releasing its elements front to back) and starts over.
    pub fn initialize(&mut self) -> Result<()> {
        self.initialize_with_capacity(0)
    }

    /// Like [`Handle::initialize`], reserving room for `capacity` elements.
    pub fn initialize_with_capacity(&mut self, capacity: usize) -> Result<()> {
        let list = logged("initialize", List::try_with_capacity(capacity))?;
        if let State::Initialized(old) = &self.state {
            log::warn!(
                "initialize: discarding an existing list of {} elements",
                old.len()
            );
        }
        self.state = State::Initialized(list);
        log::debug!("list initialized");
        Ok(())
    }

    /// Release every element front to back, then the ghost node. The handle
    /// is uninitialized afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{Handle, ListError};
    ///
    /// let mut handle = Handle::new();
    /// assert_eq!(handle.destroy(), Err(ListError::Uninitialized));
    /// handle.initialize().unwrap();
    /// handle.insert_at_head("a").unwrap();
    /// assert_eq!(handle.destroy(), Ok(()));
    /// assert!(!handle.is_initialized());
    /// ```
    pub fn destroy(&mut self) -> Result<()> {
        let mut list = match std::mem::replace(&mut self.state, State::Uninitialized) {
            State::Initialized(list) => list,
            State::Uninitialized => return logged("destroy", Err(ListError::Uninitialized)),
        };
        let len = list.len();
        list.clear();
        drop(list);
        log::debug!("list destroyed, {} elements released", len);
        Ok(())
    }

    /// Insert `value` as the first element.
    pub fn insert_at_head(&mut self, value: T) -> Result<()> {
        let result = self
            .list_mut()
            .and_then(|list| list.try_push_front(value));
        logged("insert_at_head", result)
    }

    /// Insert `value` as the last element.
    pub fn insert_at_tail(&mut self, value: T) -> Result<()> {
        let result = self
            .list_mut()
            .and_then(|list| list.try_push_back(value));
        logged("insert_at_tail", result)
    }

    /// See [`List::insert_after_value`].
    pub fn insert_after_value(&mut self, target: &T, value: T) -> Result<()>
    where
        T: PartialEq,
    {
        let result = self
            .list_mut()
            .and_then(|list| list.insert_after_value(target, value));
        logged("insert_after_value", result)
    }

    /// See [`List::insert_before_value`].
    pub fn insert_before_value(&mut self, target: &T, value: T) -> Result<()>
    where
        T: PartialEq,
    {
        let result = self
            .list_mut()
            .and_then(|list| list.insert_before_value(target, value));
        logged("insert_before_value", result)
    }

    /// See [`List::insert_at_index`].
    pub fn insert_at_index(&mut self, index: usize, value: T) -> Result<()> {
        let result = self
            .list_mut()
            .and_then(|list| list.insert_at_index(index, value));
        logged("insert_at_index", result)
    }

    /// See [`List::delete_by_value`].
    pub fn delete_by_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let result = self
            .list_mut()
            .and_then(|list| list.delete_by_value(value));
        logged("delete_by_value", result)
    }

    /// See [`List::find_index_by_value`].
    pub fn find_index_by_value(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        let result = self
            .list()
            .and_then(|list| list.find_index_by_value(value));
        logged("find_index_by_value", result)
    }

    /// See [`List::find_value_by_index`].
    pub fn find_value_by_index(&self, index: usize) -> Result<&T> {
        let result = self
            .list()
            .and_then(|list| list.find_value_by_index(index));
        logged("find_value_by_index", result)
    }

    /// The elements front to back.
    pub fn print(&self) -> Result<Iter<'_, T>> {
        logged("print", self.list().map(List::iter))
    }

    /// The elements back to front.
    pub fn print_reverse(&self) -> Result<Rev<Iter<'_, T>>> {
        logged("print_reverse", self.list().map(|list| list.iter().rev()))
    }

    /// The cached number of elements.
    pub fn length(&self) -> Result<usize> {
        logged("length", self.list().map(List::len))
    }

    /// The first element, or [`ListError::EmptyList`].
    pub fn front(&self) -> Result<&T> {
        let result = self
            .list()
            .and_then(|list| list.front().ok_or(ListError::EmptyList));
        logged("front", result)
    }

    /// The last element, or [`ListError::EmptyList`].
    pub fn back(&self) -> Result<&T> {
        let result = self
            .list()
            .and_then(|list| list.back().ok_or(ListError::EmptyList));
        logged("back", result)
    }

    /// Remove and return the first element, or fail with
    /// [`ListError::EmptyList`].
    pub fn remove_front(&mut self) -> Result<T> {
        let result = self
            .list_mut()
            .and_then(|list| list.pop_front().ok_or(ListError::EmptyList));
        logged("remove_front", result)
    }

    /// Remove and return the last element, or fail with
    /// [`ListError::EmptyList`].
    pub fn remove_back(&mut self) -> Result<T> {
        let result = self
            .list_mut()
            .and_then(|list| list.pop_back().ok_or(ListError::EmptyList));
        logged("remove_back", result)
    }

    /// Render the elements front to back, tab separated and newline
    /// terminated, or `list is empty`.
    pub fn render(&self) -> Result<String>
    where
        T: Display,
    {
        logged("render", self.list().map(|list| list.to_string()))
    }

    /// Like [`Handle::render`], back to front.
    pub fn render_reverse(&self) -> Result<String>
    where
        T: Display,
    {
        let result = self
            .list()
            .map(|list| list.display_rev().to_string());
        logged("render_reverse", result)
    }

    /// Borrow the underlying list.
    pub fn as_list(&self) -> Result<&List<T>> {
        self.list()
    }

    /// Mutably borrow the underlying list.
    pub fn as_list_mut(&mut self) -> Result<&mut List<T>> {
        self.list_mut()
    }

    /// Consume the handle and return its list.
    pub fn into_list(self) -> Result<List<T>> {
        match self.state {
            State::Initialized(list) => Ok(list),
            State::Uninitialized => Err(ListError::Uninitialized),
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for Handle<T> {
    fn from(list: List<T>) -> Self {
        Self {
            state: State::Initialized(list),
        }
    }
}
