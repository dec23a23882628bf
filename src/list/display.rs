//! Diagnostic rendering of a list.
//!
//! Elements are written with their `Display` form, separated by a single tab,
//! and the line is closed with a newline. An empty list renders as
//! `list is empty` instead of a blank line.

use crate::list::List;
use std::fmt::{self, Display, Formatter};

const EMPTY: &str = "list is empty";

fn render<'a, T, I>(f: &mut Formatter<'_>, mut elements: I) -> fmt::Result
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
{
    match elements.next() {
        None => writeln!(f, "{}", EMPTY),
        Some(first) => {
            write!(f, "{}", first)?;
            for element in elements {
                write!(f, "\t{}", element)?;
            }
            writeln!(f)
        }
    }
}

/// Renders the list front to back.
///
/// # Examples
///
/// ```
/// use circular_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "1\t2\t3\n");
/// assert_eq!(List::<i32>::new().to_string(), "list is empty\n");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, self.iter())
    }
}

/// Renders a list back to front, following the `prev` links.
///
/// This `struct` is created by [`List::display_rev`].
pub struct DisplayRev<'a, T> {
    list: &'a List<T>,
}

impl<T: Display> Display for DisplayRev<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, self.list.iter().rev())
    }
}

impl<T> List<T> {
    /// Returns a value whose `Display` form lists the elements back to
    /// front, in the same format as the list's own `Display`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.display_rev().to_string(), "3\t2\t1\n");
    /// ```
    pub fn display_rev(&self) -> DisplayRev<'_, T> {
        DisplayRev { list: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn display_single() {
        let list = List::from_iter(["x"]);
        assert_eq!(list.to_string(), "x\n");
        assert_eq!(list.display_rev().to_string(), "x\n");
    }

    #[test]
    fn display_empty() {
        let mut list = List::from_iter([1]);
        list.pop_back();
        assert_eq!(list.to_string(), "list is empty\n");
        assert_eq!(list.display_rev().to_string(), "list is empty\n");
    }

    #[test]
    fn display_after_edits() {
        let mut list = List::from_iter([1, 2, 3]);
        list.insert_after_value(&2, 99).unwrap();
        assert_eq!(format!("{}", list), "1\t2\t99\t3\n");
        list.delete_by_value(&2).unwrap();
        assert_eq!(format!("{}", list), "1\t99\t3\n");
        assert_eq!(format!("{}", list.display_rev()), "3\t99\t1\n");
    }
}
