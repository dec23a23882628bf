use thiserror::Error;

/// Errors reported by list operations.
///
/// A failing operation never leaves the list partially modified: either
/// every link update of the operation happened, or none of them did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle was never initialized, or it has been destroyed.
    #[error("list is not initialized")]
    Uninitialized,

    /// Storage for a new node could not be obtained.
    #[error("failed to allocate a list node")]
    Allocation,

    /// No element matches the requested value or position.
    #[error("no matching element in the list")]
    NotFound,

    /// The index lies outside the range accepted for insertion.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation has no meaning on an empty list.
    #[error("list is empty")]
    EmptyList,
}

pub type Result<T> = core::result::Result<T, ListError>;
