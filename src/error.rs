use core::error::Error;
use core::fmt;

/// Error returned by the positional operations on a
/// [`LinkedList`](crate::LinkedList).
///
/// Positions are `usize`, so the only way to miss the valid range is to
/// point past its upper end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The requested position lies past the end of the list.
    ///
    /// For insertion the valid range is `0..=len` (inserting at `len`
    /// appends); for removal it is `0..len`.
    IndexTooBig,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexTooBig => f.write_str("index is past the end of the list"),
        }
    }
}

impl Error for ListError {}
