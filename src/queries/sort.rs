//! Sort expressions for the platform's `sort` parameter.

use std::fmt;

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// A single sort expression, rendered as `path asc` or `path desc`.
///
/// # Example
///
/// ```rust
/// use commercetools_api::queries::QuerySort;
///
/// assert_eq!(QuerySort::asc("createdAt").to_string(), "createdAt asc");
/// assert_eq!(QuerySort::desc("name.en").to_string(), "name.en desc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuerySort {
    path: String,
    direction: SortDirection,
}

impl QuerySort {
    /// Creates a sort expression for the given dotted path.
    #[must_use]
    pub fn new(path: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            path: path.into(),
            direction,
        }
    }

    /// Ascending sort on the given dotted path.
    #[must_use]
    pub fn asc(path: impl Into<String>) -> Self {
        Self::new(path, SortDirection::Asc)
    }

    /// Descending sort on the given dotted path.
    #[must_use]
    pub fn desc(path: impl Into<String>) -> Self {
        Self::new(path, SortDirection::Desc)
    }
}

impl fmt::Display for QuerySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.direction)
    }
}
