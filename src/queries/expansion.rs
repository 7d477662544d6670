//! Reference expansion paths for the platform's `expand` parameter.

use std::fmt;

/// A reference expansion path.
///
/// Expansion instructs the platform to inline the referenced resource under
/// the reference's `obj` field. Paths use dot notation and `[*]` for array
/// elements.
///
/// # Example
///
/// ```rust
/// use commercetools_api::queries::ExpansionPath;
///
/// let path = ExpansionPath::new("productType");
/// assert_eq!(path.to_string(), "productType");
///
/// let nested = ExpansionPath::new("lineItems[*]").nested("variant");
/// assert_eq!(nested.to_string(), "lineItems[*].variant");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionPath(String);

impl ExpansionPath {
    /// Creates an expansion path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Appends a nested segment with a dot separator.
    #[must_use]
    pub fn nested(self, segment: &str) -> Self {
        Self(format!("{}.{segment}", self.0))
    }
}

impl fmt::Display for ExpansionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpansionPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
