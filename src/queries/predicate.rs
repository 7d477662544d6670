//! Query predicates for the platform's `where` parameter.
//!
//! Predicates are rendered eagerly into the platform's predicate language,
//! e.g. `masterData(current(name(en = "shirt")))`. They are normally built
//! through the typed query models in [`crate::queries::model`] rather than
//! by hand.

use std::fmt;

/// A rendered query predicate.
///
/// Predicates combine with [`and`](Self::and), [`or`](Self::or) and
/// [`not`](Self::not). Combinators do not add parentheses on their own;
/// wrap a combined predicate in [`group`](Self::group) before nesting it
/// into another combination when precedence matters.
///
/// # Example
///
/// ```rust
/// use commercetools_api::queries::QueryPredicate;
///
/// let a = QueryPredicate::raw(r#"country = "DE""#);
/// let b = QueryPredicate::raw("version > 3");
///
/// assert_eq!(a.and(b).to_string(), r#"country = "DE" and version > 3"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryPredicate(String);

impl QueryPredicate {
    /// Creates a predicate from an already-rendered expression.
    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// Builds a comparison predicate from a path and a rendered value.
    ///
    /// The last path segment carries the comparison and every preceding
    /// segment wraps it in parentheses: `["masterData", "current", "name"]`
    /// with `= "x"` renders as `masterData(current(name = "x"))`.
    #[must_use]
    pub(crate) fn from_path(segments: &[String], expression: &str) -> Self {
        debug_assert!(!segments.is_empty());
        let last = segments.len() - 1;
        let mut rendered = format!("{} {expression}", segments[last]);
        for segment in segments[..last].iter().rev() {
            rendered = format!("{segment}({rendered})");
        }
        Self(rendered)
    }

    /// Combines two predicates with `and`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self(format!("{} and {}", self.0, other.0))
    }

    /// Combines two predicates with `or`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self(format!("{} or {}", self.0, other.0))
    }

    /// Negates this predicate.
    #[must_use]
    pub fn not(self) -> Self {
        Self(format!("not({})", self.0))
    }

    /// Wraps this predicate in parentheses.
    #[must_use]
    pub fn group(self) -> Self {
        Self(format!("({})", self.0))
    }
}

impl fmt::Display for QueryPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes and quotes a string literal for the predicate language.
#[must_use]
pub(crate) fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_segment_renders_flat() {
        let predicate = QueryPredicate::from_path(&segments(&["id"]), r#"= "abc""#);
        assert_eq!(predicate.to_string(), r#"id = "abc""#);
    }

    #[test]
    fn test_nested_segments_wrap_in_parens() {
        let predicate = QueryPredicate::from_path(
            &segments(&["masterData", "current", "name", "en"]),
            r#"= "shirt""#,
        );
        assert_eq!(
            predicate.to_string(),
            r#"masterData(current(name(en = "shirt")))"#
        );
    }

    #[test]
    fn test_and_or_combinators() {
        let a = QueryPredicate::raw("version > 1");
        let b = QueryPredicate::raw(r#"key = "k""#);
        let c = QueryPredicate::raw("version < 10");

        assert_eq!(
            a.clone().and(b.clone()).to_string(),
            r#"version > 1 and key = "k""#
        );
        assert_eq!(
            a.or(b).group().and(c).to_string(),
            r#"(version > 1 or key = "k") and version < 10"#
        );
    }

    #[test]
    fn test_not_wraps_in_parens() {
        let predicate = QueryPredicate::raw(r#"country = "DE""#).not();
        assert_eq!(predicate.to_string(), r#"not(country = "DE")"#);
    }

    #[test]
    fn test_quote_escapes_special_characters() {
        assert_eq!(quote("plain"), r#""plain""#);
        assert_eq!(quote(r#"has "quotes""#), r#""has \"quotes\"""#);
        assert_eq!(quote(r"back\slash"), r#""back\\slash""#);
    }
}
