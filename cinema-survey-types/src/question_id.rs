use std::borrow::Borrow;
use std::fmt;

/// A stable identifier for a question or a synthetic answer key, e.g. `"movie-type"`.
///
/// Used as keys in `Answers`. Identifiers are kebab-case tokens; the persisted
/// record uses the snake_case form returned by [`QuestionId::record_field`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// The snake_case field name used for this identifier in a stored record.
    pub fn record_field(&self) -> String {
        self.id.replace('-', "_")
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}
