use std::collections::HashMap;

use crate::QuestionId;

/// Answers collected during a survey session.
///
/// Maps a question id (or a synthetic key such as a free-text "other" entry)
/// to the value the user picked or typed. A key is only present once the
/// user has provided a value; entries are never removed one by one, only
/// cleared together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<QuestionId, String>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the answer for the given key, replacing any previous value.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for the given key.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Get the answer for the given key, or `""` when unanswered.
    pub fn get_or_empty(&self, id: &str) -> &str {
        self.get(id).unwrap_or_default()
    }

    /// Check if an answer exists for the given key.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Discard every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<QuestionId>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, String);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
