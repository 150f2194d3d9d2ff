//! Tag labels attached to a task.

use super::TaskDomainError;
use std::fmt;

/// Insertion-ordered set of non-empty, trimmed tag labels.
///
/// Matching ignores order. Iteration yields labels in the order they were
/// first inserted, which keeps display deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a tag set from labels, rejecting any blank label.
    ///
    /// Duplicate labels collapse onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTag`] when a label is blank.
    pub fn try_from_labels<I, S>(labels: I) -> Result<Self, TaskDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Self::new();
        for label in labels {
            tags.insert(label.as_ref())?;
        }
        Ok(tags)
    }

    /// Builds a tag set from labels, silently dropping blank labels.
    pub fn from_labels_lossy<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Self::new();
        for label in labels {
            let normalized = label.as_ref().trim();
            if !normalized.is_empty() {
                tags.push_unique(normalized);
            }
        }
        tags
    }

    /// Inserts a label, returning `true` when it was not already present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTag`] when the label is blank.
    pub fn insert(&mut self, label: &str) -> Result<bool, TaskDomainError> {
        let normalized = label.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTag);
        }
        Ok(self.push_unique(normalized))
    }

    fn push_unique(&mut self, normalized: &str) -> bool {
        if self.contains(normalized) {
            return false;
        }
        self.0.push(normalized.to_owned());
        true
    }

    /// Returns `true` when the label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|tag| tag == label)
    }

    /// Returns `true` when every label in `required` is present.
    #[must_use]
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|label| self.contains(label.as_ref()))
    }

    /// Iterates labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the labels in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of labels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no labels are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
