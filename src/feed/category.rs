//! The fixed, ordered set of labels a post can be filtered by.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::FeedError;

/// Labels observed on the board, in checkbox order.
///
/// Only 15 of the 16 MBTI types are present (ENTJ is missing). The set is
/// injectable through configuration, so the list is kept as observed.
pub const MBTI_LABELS: [&str; 15] = [
    "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP", "ENFP",
    "ENTP", "ESTJ", "ESFJ", "ENFJ",
];

/// A label that has been checked against a [`CategorySet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable set of valid categories.
///
/// Cloning shares the underlying labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    labels: Arc<[Category]>,
}

impl CategorySet {
    /// Build a set from labels in display order.
    ///
    /// # Errors
    /// Returns [`FeedError::EmptyCategorySet`] for an empty list and
    /// [`FeedError::DuplicateCategory`] when a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, FeedError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for label in labels {
            let label = label.into();
            if !seen.insert(label.clone()) {
                return Err(FeedError::DuplicateCategory { label });
            }
            ordered.push(Category(label));
        }

        if ordered.is_empty() {
            return Err(FeedError::EmptyCategorySet);
        }

        Ok(Self {
            labels: ordered.into(),
        })
    }

    /// The observed board configuration.
    pub fn mbti() -> Self {
        Self {
            labels: MBTI_LABELS
                .iter()
                .map(|label| Category((*label).to_string()))
                .collect(),
        }
    }

    /// Number of labels. "All selected" means a selection of this size.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn get(&self, label: &str) -> Option<&Category> {
        self.labels.iter().find(|c| c.as_str() == label)
    }

    /// Look up `label`, failing with [`FeedError::InvalidCategory`].
    pub fn resolve(&self, label: &str) -> Result<Category, FeedError> {
        self.get(label)
            .cloned()
            .ok_or_else(|| FeedError::InvalidCategory {
                label: label.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.labels.iter()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::mbti()
    }
}
