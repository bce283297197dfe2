//! Append-only feedback history

use super::feedback::Feedback;

/// Ordered record of every confirmed guess in a game
///
/// Appending returns a new history and leaves the original untouched, so a
/// caller can keep earlier values around for undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Feedback>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return a new history with `feedback` appended
    #[must_use]
    pub fn with(&self, feedback: Feedback) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(feedback);
        Self { entries }
    }

    /// Entries in the order they were confirmed
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Feedback] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Feedback> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feedback> {
        self.entries.iter()
    }
}

impl From<Vec<Feedback>> for History {
    fn from(entries: Vec<Feedback>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Feedback> for History {
    fn from_iter<I: IntoIterator<Item = Feedback>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Feedback;
    type IntoIter = std::slice::Iter<'a, Feedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
