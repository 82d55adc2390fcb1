//! Stopword sets
//!
//! Stopword lists are sourced by the caller; this module only stores them
//! case-folded for lookup during term vector construction.

use rustc_hash::FxHashSet;

/// A set of lowercase stopwords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Create an empty stopword set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword set from a list of words
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the set
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the set
    pub fn remove_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if an already-lowercased term is a stopword
    pub fn contains_lowercase(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}
