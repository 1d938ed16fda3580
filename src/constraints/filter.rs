//! Lazy, restartable filtering of word sequences

use super::ConstraintSet;
use crate::core::Word;
use std::borrow::Borrow;

/// Words from an underlying sequence that satisfy a constraint set
///
/// Nothing is evaluated until the sequence is walked, and it can be walked again
/// from the start as many times as needed.
#[derive(Debug, Clone)]
pub struct Filtered<'c, I> {
    constraints: &'c ConstraintSet,
    words: I,
}

impl<'c, I> Filtered<'c, I>
where
    I: Iterator + Clone,
    I::Item: Borrow<Word>,
{
    pub(super) const fn new(constraints: &'c ConstraintSet, words: I) -> Self {
        Self { constraints, words }
    }

    /// Walk the matching words from the start
    #[must_use]
    pub fn iter(&self) -> FilteredIter<'c, I> {
        FilteredIter {
            constraints: self.constraints,
            inner: self.words.clone(),
        }
    }

    /// Number of matching words
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Materialize the matching words in input order
    #[must_use]
    pub fn collect_words(&self) -> Vec<I::Item> {
        self.iter().collect()
    }
}

impl<'c, I> IntoIterator for &Filtered<'c, I>
where
    I: Iterator + Clone,
    I::Item: Borrow<Word>,
{
    type Item = I::Item;
    type IntoIter = FilteredIter<'c, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over a [`Filtered`] sequence
#[derive(Debug, Clone)]
pub struct FilteredIter<'c, I> {
    constraints: &'c ConstraintSet,
    inner: I,
}

impl<I> Iterator for FilteredIter<'_, I>
where
    I: Iterator,
    I::Item: Borrow<Word>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let constraints = self.constraints;
        self.inner.find(|word| constraints.allows(word.borrow()))
    }
}
