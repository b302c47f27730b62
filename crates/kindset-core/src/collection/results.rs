//! Per-element query results and aggregation policies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a bulk query's per-element results are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Aggregation {
    /// Keep every result, in insertion order.
    #[default]
    Collect,

    /// Logical OR over all results; `false` when there are none.
    Any,

    /// Logical AND over all results; `true` when there are none.
    All,
}

/// Result of applying an [`Aggregation`] to [`QueryResults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Each(Vec<bool>),
    Folded(bool),
}

/// Query results of one bulk pass, one entry per element in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryResults {
    results: Vec<bool>,
}

impl QueryResults {
    pub fn new(results: Vec<bool>) -> Self {
        Self { results }
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn any(&self) -> bool {
        self.results.iter().any(|&r| r)
    }

    pub fn all(&self) -> bool {
        self.results.iter().all(|&r| r)
    }

    /// Number of elements that answered `true`.
    pub fn count_true(&self) -> usize {
        self.results.iter().filter(|&&r| r).count()
    }

    pub fn aggregate(&self, policy: Aggregation) -> QueryOutcome {
        match policy {
            Aggregation::Collect => QueryOutcome::Each(self.results.clone()),
            Aggregation::Any => QueryOutcome::Folded(self.any()),
            Aggregation::All => QueryOutcome::Folded(self.all()),
        }
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, bool>> {
        self.results.iter().copied()
    }
}

impl From<Vec<bool>> for QueryResults {
    fn from(results: Vec<bool>) -> Self {
        Self::new(results)
    }
}

impl FromIterator<bool> for QueryResults {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for QueryResults {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl PartialEq<[bool]> for QueryResults {
    fn eq(&self, other: &[bool]) -> bool {
        self.results == other
    }
}

impl<const N: usize> PartialEq<[bool; N]> for QueryResults {
    fn eq(&self, other: &[bool; N]) -> bool {
        self.results == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds() {
        let results = QueryResults::new(vec![true, false, true]);

        assert!(results.any());
        assert!(!results.all());
        assert_eq!(results.count_true(), 2);
    }

    #[test]
    fn test_empty_folds_are_identities() {
        let results = QueryResults::default();

        assert!(!results.any());
        assert!(results.all());
        assert_eq!(results.aggregate(Aggregation::Any), QueryOutcome::Folded(false));
        assert_eq!(results.aggregate(Aggregation::All), QueryOutcome::Folded(true));
    }

    #[test]
    fn test_collect_keeps_order() {
        let results: QueryResults = [false, true, false].into_iter().collect();

        assert_eq!(
            results.aggregate(Aggregation::Collect),
            QueryOutcome::Each(vec![false, true, false])
        );
        assert_eq!(results, [false, true, false]);
    }
}
