//! First-writer-wins merge of per-term upstream results.
//!
//! Outcomes are folded in planner term order. The first instance of each
//! identity is kept and attributed to the term that produced it; later
//! duplicates are discarded and never overwrite. A failed term
//! contributes nothing and does not abort the merge.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::types::CatalogItem;

/// The settled result of one upstream call, tagged with its term.
#[derive(Debug)]
pub struct TermOutcome<T> {
    pub term: String,
    pub result: Result<Vec<T>, SearchError>,
}

impl<T> TermOutcome<T> {
    pub fn new(term: impl Into<String>, result: Result<Vec<T>, SearchError>) -> Self {
        Self {
            term: term.into(),
            result,
        }
    }
}

/// Merged items in first-seen order, plus failure bookkeeping.
#[derive(Debug)]
pub struct Merged<T> {
    /// Distinct items, ordered by first appearance.
    pub items: Vec<T>,
    /// Failed terms with their error messages, in term order.
    pub failures: Vec<(String, String)>,
    /// Number of terms whose call succeeded (even if empty).
    pub succeeded: usize,
}

impl<T> Merged<T> {
    /// `true` when at least one term was planned and every one of them failed.
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0 && !self.failures.is_empty()
    }

    /// Failure summary suitable for an error message.
    pub fn failure_summary(&self) -> String {
        self.failures
            .iter()
            .map(|(term, err)| format!("{term}: {err}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Merge per-term outcomes into one identity-unique, ordered list.
///
/// The output never holds more items than the sum of the successful
/// per-term counts.
pub fn merge_first_seen<T: CatalogItem>(outcomes: Vec<TermOutcome<T>>) -> Merged<T> {
    let mut seen: HashSet<T::Id> = HashSet::new();
    let mut items: Vec<T> = Vec::new();
    let mut failures = Vec::new();
    let mut succeeded = 0;

    for outcome in outcomes {
        match outcome.result {
            Ok(batch) => {
                succeeded += 1;
                for mut item in batch {
                    if seen.insert(item.identity()) {
                        item.attribute_to(&outcome.term);
                        items.push(item);
                    }
                }
            }
            Err(err) => failures.push((outcome.term, err.to_string())),
        }
    }

    Merged {
        items,
        failures,
        succeeded,
    }
}
