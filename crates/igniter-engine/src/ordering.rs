//! Declared-order sorting of surviving candidates.

use igniter_core::{AttributeCatalog, CandidateSet, UnitId};

/// Applies declared "activate-after" constraints to a candidate list.
///
/// This is a single-pass, local reordering heuristic, not a topological
/// sort: in one forward pass each candidate pulls its still-pending
/// "activate-after" targets ahead of itself. Transitive chains spanning
/// non-adjacent positions are not handled, `activate_before` declarations
/// are not consulted, and there is no cycle detection; cyclic constraints
/// produce an order dependent on iteration sequence rather than an error.
/// A target absent from the candidate list is silently skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderingEngine;

impl OrderingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sorts candidates according to their declared attributes, returning a
    /// duplicate-free list.
    pub fn sort(&self, candidates: &CandidateSet, catalog: &AttributeCatalog) -> Vec<UnitId> {
        let mut accumulator: Vec<UnitId> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let after = catalog.activate_after(candidate);
            if after.is_empty() {
                if !accumulator.contains(candidate) {
                    accumulator.push(candidate.clone());
                }
                continue;
            }
            for target in after {
                // Targets no longer in the candidate list are skipped.
                if !candidates.contains(target) {
                    continue;
                }
                if let Some(position) = accumulator.iter().position(|id| id == target) {
                    accumulator.remove(position);
                }
                accumulator.push(target.clone());
            }
            accumulator.push(candidate.clone());
        }
        // Guarantee no duplicates; first occurrence wins.
        CandidateSet::dedupe(accumulator).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igniter_core::UnitAttributes;

    fn ids(names: &[&str]) -> Vec<UnitId> {
        names.iter().map(|n| UnitId::from(*n)).collect()
    }

    fn candidates(names: &[&str]) -> CandidateSet {
        ids(names).into_iter().collect()
    }

    fn catalog(entries: &[(&str, &[&str])]) -> AttributeCatalog {
        entries
            .iter()
            .map(|(unit, after)| {
                (
                    UnitId::from(*unit),
                    UnitAttributes::new().with_activate_after(ids(after)),
                )
            })
            .collect()
    }

    #[test]
    fn single_level_after_pulls_target_forward() {
        let engine = OrderingEngine::new();
        let sorted = engine.sort(&candidates(&["a", "b"]), &catalog(&[("a", &["b"])]));
        assert_eq!(sorted, ids(&["b", "a"]));
    }

    #[test]
    fn no_declarations_preserve_order() {
        let engine = OrderingEngine::new();
        let sorted = engine.sort(&candidates(&["c", "a", "b"]), &AttributeCatalog::new());
        assert_eq!(sorted, ids(&["c", "a", "b"]));
    }

    #[test]
    fn absent_target_is_skipped() {
        let engine = OrderingEngine::new();
        let sorted = engine.sort(&candidates(&["a"]), &catalog(&[("a", &["d"])]));
        assert_eq!(sorted, ids(&["a"]));
    }

    #[test]
    fn pending_target_is_moved_not_duplicated() {
        let engine = OrderingEngine::new();
        // b is already accumulated when c declares after it; b moves ahead
        // of c and the result stays duplicate-free.
        let sorted = engine.sort(
            &candidates(&["a", "b", "c"]),
            &catalog(&[("c", &["b"])]),
        );
        assert_eq!(sorted, ids(&["a", "b", "c"]));
        let unique: std::collections::HashSet<_> = sorted.iter().collect();
        assert_eq!(unique.len(), sorted.len());
    }

    #[test]
    fn multiple_targets_keep_declaration_order() {
        let engine = OrderingEngine::new();
        let sorted = engine.sort(
            &candidates(&["a", "b", "c"]),
            &catalog(&[("a", &["b", "c"])]),
        );
        assert_eq!(sorted, ids(&["b", "c", "a"]));
    }

    #[test]
    fn activate_before_is_not_consulted() {
        let engine = OrderingEngine::new();
        let catalog: AttributeCatalog = [(
            UnitId::from("a"),
            UnitAttributes::new().with_activate_before(ids(&["b"])),
        )]
        .into_iter()
        .collect();
        // The shipped pass only honors activate-after.
        let sorted = engine.sort(&candidates(&["b", "a"]), &catalog);
        assert_eq!(sorted, ids(&["b", "a"]));
    }
}
