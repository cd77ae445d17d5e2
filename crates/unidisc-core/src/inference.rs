//! # Implication Inference
//!
//! Fixed-point propagation of a fact vector across the implication relation.
//!
//! Propagation scans the transitive closure rather than raw edges, so a
//! single sweep already marks everything reachable; the loop only confirms
//! the fixed point. Cycles in the implication relation are harmless.

use crate::relations::RelationStore;

/// Closes a fact vector under the implication relation.
pub struct ImplicationPropagator<'a> {
    store: &'a RelationStore,
}

impl<'a> ImplicationPropagator<'a> {
    /// Create a propagator over the store's implication relation.
    #[must_use]
    pub fn new(store: &'a RelationStore) -> Self {
        Self { store }
    }

    /// Return `facts` extended to the relation size and closed under implication.
    ///
    /// Facts beyond the relation size are kept as given.
    #[must_use]
    pub fn propagate(&self, facts: &[bool]) -> Vec<bool> {
        let n = self.store.size();
        let mut facts = facts.to_vec();
        if facts.len() < n {
            facts.resize(n, false);
        }

        let closure = self.store.implication_closure();
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..n {
                if !facts[i] {
                    continue;
                }
                for j in 0..n {
                    if closure.get(i, j) && !facts[j] {
                        facts[j] = true;
                        changed = true;
                    }
                }
            }
        }
        facts
    }
}

// =============================================================================
// TESTS
// =============================================================================
