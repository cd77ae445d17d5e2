//! # Closure Engine
//!
//! Transitive closure and cycle detection over a relation matrix.
//!
//! Closures are never cached: every query recomputes from the current
//! edges, so a closure can never be stale with respect to the store.

use crate::relations::{BoolMatrix, RelationStore};
use crate::RelationKind;

/// Computes reachability over a `BoolMatrix`.
pub struct ClosureEngine;

impl ClosureEngine {
    /// Transitive closure of `matrix`.
    ///
    /// `closure[i][j]` is true iff there is a nonempty directed path from
    /// `i` to `j`. The intermediate vertex `k` must be the outermost loop
    /// for a single pass to reach the fixed point.
    #[must_use]
    pub fn transitive_closure(matrix: &BoolMatrix) -> BoolMatrix {
        let n = matrix.dim();
        let mut closure = matrix.clone();
        for k in 0..n {
            for i in 0..n {
                if !closure.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if closure.get(k, j) {
                        closure.set(i, j);
                    }
                }
            }
        }
        closure
    }

    /// Whether some id can reach itself.
    #[must_use]
    pub fn has_cycle(matrix: &BoolMatrix) -> bool {
        Self::transitive_closure(matrix).has_diagonal()
    }

    /// Closure of one of the store's relations.
    #[must_use]
    pub fn closure_of(store: &RelationStore, kind: RelationKind) -> BoolMatrix {
        Self::transitive_closure(store.matrix(kind))
    }
}

impl RelationStore {
    /// Transitive closure of the prerequisite relation.
    #[must_use]
    pub fn prereq_closure(&self) -> BoolMatrix {
        ClosureEngine::closure_of(self, RelationKind::Prerequisite)
    }

    /// Transitive closure of the implication relation.
    #[must_use]
    pub fn implication_closure(&self) -> BoolMatrix {
        ClosureEngine::closure_of(self, RelationKind::Implication)
    }

    /// Whether the prerequisite relation contains a cycle (including self-loops).
    #[must_use]
    pub fn has_prereq_cycle(&self) -> bool {
        ClosureEngine::has_cycle(self.prereq_matrix())
    }
}

// =============================================================================
// TESTS
// =============================================================================
