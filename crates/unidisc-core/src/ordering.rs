//! # Ordering Enumeration
//!
//! Bounded enumeration of linear course orders that respect every
//! prerequisite edge.
//!
//! The search is a backtracking walk over "available" ids: an id is
//! available when it has not been placed yet and no other unplaced id has
//! a prerequisite edge into it. Candidates are always tried in ascending
//! id order, so the output is deterministic.
//!
//! Callers must check `RelationStore::has_prereq_cycle` first. A cyclic
//! relation never hangs the search; it simply yields fewer (or no) orders.

use crate::relations::{BoolMatrix, RelationStore};
use crate::EntityId;

/// Enumerates topological orders of the prerequisite relation.
pub struct TopoEnumerator<'a> {
    store: &'a RelationStore,
}

/// Mutable search state shared by every level of the backtracking.
struct Search<'m> {
    matrix: &'m BoolMatrix,
    n: usize,
    limit: usize,
    used: Vec<bool>,
    order: Vec<EntityId>,
    out: Vec<Vec<EntityId>>,
}

impl<'a> TopoEnumerator<'a> {
    /// Create an enumerator over the store's prerequisite relation.
    #[must_use]
    pub fn new(store: &'a RelationStore) -> Self {
        Self { store }
    }

    /// List up to `limit` orders of the ids `0..n`.
    ///
    /// Returns an empty list for `n == 0` or `limit == 0`.
    #[must_use]
    pub fn enumerate(&self, n: usize, limit: usize) -> Vec<Vec<EntityId>> {
        if n == 0 || limit == 0 {
            return Vec::new();
        }

        let source = self.store.prereq_matrix();
        let owned;
        let matrix = if source.dim() == n {
            source
        } else {
            owned = source.resized(n);
            &owned
        };

        let mut search = Search {
            matrix,
            n,
            limit,
            used: vec![false; n],
            order: Vec::with_capacity(n),
            out: Vec::new(),
        };
        search.backtrack();
        search.out
    }
}

impl Search<'_> {
    fn done(&self) -> bool {
        self.out.len() >= self.limit
    }

    /// An unplaced id is available when no unplaced id points into it.
    fn is_available(&self, id: usize) -> bool {
        !self.used[id] && !(0..self.n).any(|j| !self.used[j] && self.matrix.get(j, id))
    }

    fn backtrack(&mut self) {
        if self.done() {
            return;
        }
        if self.order.len() == self.n {
            self.out.push(self.order.clone());
            return;
        }
        for id in 0..self.n {
            if !self.is_available(id) {
                continue;
            }
            self.used[id] = true;
            self.order.push(EntityId(id));
            self.backtrack();
            self.order.pop();
            self.used[id] = false;
            if self.done() {
                return;
            }
        }
    }
}

impl RelationStore {
    /// Convenience wrapper over `TopoEnumerator::enumerate` for the whole space.
    #[must_use]
    pub fn orders(&self, limit: usize) -> Vec<Vec<EntityId>> {
        TopoEnumerator::new(self).enumerate(self.size(), limit)
    }
}

// =============================================================================
// TESTS
// =============================================================================
