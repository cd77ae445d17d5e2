//! # Induction Checks
//!
//! Satisfaction predicates over a completion vector.
//!
//! Two rules are exposed and callers distinguish them:
//! - `check_recursive` walks direct prerequisite edges and additionally
//!   requires the target course itself to be completed.
//! - `check_strong` only requires every transitive prerequisite to be
//!   completed. Recommendations and proofs use this rule.

use crate::relations::RelationStore;
use crate::types::is_marked;
use crate::EntityId;

/// Evaluates prerequisite satisfaction against a completion vector.
pub struct InductionChecker<'a> {
    store: &'a RelationStore,
}

impl<'a> InductionChecker<'a> {
    /// Create a checker over the store's prerequisite relation.
    #[must_use]
    pub fn new(store: &'a RelationStore) -> Self {
        Self { store }
    }

    /// Depth-first check over direct prerequisite edges.
    ///
    /// A node is satisfied when it is completed. Otherwise it is explored
    /// once: every direct prerequisite must be satisfied and the node must
    /// itself be completed. A node reached again within the same call is
    /// unsatisfied. The traversal keeps an explicit stack, so the native
    /// stack depth does not grow with the length of prerequisite chains.
    #[must_use]
    pub fn check_recursive(&self, id: EntityId, completed: &[bool]) -> bool {
        let n = self.store.size();
        let target = id.index();
        if target >= n {
            return false;
        }
        if is_marked(completed, target) {
            return true;
        }

        let matrix = self.store.prereq_matrix();
        let mut visited = vec![false; n];
        visited[target] = true;

        // Each frame is (node, next predecessor to examine).
        let mut stack = vec![(target, 0usize)];
        // Result of the most recently finished child, consumed by its parent.
        let mut child: Option<bool> = None;

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;

            if child.take() == Some(false) {
                stack.pop();
                child = Some(false);
                continue;
            }

            match (cursor..n).find(|&u| matrix.get(u, node)) {
                Some(pred) => {
                    frame.1 = pred + 1;
                    if is_marked(completed, pred) {
                        child = Some(true);
                    } else if visited[pred] {
                        child = Some(false);
                    } else {
                        visited[pred] = true;
                        stack.push((pred, 0));
                    }
                }
                None => {
                    stack.pop();
                    child = Some(is_marked(completed, node));
                }
            }
        }

        child.unwrap_or(false)
    }

    /// Closure-based check: every transitive prerequisite of `id` is completed.
    ///
    /// `id` itself does not need to be completed.
    #[must_use]
    pub fn check_strong(&self, id: EntityId, completed: &[bool]) -> bool {
        let target = id.index();
        if target >= self.store.size() {
            return false;
        }
        let closure = self.store.prereq_closure();
        closure.column(target).all(|pre| is_marked(completed, pre))
    }

    /// All transitive prerequisites of `id`, ascending.
    #[must_use]
    pub fn list_indirect(&self, id: EntityId) -> Vec<EntityId> {
        let target = id.index();
        if target >= self.store.size() {
            return Vec::new();
        }
        self.store
            .prereq_closure()
            .column(target)
            .map(EntityId)
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
