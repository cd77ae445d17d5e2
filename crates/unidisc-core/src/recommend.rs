//! # Recommender
//!
//! Suggests courses that can be taken next: not yet completed, with every
//! transitive prerequisite completed.

use crate::relations::RelationStore;
use crate::types::is_marked;
use crate::EntityId;

/// Produces next-course suggestions from a completion vector.
pub struct Recommender<'a> {
    store: &'a RelationStore,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over the store's prerequisite relation.
    #[must_use]
    pub fn new(store: &'a RelationStore) -> Self {
        Self { store }
    }

    /// Up to `max_count` eligible courses in ascending id order.
    #[must_use]
    pub fn suggest(&self, completed: &[bool], max_count: usize) -> Vec<EntityId> {
        let mut out = Vec::new();
        if max_count == 0 {
            return out;
        }

        let closure = self.store.prereq_closure();
        for course in 0..self.store.size() {
            if is_marked(completed, course) {
                continue;
            }
            if closure.column(course).all(|pre| is_marked(completed, pre)) {
                out.push(EntityId(course));
                if out.len() >= max_count {
                    break;
                }
            }
        }
        out
    }
}
