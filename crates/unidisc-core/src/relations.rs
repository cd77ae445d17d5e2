//! # Relation Store
//!
//! Dense storage for the two relations over course ids.
//!
//! The store owns one square boolean matrix per relation. Both matrices
//! always have the same dimension, equal to the size of the relation space.
//! Growing the space is the only structural mutation and never loses edges.

use crate::primitives::MAX_ENTITIES;
use crate::{EntityId, RelationKind};
use serde::{Deserialize, Serialize};

// =============================================================================
// BOOLEAN MATRIX
// =============================================================================

/// A square boolean matrix stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoolMatrix {
    dim: usize,
    cells: Vec<bool>,
}

impl BoolMatrix {
    /// Create an all-false `dim x dim` matrix.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim.saturating_mul(dim)],
        }
    }

    /// Build a matrix from an edge list. Edges outside `dim` are ignored.
    #[must_use]
    pub fn from_edges(dim: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::new(dim);
        for &(from, to) in edges {
            matrix.set(from, to);
        }
        matrix
    }

    /// Dimension of the matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Read a cell. Out-of-range coordinates read as `false`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.dim || col >= self.dim {
            return false;
        }
        self.cells[row * self.dim + col]
    }

    /// Set a cell to `true`. Returns `false` if the coordinates are out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) -> bool {
        if row >= self.dim || col >= self.dim {
            return false;
        }
        self.cells[row * self.dim + col] = true;
        true
    }

    /// Extend the matrix to `new_dim`, keeping every existing cell.
    ///
    /// New rows and columns are all-false. Shrinking is not supported;
    /// a `new_dim` not larger than the current one is a no-op.
    pub fn grow(&mut self, new_dim: usize) {
        if new_dim <= self.dim {
            return;
        }
        let mut cells = vec![false; new_dim.saturating_mul(new_dim)];
        for row in 0..self.dim {
            let old = &self.cells[row * self.dim..(row + 1) * self.dim];
            cells[row * new_dim..row * new_dim + self.dim].copy_from_slice(old);
        }
        self.dim = new_dim;
        self.cells = cells;
    }

    /// Copy of the leading `dim x dim` block, padded with `false` when
    /// `dim` exceeds the current dimension.
    #[must_use]
    pub fn resized(&self, dim: usize) -> Self {
        let mut out = Self::new(dim);
        let shared = dim.min(self.dim);
        for row in 0..shared {
            for col in 0..shared {
                if self.get(row, col) {
                    out.set(row, col);
                }
            }
        }
        out
    }

    /// Iterate all true cells as `(row, col)` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(idx, _)| (idx / dim, idx % dim))
    }

    /// Number of true cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    /// Ids with an edge into `col`, ascending.
    pub fn column(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.dim).filter(move |&row| self.get(row, col))
    }

    /// Whether any diagonal cell is set.
    #[must_use]
    pub fn has_diagonal(&self) -> bool {
        (0..self.dim).any(|i| self.get(i, i))
    }
}

// =============================================================================
// RELATION STORE
// =============================================================================

/// Owner of the prerequisite and implication relations.
///
/// Writes that name an id beyond the current size extend the store before
/// recording the edge, so an undersized store never drops an edge. Reads
/// never extend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationStore {
    prereq: BoolMatrix,
    implication: BoolMatrix,
}

impl RelationStore {
    /// Create an empty relation space (`n = 0`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relation space of `size` ids with no edges.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        let mut store = Self::new();
        store.grow(size);
        store
    }

    /// Current size `n` of the relation space.
    #[must_use]
    pub fn size(&self) -> usize {
        self.prereq.dim()
    }

    /// Grow both matrices to `new_size`, preserving every edge.
    ///
    /// Sizes beyond `MAX_ENTITIES` are clamped.
    pub fn grow(&mut self, new_size: usize) {
        let new_size = new_size.min(MAX_ENTITIES);
        self.prereq.grow(new_size);
        self.implication.grow(new_size);
    }

    /// Record `a` as a direct prerequisite of `b`.
    ///
    /// Returns whether the edge was recorded.
    pub fn add_prereq(&mut self, a: EntityId, b: EntityId) -> bool {
        self.add_edge(RelationKind::Prerequisite, a, b)
    }

    /// Record that `a` directly implies `b`.
    ///
    /// Returns whether the edge was recorded.
    pub fn add_implication(&mut self, a: EntityId, b: EntityId) -> bool {
        self.add_edge(RelationKind::Implication, a, b)
    }

    /// Record an edge in the selected relation, extending the store first
    /// when either id is beyond the current size.
    pub fn add_edge(&mut self, kind: RelationKind, a: EntityId, b: EntityId) -> bool {
        let needed = a.index().max(b.index()).saturating_add(1);
        if needed > MAX_ENTITIES {
            return false;
        }
        if needed > self.size() {
            self.grow(needed);
        }
        self.matrix_mut(kind).set(a.index(), b.index())
    }

    /// Whether `a` is a direct prerequisite of `b`.
    #[must_use]
    pub fn get_prereq(&self, a: EntityId, b: EntityId) -> bool {
        self.prereq.get(a.index(), b.index())
    }

    /// Whether `a` directly implies `b`.
    #[must_use]
    pub fn get_implication(&self, a: EntityId, b: EntityId) -> bool {
        self.implication.get(a.index(), b.index())
    }

    /// Whether `id` belongs to the relation space.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        id.index() < self.size()
    }

    /// Read-only view of the prerequisite matrix.
    #[must_use]
    pub fn prereq_matrix(&self) -> &BoolMatrix {
        &self.prereq
    }

    /// Read-only view of the implication matrix.
    #[must_use]
    pub fn implication_matrix(&self) -> &BoolMatrix {
        &self.implication
    }

    /// Read-only view of the selected relation.
    #[must_use]
    pub fn matrix(&self, kind: RelationKind) -> &BoolMatrix {
        match kind {
            RelationKind::Prerequisite => &self.prereq,
            RelationKind::Implication => &self.implication,
        }
    }

    fn matrix_mut(&mut self, kind: RelationKind) -> &mut BoolMatrix {
        match kind {
            RelationKind::Prerequisite => &mut self.prereq,
            RelationKind::Implication => &mut self.implication,
        }
    }

    /// All edges of the selected relation, ascending by `(from, to)`.
    #[must_use]
    pub fn edges(&self, kind: RelationKind) -> Vec<(EntityId, EntityId)> {
        self.matrix(kind)
            .edges()
            .map(|(a, b)| (EntityId(a), EntityId(b)))
            .collect()
    }

    /// Number of edges in the selected relation.
    #[must_use]
    pub fn edge_count(&self, kind: RelationKind) -> usize {
        self.matrix(kind).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = RelationStore::new();
        assert_eq!(store.size(), 0);
        assert_eq!(store.edge_count(RelationKind::Prerequisite), 0);
    }

    #[test]
    fn grow_preserves_existing_edges() {
        let mut store = RelationStore::with_size(2);
        assert!(store.add_prereq(EntityId(0), EntityId(1)));
        assert!(store.add_implication(EntityId(1), EntityId(0)));

        store.grow(5);

        assert_eq!(store.size(), 5);
        assert!(store.get_prereq(EntityId(0), EntityId(1)));
        assert!(store.get_implication(EntityId(1), EntityId(0)));
        assert!(!store.get_prereq(EntityId(3), EntityId(4)));
    }

    #[test]
    fn grow_never_shrinks() {
        let mut store = RelationStore::with_size(4);
        store.add_prereq(EntityId(2), EntityId(3));
        store.grow(1);
        assert_eq!(store.size(), 4);
        assert!(store.get_prereq(EntityId(2), EntityId(3)));
    }

    #[test]
    fn write_beyond_size_auto_extends() {
        let mut store = RelationStore::new();
        assert!(store.add_prereq(EntityId(0), EntityId(6)));
        assert_eq!(store.size(), 7);
        assert!(store.get_prereq(EntityId(0), EntityId(6)));
        assert_eq!(store.implication_matrix().dim(), 7);
    }

    #[test]
    fn write_beyond_entity_limit_is_rejected() {
        let mut store = RelationStore::new();
        assert!(!store.add_prereq(EntityId(0), EntityId(MAX_ENTITIES)));
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn read_out_of_range_is_false_and_does_not_extend() {
        let store = RelationStore::with_size(2);
        assert!(!store.get_prereq(EntityId(0), EntityId(9)));
        assert!(!store.get_implication(EntityId(9), EntityId(0)));
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn relations_are_independent() {
        let mut store = RelationStore::with_size(3);
        store.add_prereq(EntityId(0), EntityId(1));
        assert!(!store.get_implication(EntityId(0), EntityId(1)));
        assert_eq!(store.edge_count(RelationKind::Implication), 0);
    }

    #[test]
    fn edges_listed_in_ascending_order() {
        let mut store = RelationStore::with_size(3);
        store.add_prereq(EntityId(2), EntityId(0));
        store.add_prereq(EntityId(0), EntityId(2));
        store.add_prereq(EntityId(0), EntityId(1));

        assert_eq!(
            store.edges(RelationKind::Prerequisite),
            vec![
                (EntityId(0), EntityId(1)),
                (EntityId(0), EntityId(2)),
                (EntityId(2), EntityId(0)),
            ]
        );
    }

    #[test]
    fn self_loop_is_stored() {
        let mut store = RelationStore::with_size(1);
        store.add_prereq(EntityId(0), EntityId(0));
        assert!(store.prereq_matrix().has_diagonal());
    }

    #[test]
    fn resized_pads_and_truncates() {
        let matrix = BoolMatrix::from_edges(3, &[(0, 1), (1, 2)]);
        let larger = matrix.resized(4);
        assert!(larger.get(0, 1));
        assert!(larger.get(1, 2));
        assert!(!larger.get(3, 3));

        let smaller = matrix.resized(2);
        assert!(smaller.get(0, 1));
        assert_eq!(smaller.count(), 1);
    }

    #[test]
    fn column_lists_predecessors() {
        let matrix = BoolMatrix::from_edges(4, &[(3, 1), (0, 1), (2, 0)]);
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![0, 3]);
    }
}
