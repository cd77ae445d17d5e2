//! # Session Module
//!
//! A session combines the `Catalog` with the `RelationStore`.
//!
//! The session is the single logical owner of all state: mutations take
//! `&mut self` and every query borrows immutably, so queries can never
//! observe a half-applied write. Registering a course grows the relation
//! space to match the catalog.

use crate::catalog::Catalog;
use crate::inference::ImplicationPropagator;
use crate::induction::InductionChecker;
use crate::ordering::TopoEnumerator;
use crate::primitives::MAX_ENTITIES;
use crate::proof::ProofExporter;
use crate::recommend::Recommender;
use crate::relations::RelationStore;
use crate::{EntityId, StudentId, UnidiscError};

/// The live state of one UNIDISC run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    relations: RelationStore,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the catalog for registering people and assignments.
    ///
    /// Courses must be added through `Session::add_course` so the relation
    /// space keeps up with the catalog.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Read-only access to the relations.
    #[must_use]
    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    /// Register a course and grow the relation space to include it.
    ///
    /// Fails once the catalog holds `MAX_ENTITIES` courses, since a further
    /// course could not take part in any relation.
    pub fn add_course(
        &mut self,
        code: &str,
        name: &str,
        credits: u32,
    ) -> Result<EntityId, UnidiscError> {
        if self.catalog.course_count() >= MAX_ENTITIES {
            return Err(UnidiscError::InvalidInput(format!(
                "Course limit reached: at most {} courses",
                MAX_ENTITIES
            )));
        }
        let id = self.catalog.add_course(code, name, credits)?;
        self.relations.grow(self.catalog.course_count());
        Ok(id)
    }

    /// Record a prerequisite edge. Returns whether the edge was recorded.
    pub fn add_prereq(&mut self, a: EntityId, b: EntityId) -> bool {
        self.relations.grow(self.catalog.course_count());
        self.relations.add_prereq(a, b)
    }

    /// Record an implication edge. Returns whether the edge was recorded.
    pub fn add_implication(&mut self, a: EntityId, b: EntityId) -> bool {
        self.relations.grow(self.catalog.course_count());
        self.relations.add_implication(a, b)
    }

    /// Size of the relation space.
    #[must_use]
    pub fn size(&self) -> usize {
        self.relations.size()
    }

    /// Completion vector with `true` at every listed id inside the relation space.
    #[must_use]
    pub fn completion_from_ids(&self, ids: &[EntityId]) -> Vec<bool> {
        let n = self.relations.size();
        let mut completed = vec![false; n];
        for id in ids {
            if let Some(slot) = completed.get_mut(id.index()) {
                *slot = true;
            }
        }
        completed
    }

    /// Completion vector built from a student's enrollments.
    pub fn completion_for(&self, student: StudentId) -> Result<Vec<bool>, UnidiscError> {
        let record = self
            .catalog
            .student(student)
            .ok_or(UnidiscError::StudentNotFound(student.0))?;
        Ok(self.completion_from_ids(&record.enrolled))
    }

    // -------------------------------------------------------------------------
    // Engine components
    // -------------------------------------------------------------------------

    /// Induction checker over the current relations.
    #[must_use]
    pub fn induction(&self) -> InductionChecker<'_> {
        InductionChecker::new(&self.relations)
    }

    /// Ordering enumerator over the current relations.
    #[must_use]
    pub fn enumerator(&self) -> TopoEnumerator<'_> {
        TopoEnumerator::new(&self.relations)
    }

    /// Implication propagator over the current relations.
    #[must_use]
    pub fn propagator(&self) -> ImplicationPropagator<'_> {
        ImplicationPropagator::new(&self.relations)
    }

    /// Recommender over the current relations.
    #[must_use]
    pub fn recommender(&self) -> Recommender<'_> {
        Recommender::new(&self.relations)
    }

    /// Proof exporter over the current relations and catalog.
    #[must_use]
    pub fn proof_exporter(&self) -> ProofExporter<'_> {
        ProofExporter::new(&self.relations, &self.catalog)
    }
}

// =============================================================================
// TESTS
// =============================================================================
