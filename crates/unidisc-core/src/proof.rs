//! # Proof Export
//!
//! Renders a plain-text argument for whether a course's prerequisites are
//! satisfied, and writes it to a file.
//!
//! The conclusion uses the same rule as `InductionChecker::check_strong`:
//! every transitive prerequisite must be completed.

use crate::catalog::Catalog;
use crate::relations::RelationStore;
use crate::types::is_marked;
use crate::{EntityId, UnidiscError};
use std::path::Path;

/// One line of a proof: a transitive prerequisite and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub prerequisite: EntityId,
    pub completed: bool,
}

/// A structured proof, rendered to text with `render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// Label of the course the proof is about.
    pub subject: String,
    /// `None` when the course id is invalid.
    pub steps: Option<Vec<ProofStep>>,
}

impl Proof {
    /// Whether every step is completed. An invalid proof is never satisfied.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.steps
            .as_ref()
            .is_some_and(|steps| steps.iter().all(|s| s.completed))
    }

    /// Render as newline-terminated lines, labelling prerequisites with `label`.
    pub fn render(&self, label: impl Fn(EntityId) -> String) -> String {
        let mut text = format!("Proof for prerequisites of {}.\n", self.subject);

        let Some(steps) = &self.steps else {
            text.push_str("Invalid course id.\n");
            return text;
        };

        for step in steps {
            let status = if step.completed { "COMPLETED" } else { "MISSING" };
            text.push_str(&format!(
                "- Indirect prerequisite: {} : {}.\n",
                label(step.prerequisite),
                status
            ));
        }
        if steps.is_empty() {
            text.push_str("- No prerequisites found.\n");
        }

        if self.is_satisfied() {
            text.push_str(&format!(
                "Conclusion: All prerequisites satisfied for {}.\n",
                self.subject
            ));
        } else {
            text.push_str(&format!(
                "Conclusion: Prerequisites NOT satisfied for {}.\n",
                self.subject
            ));
        }
        text
    }
}

/// Builds proofs from the prerequisite closure and the catalog's labels.
pub struct ProofExporter<'a> {
    store: &'a RelationStore,
    catalog: &'a Catalog,
}

impl<'a> ProofExporter<'a> {
    /// Create an exporter.
    #[must_use]
    pub fn new(store: &'a RelationStore, catalog: &'a Catalog) -> Self {
        Self { store, catalog }
    }

    /// Build the structured proof for `id`.
    #[must_use]
    pub fn build(&self, id: EntityId, completed: &[bool]) -> Proof {
        let subject = self.catalog.course_label(id);
        if id.index() >= self.store.size() {
            return Proof {
                subject,
                steps: None,
            };
        }

        let steps = self
            .store
            .prereq_closure()
            .column(id.index())
            .map(|pre| ProofStep {
                prerequisite: EntityId(pre),
                completed: is_marked(completed, pre),
            })
            .collect();

        Proof {
            subject,
            steps: Some(steps),
        }
    }

    /// Render the proof text for `id`.
    #[must_use]
    pub fn generate_proof(&self, id: EntityId, completed: &[bool]) -> String {
        self.build(id, completed)
            .render(|pre| self.catalog.course_label(pre))
    }

    /// Write `content` to `path`, truncating an existing file.
    pub fn write_proof(path: impl AsRef<Path>, content: &str) -> Result<(), UnidiscError> {
        let path = path.as_ref();
        std::fs::write(path, content).map_err(|e| {
            UnidiscError::IoError(format!("Cannot write proof to '{}': {}", path.display(), e))
        })
    }

    /// Write `content` to `path`, reporting only success or failure.
    pub fn save_to_file(path: impl AsRef<Path>, content: &str) -> bool {
        Self::write_proof(path, content).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
