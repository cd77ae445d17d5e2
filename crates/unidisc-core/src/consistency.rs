//! # Consistency Report
//!
//! Whole-session checks over the catalog and relations:
//! - prerequisite cycles
//! - students enrolled in a course without one of its transitive prerequisites
//! - students enrolled in more courses than the overload threshold
//! - course pairs sharing both a faculty member and a room
//!
//! The report is structured data; `render` turns it into text.

use crate::catalog::Catalog;
use crate::session::Session;
use crate::{EntityId, FacultyId, RoomId, StudentId};
use serde::{Deserialize, Serialize};

/// A student enrolled in `course` without its transitive prerequisite `prerequisite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPrerequisite {
    pub student: StudentId,
    pub prerequisite: EntityId,
    pub course: EntityId,
}

/// A student enrolled in more courses than the threshold allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overload {
    pub student: StudentId,
    pub enrolled: usize,
}

/// Two courses taught by the same faculty member in the same room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConflict {
    pub faculty: FacultyId,
    pub room: RoomId,
    pub first: EntityId,
    pub second: EntityId,
}

/// Findings of one consistency run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub prereq_cycle: bool,
    pub missing_prerequisites: Vec<MissingPrerequisite>,
    pub overloads: Vec<Overload>,
    pub conflicts: Vec<RoomConflict>,
}

impl ConsistencyReport {
    /// Run every check against the session.
    #[must_use]
    pub fn build(session: &Session, overload_threshold: usize) -> Self {
        let catalog = session.catalog();
        let relations = session.relations();
        let closure = relations.prereq_closure();

        let mut missing_prerequisites = Vec::new();
        for student in catalog.students() {
            let enrolled = session.completion_from_ids(&student.enrolled);
            for &course in &student.enrolled {
                if !relations.contains(course) {
                    continue;
                }
                for pre in closure.column(course.index()) {
                    if !enrolled[pre] {
                        missing_prerequisites.push(MissingPrerequisite {
                            student: student.id,
                            prerequisite: EntityId(pre),
                            course,
                        });
                    }
                }
            }
        }

        let overloads = catalog
            .students()
            .iter()
            .filter(|s| s.enrolled.len() > overload_threshold)
            .map(|s| Overload {
                student: s.id,
                enrolled: s.enrolled.len(),
            })
            .collect();

        Self {
            prereq_cycle: relations.has_prereq_cycle(),
            missing_prerequisites,
            overloads,
            conflicts: Self::room_conflicts(catalog),
        }
    }

    fn room_conflicts(catalog: &Catalog) -> Vec<RoomConflict> {
        let n = catalog.course_count();
        let mut conflicts = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (first, second) = (EntityId(i), EntityId(j));
                let (Some(f1), Some(f2)) = (catalog.faculty_of(first), catalog.faculty_of(second))
                else {
                    continue;
                };
                let (Some(r1), Some(r2)) = (catalog.room_of(first), catalog.room_of(second)) else {
                    continue;
                };
                if f1 == f2 && r1 == r2 {
                    conflicts.push(RoomConflict {
                        faculty: f1,
                        room: r1,
                        first,
                        second,
                    });
                }
            }
        }
        conflicts
    }

    /// Whether the run found nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.prereq_cycle
            && self.missing_prerequisites.is_empty()
            && self.overloads.is_empty()
            && self.conflicts.is_empty()
    }

    /// Render the report as lines of text, resolving names through `catalog`.
    #[must_use]
    pub fn render(&self, catalog: &Catalog) -> String {
        let student_name = |id: StudentId| {
            catalog
                .student(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| format!("S#{}", id.0))
        };

        let mut text = String::from("=== Consistency Report ===\n");
        if self.prereq_cycle {
            text.push_str("Error: prerequisite cycles detected.\n");
        } else {
            text.push_str("Prerequisite relation appears acyclic.\n");
        }

        for m in &self.missing_prerequisites {
            text.push_str(&format!(
                "Student {} missing prereq {} for {}.\n",
                student_name(m.student),
                catalog.course_label(m.prerequisite),
                catalog.course_label(m.course)
            ));
        }

        for o in &self.overloads {
            text.push_str(&format!(
                "Warning: student {} enrolled in {} courses (possible overload).\n",
                student_name(o.student),
                o.enrolled
            ));
        }

        for c in &self.conflicts {
            let faculty = catalog
                .faculty(c.faculty)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| format!("F#{}", c.faculty.0));
            let room = catalog
                .room(c.room)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| format!("R#{}", c.room.0));
            text.push_str(&format!(
                "Conflict: Faculty {} assigned to {} and {} in room {}.\n",
                faculty,
                catalog.course_label(c.first),
                catalog.course_label(c.second),
                room
            ));
        }

        text.push_str("=== End Report ===\n");
        text
    }
}

// =============================================================================
// TESTS
// =============================================================================
