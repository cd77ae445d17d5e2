//! # Scenario Files
//!
//! A scenario is a TOML description of a session: courses, people, rooms,
//! relations and assignments. It is read once at startup; nothing is ever
//! written back.
//!
//! ```toml
//! faculty = ["Turing"]
//! rooms = ["A1"]
//! prerequisites = [[0, 1]]
//! implications = [[1, 0]]
//!
//! [[courses]]
//! code = "CS101"
//! name = "Intro"
//! credits = 3
//!
//! [[courses]]
//! code = "CS201"
//! name = "Structures"
//!
//! [[students]]
//! name = "Ana"
//! enrolled = [0]
//!
//! [[assignments]]
//! course = 0
//! faculty = 0
//! room = 0
//! ```
//!
//! Top-level arrays must come before the first `[[table]]` header.

use serde::Deserialize;
use std::path::Path;
use unidisc_core::{EntityId, FacultyId, RoomId, Session, UnidiscError};

/// A course entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
}

/// A student entry with enrolled course ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentEntry {
    pub name: String,
    #[serde(default)]
    pub enrolled: Vec<usize>,
}

/// Faculty and/or room assignment for one course.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentEntry {
    pub course: usize,
    pub faculty: Option<usize>,
    pub room: Option<usize>,
}

/// A complete scenario.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub courses: Vec<CourseEntry>,
    pub students: Vec<StudentEntry>,
    pub faculty: Vec<String>,
    pub rooms: Vec<String>,
    pub prerequisites: Vec<[usize; 2]>,
    pub implications: Vec<[usize; 2]>,
    pub assignments: Vec<AssignmentEntry>,
}

impl Scenario {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, UnidiscError> {
        toml::from_str(text).map_err(|e| UnidiscError::ScenarioError(e.to_string()))
    }

    /// Read a scenario file.
    pub fn from_file(path: &Path) -> Result<Self, UnidiscError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            UnidiscError::ScenarioError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Build a fresh session from this scenario.
    pub fn to_session(&self) -> Result<Session, UnidiscError> {
        let mut session = Session::new();
        self.apply(&mut session)?;
        Ok(session)
    }

    /// Register every entry in `session`, in file order.
    ///
    /// Registry errors (unknown ids, bad names) abort the load. Relation
    /// edges follow the engine's rules: ids past the last course extend the
    /// relation space, and rejected edges are logged and skipped.
    pub fn apply(&self, session: &mut Session) -> Result<(), UnidiscError> {
        for course in &self.courses {
            session.add_course(&course.code, &course.name, course.credits)?;
        }

        let catalog = session.catalog_mut();
        for name in &self.faculty {
            catalog.add_faculty(name)?;
        }
        for name in &self.rooms {
            catalog.add_room(name)?;
        }
        for student in &self.students {
            let id = catalog.add_student(&student.name)?;
            for &course in &student.enrolled {
                catalog.enroll(id, EntityId(course))?;
            }
        }
        for assignment in &self.assignments {
            let course = EntityId(assignment.course);
            if let Some(f) = assignment.faculty {
                catalog.assign_faculty(course, FacultyId(f))?;
            }
            if let Some(r) = assignment.room {
                catalog.assign_room(course, RoomId(r))?;
            }
        }

        let courses = session.catalog().course_count();
        for &[a, b] in &self.prerequisites {
            if a >= courses || b >= courses {
                tracing::warn!("Prerequisite {} -> {} references an unregistered course", a, b);
            }
            if !session.add_prereq(EntityId(a), EntityId(b)) {
                tracing::warn!("Prerequisite {} -> {} rejected", a, b);
            }
        }
        for &[a, b] in &self.implications {
            if !session.add_implication(EntityId(a), EntityId(b)) {
                tracing::warn!("Implication {} -> {} rejected", a, b);
            }
        }

        tracing::debug!(
            courses = session.catalog().course_count(),
            students = session.catalog().students().len(),
            "Scenario applied"
        );
        Ok(())
    }
}

/// Build the starting session: from a scenario file when given, empty otherwise.
pub fn load_session(path: Option<&Path>) -> Result<Session, UnidiscError> {
    match path {
        Some(p) => {
            tracing::info!("Loading scenario from {:?}", p);
            Scenario::from_file(p)?.to_session()
        }
        None => Ok(Session::new()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
