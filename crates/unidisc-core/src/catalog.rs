//! # Catalog
//!
//! Registries for courses, students, faculty and rooms, plus enrollment
//! and course assignments.
//!
//! Every registry assigns dense ids in insertion order. Course ids double
//! as `EntityId`s in the relation space.

use crate::primitives::MAX_NAME_LENGTH;
use crate::{EntityId, FacultyId, RoomId, StudentId, UnidiscError};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORDS
// =============================================================================

/// A registered course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    pub credits: u32,
}

/// A registered student and the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Enrolled courses in enrollment order, without duplicates.
    pub enrolled: Vec<EntityId>,
}

/// A registered faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
}

/// A registered room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

fn validate_name(name: &str) -> Result<(), UnidiscError> {
    if name.trim().is_empty() {
        return Err(UnidiscError::InvalidName("name must not be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(UnidiscError::InvalidName(format!(
            "name length {} exceeds maximum {}",
            name.len(),
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

// =============================================================================
// CATALOG
// =============================================================================

/// All registered entities and their bookkeeping relations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<Course>,
    students: Vec<Student>,
    faculties: Vec<Faculty>,
    rooms: Vec<Room>,
    /// Indexed by course id.
    course_faculty: Vec<Option<FacultyId>>,
    /// Indexed by course id.
    course_room: Vec<Option<RoomId>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Courses
    // -------------------------------------------------------------------------

    /// Register a course and return its id.
    pub fn add_course(
        &mut self,
        code: &str,
        name: &str,
        credits: u32,
    ) -> Result<EntityId, UnidiscError> {
        validate_name(code)?;
        validate_name(name)?;
        let id = EntityId(self.courses.len());
        self.courses.push(Course {
            id,
            code: code.to_string(),
            name: name.to_string(),
            credits,
        });
        self.course_faculty.push(None);
        self.course_room.push(None);
        Ok(id)
    }

    /// Look up a course.
    #[must_use]
    pub fn course(&self, id: EntityId) -> Option<&Course> {
        self.courses.get(id.index())
    }

    /// All courses in id order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of registered courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Display label of a course: its code, or `C#<id>` when unknown.
    #[must_use]
    pub fn course_label(&self, id: EntityId) -> String {
        self.course(id)
            .map(|c| c.code.clone())
            .unwrap_or_else(|| format!("C#{}", id.0))
    }

    fn require_course(&self, id: EntityId) -> Result<(), UnidiscError> {
        if id.index() < self.courses.len() {
            Ok(())
        } else {
            Err(UnidiscError::CourseNotFound(id.0))
        }
    }

    // -------------------------------------------------------------------------
    // People and rooms
    // -------------------------------------------------------------------------

    /// Register a student and return their id.
    pub fn add_student(&mut self, name: &str) -> Result<StudentId, UnidiscError> {
        validate_name(name)?;
        let id = StudentId(self.students.len());
        self.students.push(Student {
            id,
            name: name.to_string(),
            enrolled: Vec::new(),
        });
        Ok(id)
    }

    /// Register a faculty member and return their id.
    pub fn add_faculty(&mut self, name: &str) -> Result<FacultyId, UnidiscError> {
        validate_name(name)?;
        let id = FacultyId(self.faculties.len());
        self.faculties.push(Faculty {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    /// Register a room and return its id.
    pub fn add_room(&mut self, name: &str) -> Result<RoomId, UnidiscError> {
        validate_name(name)?;
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    /// Look up a student.
    #[must_use]
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0)
    }

    /// Look up a faculty member.
    #[must_use]
    pub fn faculty(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculties.get(id.0)
    }

    /// Look up a room.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// All students in id order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All faculty in id order.
    #[must_use]
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    /// All rooms in id order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    // -------------------------------------------------------------------------
    // Enrollment and assignments
    // -------------------------------------------------------------------------

    /// Enroll a student in a course.
    ///
    /// Returns `Ok(false)` if the student was already enrolled.
    pub fn enroll(&mut self, student: StudentId, course: EntityId) -> Result<bool, UnidiscError> {
        self.require_course(course)?;
        let record = self
            .students
            .get_mut(student.0)
            .ok_or(UnidiscError::StudentNotFound(student.0))?;
        if record.enrolled.contains(&course) {
            return Ok(false);
        }
        record.enrolled.push(course);
        Ok(true)
    }

    /// Assign a faculty member to teach a course, replacing any previous assignment.
    pub fn assign_faculty(
        &mut self,
        course: EntityId,
        faculty: FacultyId,
    ) -> Result<(), UnidiscError> {
        self.require_course(course)?;
        if self.faculty(faculty).is_none() {
            return Err(UnidiscError::FacultyNotFound(faculty.0));
        }
        self.course_faculty[course.index()] = Some(faculty);
        Ok(())
    }

    /// Assign a room to a course, replacing any previous assignment.
    pub fn assign_room(&mut self, course: EntityId, room: RoomId) -> Result<(), UnidiscError> {
        self.require_course(course)?;
        if self.room(room).is_none() {
            return Err(UnidiscError::RoomNotFound(room.0));
        }
        self.course_room[course.index()] = Some(room);
        Ok(())
    }

    /// Faculty assigned to a course, if any.
    #[must_use]
    pub fn faculty_of(&self, course: EntityId) -> Option<FacultyId> {
        self.course_faculty.get(course.index()).copied().flatten()
    }

    /// Room assigned to a course, if any.
    #[must_use]
    pub fn room_of(&self, course: EntityId) -> Option<RoomId> {
        self.course_room.get(course.index()).copied().flatten()
    }

    /// Faculty assignment of every course, indexed by course id.
    #[must_use]
    pub fn faculty_assignments(&self) -> &[Option<FacultyId>] {
        &self.course_faculty
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let mut catalog = Catalog::new();
        let a = catalog.add_course("CS101", "Intro", 3).expect("add");
        let b = catalog.add_course("CS201", "DataStructures", 4).expect("add");

        assert_eq!(a, EntityId(0));
        assert_eq!(b, EntityId(1));
        assert_eq!(catalog.course_count(), 2);
        assert_eq!(catalog.course(b).map(|c| c.credits), Some(4));
    }

    #[test]
    fn course_label_falls_back_to_id() {
        let mut catalog = Catalog::new();
        catalog.add_course("CS101", "Intro", 3).expect("add");
        assert_eq!(catalog.course_label(EntityId(0)), "CS101");
        assert_eq!(catalog.course_label(EntityId(5)), "C#5");
    }

    #[test]
    fn empty_name_rejected() {
        let mut catalog = Catalog::new();
        let result = catalog.add_student("  ");
        assert!(matches!(result, Err(UnidiscError::InvalidName(_))));
        assert!(catalog.students().is_empty());
    }

    #[test]
    fn overlong_name_rejected() {
        let mut catalog = Catalog::new();
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(catalog.add_room(&name), Err(UnidiscError::InvalidName(_))));
    }

    #[test]
    fn enroll_is_idempotent() {
        let mut catalog = Catalog::new();
        let course = catalog.add_course("CS101", "Intro", 3).expect("add");
        let student = catalog.add_student("Ana").expect("add");

        assert!(catalog.enroll(student, course).expect("enroll"));
        assert!(!catalog.enroll(student, course).expect("enroll"));
        assert_eq!(
            catalog.student(student).map(|s| s.enrolled.clone()),
            Some(vec![course])
        );
    }

    #[test]
    fn enroll_validates_ids() {
        let mut catalog = Catalog::new();
        let student = catalog.add_student("Ana").expect("add");
        assert!(matches!(
            catalog.enroll(student, EntityId(0)),
            Err(UnidiscError::CourseNotFound(0))
        ));

        catalog.add_course("CS101", "Intro", 3).expect("add");
        assert!(matches!(
            catalog.enroll(StudentId(9), EntityId(0)),
            Err(UnidiscError::StudentNotFound(9))
        ));
    }

    #[test]
    fn assignments_overwrite_and_validate() {
        let mut catalog = Catalog::new();
        let course = catalog.add_course("CS101", "Intro", 3).expect("add");
        let f0 = catalog.add_faculty("Turing").expect("add");
        let f1 = catalog.add_faculty("Hopper").expect("add");
        let room = catalog.add_room("A1").expect("add");

        catalog.assign_faculty(course, f0).expect("assign");
        catalog.assign_faculty(course, f1).expect("assign");
        catalog.assign_room(course, room).expect("assign");

        assert_eq!(catalog.faculty_of(course), Some(f1));
        assert_eq!(catalog.room_of(course), Some(room));
        assert!(matches!(
            catalog.assign_room(course, RoomId(3)),
            Err(UnidiscError::RoomNotFound(3))
        ));
        assert!(matches!(
            catalog.assign_faculty(EntityId(4), f0),
            Err(UnidiscError::CourseNotFound(4))
        ));
        assert_eq!(catalog.faculty_of(EntityId(4)), None);
    }
}
