//! # Interactive Menu
//!
//! The numbered menu over a line-oriented input stream.
//!
//! Input is read as whitespace-separated tokens, so several answers may be
//! typed on one line. A token that does not parse as the expected number
//! is reported and the menu is shown again. End of input exits cleanly.

use crate::config::AppConfig;
use crate::display::{
    braced_set, id_list, label_list, marked_ids, order_line, satisfied, yes_no,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use unidisc_core::primitives::MAX_POWER_SET_ELEMENTS;
use unidisc_core::{
    ConsistencyReport, EntityId, FacultyId, MappingProperties, ProofExporter, RelationKind, RoomId,
    Session, StudentId, UnidiscError, set_ops,
};

// =============================================================================
// TOKEN READER
// =============================================================================

/// Splits a buffered reader into whitespace-separated tokens.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

// =============================================================================
// CONTROL FLOW
// =============================================================================

/// Why a menu action stopped early.
enum Interrupt {
    /// A token did not parse as the expected value.
    Invalid(String),
    /// Input is exhausted.
    Eof,
    /// Writing output failed.
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e)
    }
}

type Step = Result<(), Interrupt>;

/// Message shown when a registry rejects an id.
fn rejection(err: &UnidiscError) -> String {
    match err {
        UnidiscError::CourseNotFound(_) => "Invalid course id.".to_string(),
        UnidiscError::StudentNotFound(_) => "Invalid student id.".to_string(),
        UnidiscError::FacultyNotFound(_) => "Invalid faculty id.".to_string(),
        UnidiscError::RoomNotFound(_) => "Invalid room id.".to_string(),
        other => other.to_string(),
    }
}

/// `word` with its first letter in upper case.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Map a typed id onto an index; negative ids land outside every registry.
fn index(raw: i64) -> usize {
    usize::try_from(raw).unwrap_or(usize::MAX)
}

// =============================================================================
// MENU
// =============================================================================

/// The interactive session driver.
pub struct Menu<R, W> {
    session: Session,
    config: AppConfig,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu over `session` reading from `input` and writing to `out`.
    pub fn new(session: Session, config: AppConfig, input: R, out: W) -> Self {
        Self {
            session,
            config,
            input: Tokens::new(input),
            out,
        }
    }

    /// The session as modified so far.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), UnidiscError> {
        self.run_loop()
            .map_err(|e| UnidiscError::IoError(format!("Menu output failed: {}", e)))
    }

    fn run_loop(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to UNIDISC ENGINE")?;
        loop {
            self.print_menu()?;
            let outcome = match self.read::<i64>() {
                Ok(choice) => self.dispatch(choice),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(true) => {}
                Ok(false) | Err(Interrupt::Eof) => return Ok(()),
                Err(Interrupt::Invalid(token)) => {
                    tracing::debug!("Rejected input token {:?}", token);
                    writeln!(self.out, "Invalid input: {}", token)?;
                }
                Err(Interrupt::Io(e)) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "===== MENU =====")?;
        writeln!(self.out, "1 Add Course")?;
        writeln!(self.out, "2 Add Student")?;
        writeln!(self.out, "3 Add Faculty")?;
        writeln!(self.out, "4 Add Room")?;
        writeln!(self.out, "5 Add Prerequisite (A -> B) by course id")?;
        writeln!(self.out, "6 Add Implication (A -> B) by course id")?;
        writeln!(self.out, "7 Assign Faculty to Course")?;
        writeln!(self.out, "8 Assign Room to Course")?;
        writeln!(self.out, "9 Enroll Student in Course")?;
        writeln!(self.out, "10 List Courses/Students/Faculty/Rooms")?;
        writeln!(
            self.out,
            "11 List valid course sequences (topological orders, limited)"
        )?;
        writeln!(self.out, "12 Induction checks (recursive & strong)")?;
        writeln!(self.out, "13 Apply inference engine (implications)")?;
        writeln!(
            self.out,
            "14 Set operations for two students (union/intersection/diff/power set)"
        )?;
        writeln!(self.out, "15 Functions checks for course->faculty mapping")?;
        writeln!(self.out, "16 Consistency report")?;
        writeln!(self.out, "17 Smart recommendations for a student")?;
        writeln!(self.out, "18 Generate & save proof for a course")?;
        writeln!(self.out, "0 Exit")?;
        self.prompt("Enter choice: ")?;
        Ok(())
    }

    /// Run one menu choice. Returns `false` when the menu should close.
    fn dispatch(&mut self, choice: i64) -> Result<bool, Interrupt> {
        match choice {
            0 => {
                writeln!(self.out, "Exiting. Goodbye.")?;
                return Ok(false);
            }
            1 => self.add_course()?,
            2 => self.add_person(PersonKind::Student)?,
            3 => self.add_person(PersonKind::Faculty)?,
            4 => self.add_person(PersonKind::Room)?,
            5 => self.add_prerequisite()?,
            6 => self.add_implication()?,
            7 => self.assign_faculty()?,
            8 => self.assign_room()?,
            9 => self.enroll()?,
            10 => self.list()?,
            11 => self.list_orders()?,
            12 => self.induction_checks()?,
            13 => self.apply_inference()?,
            14 => self.set_operations()?,
            15 => self.mapping_checks()?,
            16 => self.consistency_report()?,
            17 => self.recommendations()?,
            18 => self.proof()?,
            _ => writeln!(self.out, "Unknown choice.")?,
        }
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Input helpers
    // -------------------------------------------------------------------------

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn read<T: FromStr>(&mut self) -> Result<T, Interrupt> {
        let token = self.input.next_token()?.ok_or(Interrupt::Eof)?;
        token.parse().map_err(|_| Interrupt::Invalid(token))
    }

    fn ask<T: FromStr>(&mut self, text: &str) -> Result<T, Interrupt> {
        self.prompt(text)?;
        self.read()
    }

    /// Read ids until `-1`, marking those inside `0..n`.
    fn read_marked(&mut self, n: usize) -> Result<Vec<bool>, Interrupt> {
        let mut marked = vec![false; n];
        loop {
            let raw: i64 = self.read()?;
            if raw == -1 {
                return Ok(marked);
            }
            if let Some(slot) = usize::try_from(raw).ok().and_then(|i| marked.get_mut(i)) {
                *slot = true;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Registration (1-4)
    // -------------------------------------------------------------------------

    fn add_course(&mut self) -> Step {
        let code: String = self.ask("Course code (no spaces): ")?;
        let name: String = self.ask("Course name (no spaces): ")?;
        let credits: u32 = self.ask("Credits: ")?;
        match self.session.add_course(&code, &name, credits) {
            Ok(id) => writeln!(self.out, "Added course id={}", id)?,
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(())
    }

    fn add_person(&mut self, kind: PersonKind) -> Step {
        let name: String = self.ask(kind.prompt())?;
        let catalog = self.session.catalog_mut();
        let added = match kind {
            PersonKind::Student => catalog.add_student(&name).map(|id| id.0),
            PersonKind::Faculty => catalog.add_faculty(&name).map(|id| id.0),
            PersonKind::Room => catalog.add_room(&name).map(|id| id.0),
        };
        match added {
            Ok(id) => writeln!(self.out, "Added {} id={}", kind.noun(), id)?,
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Relations (5-6)
    // -------------------------------------------------------------------------

    fn add_prerequisite(&mut self) -> Step {
        let a: i64 = self.ask("Enter prerequisite course id A (prereq): ")?;
        let b: i64 = self.ask("Enter dependent course id B (dependent): ")?;
        self.add_edge(RelationKind::Prerequisite, a, b)
    }

    fn add_implication(&mut self) -> Step {
        let a: i64 = self.ask("Enter implication A id: ")?;
        let b: i64 = self.ask("Enter implication B id: ")?;
        self.add_edge(RelationKind::Implication, a, b)
    }

    fn add_edge(&mut self, kind: RelationKind, a: i64, b: i64) -> Step {
        let relation = capitalized(kind.name());
        let (Some(from), Some(to)) = (EntityId::from_signed(a), EntityId::from_signed(b)) else {
            writeln!(self.out, "{} rejected: {} -> {}", relation, a, b)?;
            return Ok(());
        };

        let courses = self.session.catalog().course_count();
        if from.index() >= courses || to.index() >= courses {
            tracing::warn!(
                "{} {} -> {} references an unregistered course",
                relation,
                a,
                b
            );
        }

        let recorded = match kind {
            RelationKind::Prerequisite => self.session.add_prereq(from, to),
            RelationKind::Implication => self.session.add_implication(from, to),
        };
        if recorded {
            writeln!(self.out, "{} added: {} -> {}", relation, a, b)?;
        } else {
            writeln!(self.out, "{} rejected: {} -> {}", relation, a, b)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Assignments and enrollment (7-9)
    // -------------------------------------------------------------------------

    fn assign_faculty(&mut self) -> Step {
        let c: i64 = self.ask("Course id: ")?;
        let f: i64 = self.ask("Faculty id: ")?;
        let result = self
            .session
            .catalog_mut()
            .assign_faculty(EntityId(index(c)), FacultyId(index(f)));
        match result {
            Ok(()) => writeln!(self.out, "Assigned faculty {} to course {}", f, c)?,
            Err(e) => writeln!(self.out, "{}", rejection(&e))?,
        }
        Ok(())
    }

    fn assign_room(&mut self) -> Step {
        let c: i64 = self.ask("Course id: ")?;
        let r: i64 = self.ask("Room id: ")?;
        let result = self
            .session
            .catalog_mut()
            .assign_room(EntityId(index(c)), RoomId(index(r)));
        match result {
            Ok(()) => writeln!(self.out, "Assigned room {} to course {}", r, c)?,
            Err(e) => writeln!(self.out, "{}", rejection(&e))?,
        }
        Ok(())
    }

    fn enroll(&mut self) -> Step {
        let s: i64 = self.ask("Student id: ")?;
        let c: i64 = self.ask("Course id: ")?;
        let student = StudentId(index(s));
        if self.session.catalog().student(student).is_none() {
            writeln!(self.out, "Invalid student id.")?;
            return Ok(());
        }
        match self.session.catalog_mut().enroll(student, EntityId(index(c))) {
            Ok(_) => writeln!(self.out, "Enrolled student {} in course {}", s, c)?,
            Err(e) => writeln!(self.out, "{}", rejection(&e))?,
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Listings (10-11)
    // -------------------------------------------------------------------------

    fn list(&mut self) -> Step {
        writeln!(self.out, "1 List Courses")?;
        writeln!(self.out, "2 List Students")?;
        writeln!(self.out, "3 List Faculty")?;
        writeln!(self.out, "4 List Rooms")?;
        let sub: i64 = self.ask("Enter: ")?;

        let catalog = self.session.catalog();
        match sub {
            1 => {
                writeln!(self.out, "Courses:")?;
                for c in catalog.courses() {
                    writeln!(
                        self.out,
                        "{} | {} | {} | credits: {}",
                        c.id, c.code, c.name, c.credits
                    )?;
                }
            }
            2 => {
                writeln!(self.out, "Students:")?;
                for s in catalog.students() {
                    let enrolled = s
                        .enrolled
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",");
                    writeln!(self.out, "{} | {} | enrolled: {}", s.id.0, s.name, enrolled)?;
                }
            }
            3 => {
                writeln!(self.out, "Faculty:")?;
                for f in catalog.faculties() {
                    writeln!(self.out, "{} | {}", f.id.0, f.name)?;
                }
            }
            4 => {
                writeln!(self.out, "Rooms:")?;
                for r in catalog.rooms() {
                    writeln!(self.out, "{} | {}", r.id.0, r.name)?;
                }
            }
            _ => writeln!(self.out, "Unknown option.")?,
        }
        Ok(())
    }

    fn list_orders(&mut self) -> Step {
        let n = self.session.catalog().course_count();
        if n == 0 {
            writeln!(self.out, "No courses available.")?;
            return Ok(());
        }
        if self.session.relations().has_prereq_cycle() {
            writeln!(self.out, "Prereq cycle exists; cannot list orders.")?;
            return Ok(());
        }

        let limit = self.config.order_limit;
        let orders = self.session.enumerator().enumerate(n, limit);
        tracing::debug!(count = orders.len(), limit, "Enumerated orders");

        writeln!(self.out, "Topological orders (show up to {}):", limit)?;
        for order in &orders {
            writeln!(self.out, "{}", order_line(self.session.catalog(), order))?;
        }
        writeln!(self.out, "Total shown: {}", orders.len())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reasoning (12-13)
    // -------------------------------------------------------------------------

    fn induction_checks(&mut self) -> Step {
        let c: i64 = self.ask("Course id for induction check: ")?;
        writeln!(self.out, "Enter completed course ids (-1 to stop):")?;
        let n = self.session.size();
        let completed = self.read_marked(n)?;

        let course = EntityId(index(c));
        let checker = self.session.induction();
        let recursive = checker.check_recursive(course, &completed);
        let strong = checker.check_strong(course, &completed);
        let indirect = checker.list_indirect(course);

        writeln!(self.out, "Recursive check: {}", satisfied(recursive))?;
        writeln!(self.out, "Strong induction check: {}", satisfied(strong))?;
        writeln!(self.out, "Indirect prerequisites: {}", id_list(&indirect))?;
        Ok(())
    }

    fn apply_inference(&mut self) -> Step {
        writeln!(self.out, "Enter currently taken course ids (-1 to stop):")?;
        let n = self.session.size();
        let facts = self.read_marked(n)?;
        let derived = self.session.propagator().propagate(&facts);

        writeln!(self.out, "Facts after applying implications:")?;
        writeln!(
            self.out,
            "{}",
            label_list(self.session.catalog(), &marked_ids(&derived))
        )?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Set algebra and mappings (14-15)
    // -------------------------------------------------------------------------

    fn set_operations(&mut self) -> Step {
        writeln!(self.out, "Enter two student ids:")?;
        let s1: i64 = self.read()?;
        let s2: i64 = self.read()?;

        let catalog = self.session.catalog();
        let (Some(first), Some(second)) = (
            catalog.student(StudentId(index(s1))),
            catalog.student(StudentId(index(s2))),
        ) else {
            writeln!(self.out, "Invalid student ids.")?;
            return Ok(());
        };

        let union = set_ops::union(&first.enrolled, &second.enrolled);
        let intersection = set_ops::intersection(&first.enrolled, &second.enrolled);
        let difference = set_ops::difference(&first.enrolled, &second.enrolled);

        writeln!(self.out, "Union: {}", label_list(catalog, &union))?;
        writeln!(
            self.out,
            "Intersection: {}",
            label_list(catalog, &intersection)
        )?;
        writeln!(
            self.out,
            "Difference (s1 - s2): {}",
            label_list(catalog, &difference)
        )?;

        writeln!(self.out, "Power set of student1 courses (limited):")?;
        match set_ops::power_set(&first.enrolled) {
            Some(subsets) => {
                for subset in &subsets {
                    writeln!(self.out, "{}", braced_set(catalog, subset))?;
                }
            }
            None => writeln!(
                self.out,
                "Too many courses for a power set (limit {}).",
                MAX_POWER_SET_ELEMENTS
            )?,
        }
        Ok(())
    }

    fn mapping_checks(&mut self) -> Step {
        let catalog = self.session.catalog();
        let image: Vec<Option<usize>> = catalog
            .faculty_assignments()
            .iter()
            .map(|f| f.map(|f| f.0))
            .collect();
        let props = MappingProperties::of(&image, catalog.faculties().len());

        writeln!(self.out, "Function? {}", yes_no(props.is_function))?;
        writeln!(self.out, "Injective? {}", yes_no(props.injective))?;
        writeln!(self.out, "Surjective? {}", yes_no(props.surjective))?;
        writeln!(self.out, "Bijective? {}", yes_no(props.bijective))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reports (16-18)
    // -------------------------------------------------------------------------

    fn consistency_report(&mut self) -> Step {
        let report = ConsistencyReport::build(&self.session, self.config.overload_threshold);
        write!(self.out, "{}", report.render(self.session.catalog()))?;
        Ok(())
    }

    fn recommendations(&mut self) -> Step {
        let sid: i64 = self.ask("Enter student id for recommendations: ")?;
        let Ok(completed) = self.session.completion_for(StudentId(index(sid))) else {
            writeln!(self.out, "Invalid student id.")?;
            return Ok(());
        };

        let suggestions = self
            .session
            .recommender()
            .suggest(&completed, self.config.suggestion_limit);
        writeln!(self.out, "Recommended next courses:")?;
        writeln!(
            self.out,
            "{}",
            label_list(self.session.catalog(), &suggestions)
        )?;
        Ok(())
    }

    fn proof(&mut self) -> Step {
        let c: i64 = self.ask("Enter course id to generate proof: ")?;
        writeln!(self.out, "Enter completed course ids (-1 to stop):")?;
        let n = self.session.size();
        let completed = self.read_marked(n)?;

        let text = self
            .session
            .proof_exporter()
            .generate_proof(EntityId(index(c)), &completed);
        write!(self.out, "Proof generated:\n{}", text)?;

        let fname: String = self.ask("Save to file? Enter filename or 'no': ")?;
        if fname != "no" {
            match ProofExporter::write_proof(&fname, &text) {
                Ok(()) => {
                    tracing::info!("Proof written to {}", fname);
                    writeln!(self.out, "Saved.")?;
                }
                Err(e) => {
                    tracing::warn!("Failed to save proof: {}", e);
                    writeln!(self.out, "Failed to save.")?;
                }
            }
        }
        Ok(())
    }
}

/// Registries filled by options 2-4.
#[derive(Clone, Copy)]
enum PersonKind {
    Student,
    Faculty,
    Room,
}

impl PersonKind {
    fn prompt(self) -> &'static str {
        match self {
            PersonKind::Student => "Student name (no spaces): ",
            PersonKind::Faculty => "Faculty name (no spaces): ",
            PersonKind::Room => "Room name (no spaces): ",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            PersonKind::Student => "student",
            PersonKind::Faculty => "faculty",
            PersonKind::Room => "room",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
