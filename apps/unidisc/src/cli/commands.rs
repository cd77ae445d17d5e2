//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::AppConfig;
use crate::display::{id_list, label_list, marked_ids, order_line, satisfied};
use crate::menu::Menu;
use std::path::{Path, PathBuf};
use unidisc_core::{ConsistencyReport, EntityId, ProofExporter, Session, StudentId, UnidiscError};

// =============================================================================
// ARGUMENT HELPERS
// =============================================================================

/// Parse a comma-separated list of course ids. Blank entries are skipped.
pub fn parse_id_list(text: &str) -> Result<Vec<EntityId>, UnidiscError> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map(EntityId)
                .map_err(|_| UnidiscError::InvalidInput(format!("Not a course id: '{}'", part)))
        })
        .collect()
}

/// Validate an output path before writing.
///
/// The parent directory must exist; the returned path joins its canonical
/// form with the original file name.
fn validate_output_path(path: &Path) -> Result<PathBuf, UnidiscError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        UnidiscError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(UnidiscError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| UnidiscError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Reject course ids outside the relation space.
fn require_course(session: &Session, course: usize) -> Result<EntityId, UnidiscError> {
    if course < session.size() {
        Ok(EntityId(course))
    } else {
        Err(UnidiscError::CourseNotFound(course))
    }
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// MENU COMMAND
// =============================================================================

/// Run the interactive menu on stdin/stdout.
pub fn cmd_menu(session: Session, config: AppConfig) -> Result<(), UnidiscError> {
    tracing::debug!("Starting interactive menu");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(session, config, stdin.lock(), stdout.lock()).run()
}

// =============================================================================
// REPORT COMMAND
// =============================================================================

/// Show the consistency report.
pub fn cmd_report(
    session: &Session,
    config: &AppConfig,
    json_mode: bool,
) -> Result<(), UnidiscError> {
    let report = ConsistencyReport::build(session, config.overload_threshold);
    tracing::info!(clean = report.is_clean(), "Consistency report built");

    if json_mode {
        let output = serde_json::json!({
            "clean": report.is_clean(),
            "overload_threshold": config.overload_threshold,
            "report": report
        });
        print_json(&output);
        return Ok(());
    }

    print!("{}", report.render(session.catalog()));
    Ok(())
}

// =============================================================================
// ORDERS COMMAND
// =============================================================================

/// List valid course orders, at most `limit` of them.
pub fn cmd_orders(session: &Session, limit: usize, json_mode: bool) -> Result<(), UnidiscError> {
    let n = session.catalog().course_count();
    let cycle = session.relations().has_prereq_cycle();
    let orders = if n == 0 || cycle {
        Vec::new()
    } else {
        session.enumerator().enumerate(n, limit)
    };

    if json_mode {
        let codes: Vec<Vec<String>> = orders
            .iter()
            .map(|order| {
                order
                    .iter()
                    .map(|id| session.catalog().course_label(*id))
                    .collect()
            })
            .collect();
        let output = serde_json::json!({
            "course_count": n,
            "cycle": cycle,
            "limit": limit,
            "orders": orders,
            "codes": codes
        });
        print_json(&output);
        return Ok(());
    }

    if n == 0 {
        println!("No courses available.");
        return Ok(());
    }
    if cycle {
        println!("Prereq cycle exists; cannot list orders.");
        return Ok(());
    }

    println!("Topological orders (show up to {}):", limit);
    for order in &orders {
        println!("{}", order_line(session.catalog(), order));
    }
    println!("Total shown: {}", orders.len());
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Run both induction checks and list the indirect prerequisites.
pub fn cmd_check(
    session: &Session,
    course: usize,
    completed: &str,
    json_mode: bool,
) -> Result<(), UnidiscError> {
    let course = require_course(session, course)?;
    let completed = session.completion_from_ids(&parse_id_list(completed)?);

    let checker = session.induction();
    let recursive = checker.check_recursive(course, &completed);
    let strong = checker.check_strong(course, &completed);
    let indirect = checker.list_indirect(course);

    if json_mode {
        let output = serde_json::json!({
            "course": course,
            "code": session.catalog().course_label(course),
            "recursive": recursive,
            "strong": strong,
            "indirect": indirect
        });
        print_json(&output);
        return Ok(());
    }

    println!("Course: {}", session.catalog().course_label(course));
    println!("Recursive check: {}", satisfied(recursive));
    println!("Strong induction check: {}", satisfied(strong));
    println!("Indirect prerequisites: {}", id_list(&indirect));
    Ok(())
}

// =============================================================================
// PROPAGATE COMMAND
// =============================================================================

/// Apply implications to the given facts.
pub fn cmd_propagate(session: &Session, facts: &str, json_mode: bool) -> Result<(), UnidiscError> {
    let facts = session.completion_from_ids(&parse_id_list(facts)?);
    let derived = marked_ids(&session.propagator().propagate(&facts));

    if json_mode {
        let output = serde_json::json!({
            "facts": derived,
            "codes": label_list(session.catalog(), &derived)
        });
        print_json(&output);
        return Ok(());
    }

    println!("Facts after applying implications:");
    println!("{}", label_list(session.catalog(), &derived));
    Ok(())
}

// =============================================================================
// RECOMMEND COMMAND
// =============================================================================

/// Recommend next courses from a student's enrollments.
pub fn cmd_recommend(
    session: &Session,
    config: &AppConfig,
    student: usize,
    json_mode: bool,
) -> Result<(), UnidiscError> {
    let completed = session.completion_for(StudentId(student))?;
    let suggestions = session
        .recommender()
        .suggest(&completed, config.suggestion_limit);

    if json_mode {
        let output = serde_json::json!({
            "student": student,
            "limit": config.suggestion_limit,
            "recommendations": suggestions,
            "codes": label_list(session.catalog(), &suggestions)
        });
        print_json(&output);
        return Ok(());
    }

    println!("Recommended next courses:");
    println!("{}", label_list(session.catalog(), &suggestions));
    Ok(())
}

// =============================================================================
// PROOF COMMAND
// =============================================================================

/// Generate a proof, printing it and optionally writing it to `output`.
pub fn cmd_proof(
    session: &Session,
    course: usize,
    completed: &str,
    output: Option<&Path>,
    json_mode: bool,
) -> Result<(), UnidiscError> {
    let course = require_course(session, course)?;
    let completed = session.completion_from_ids(&parse_id_list(completed)?);

    let proof = session.proof_exporter().build(course, &completed);
    let text = proof.render(|id| session.catalog().course_label(id));

    let written = match output {
        Some(path) => {
            let validated = validate_output_path(path)?;
            ProofExporter::write_proof(&validated, &text)?;
            tracing::info!("Proof written to {:?}", validated);
            Some(validated)
        }
        None => None,
    };

    if json_mode {
        let steps: Vec<serde_json::Value> = proof
            .steps
            .iter()
            .flatten()
            .map(|step| {
                serde_json::json!({
                    "prerequisite": step.prerequisite,
                    "code": session.catalog().course_label(step.prerequisite),
                    "completed": step.completed
                })
            })
            .collect();
        let output = serde_json::json!({
            "course": course,
            "satisfied": proof.is_satisfied(),
            "steps": steps,
            "text": text,
            "written_to": written.map(|p| p.to_string_lossy().into_owned())
        });
        print_json(&output);
        return Ok(());
    }

    print!("{}", text);
    if let Some(path) = written {
        println!("Saved to {:?}", path);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
