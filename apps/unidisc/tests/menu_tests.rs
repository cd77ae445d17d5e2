//! # Interactive Menu Tests
//!
//! Drive the menu with scripted input and check the printed transcript.

use std::io::Cursor;
use unidisc::{AppConfig, Menu};
use unidisc_core::{EntityId, Session, StudentId};

/// Run `script` against `session`; return the final session and the transcript.
fn run_script(session: Session, script: &str) -> (Session, String) {
    run_with_config(session, AppConfig::default(), script)
}

fn run_with_config(session: Session, config: AppConfig, script: &str) -> (Session, String) {
    let mut out = Vec::new();
    let session = {
        let mut menu = Menu::new(session, config, Cursor::new(script.as_bytes()), &mut out);
        menu.run().expect("menu run");
        menu.session().clone()
    };
    (session, String::from_utf8(out).expect("utf8"))
}

/// CS101 -> CS201 -> CS301.
fn chain() -> Session {
    let mut session = Session::new();
    let a = session.add_course("CS101", "Intro", 3).expect("add");
    let b = session.add_course("CS201", "Structures", 3).expect("add");
    let c = session.add_course("CS301", "Algorithms", 4).expect("add");
    session.add_prereq(a, b);
    session.add_prereq(b, c);
    session
}

// =============================================================================
// SESSION LIFECYCLE
// =============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn exit_prints_goodbye() {
        let (_, out) = run_script(Session::new(), "0\n");
        assert!(out.starts_with("Welcome to UNIDISC ENGINE"));
        assert!(out.contains("===== MENU ====="));
        assert!(out.contains("Exiting. Goodbye."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_, out) = run_script(Session::new(), "");
        assert!(out.contains("Enter choice: "));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn malformed_number_reported_and_menu_continues() {
        let (_, out) = run_script(Session::new(), "abc\n0\n");
        assert!(out.contains("Invalid input: abc"));
        assert!(out.contains("Exiting. Goodbye."));
    }

    #[test]
    fn unknown_choice() {
        let (_, out) = run_script(Session::new(), "42\n0\n");
        assert!(out.contains("Unknown choice."));
    }

    #[test]
    fn end_of_input_mid_prompt_exits() {
        let (session, _) = run_script(Session::new(), "1 CS101 Intro\n");
        assert_eq!(session.catalog().course_count(), 0);
    }
}

// =============================================================================
// REGISTRATION AND RELATIONS
// =============================================================================

mod registration {
    use super::*;

    #[test]
    fn add_courses_and_prerequisite() {
        let script = "1\nCS101\nIntro\n3\n1 CS201 Algorithms 4\n5\n0\n1\n0\n";
        let (session, out) = run_script(Session::new(), script);

        assert!(out.contains("Added course id=0"));
        assert!(out.contains("Added course id=1"));
        assert!(out.contains("Prerequisite added: 0 -> 1"));
        assert_eq!(session.size(), 2);
        assert!(session.relations().get_prereq(EntityId(0), EntityId(1)));
    }

    #[test]
    fn negative_edge_rejected() {
        let (session, out) = run_script(chain(), "6 -1 0\n0\n");
        assert!(out.contains("Implication rejected: -1 -> 0"));
        assert_eq!(session.relations().edge_count(unidisc_core::RelationKind::Implication), 0);
    }

    #[test]
    fn edge_beyond_catalog_extends_relations() {
        let (session, out) = run_script(chain(), "5 2 5\n0\n");
        assert!(out.contains("Prerequisite added: 2 -> 5"));
        assert_eq!(session.size(), 6);
        assert_eq!(session.catalog().course_count(), 3);
    }

    #[test]
    fn people_and_rooms() {
        let script = "2 Ana\n3 Turing\n4 A1\n10 2\n10 3\n10 4\n0\n";
        let (_, out) = run_script(Session::new(), script);
        assert!(out.contains("Added student id=0"));
        assert!(out.contains("Added faculty id=0"));
        assert!(out.contains("Added room id=0"));
        assert!(out.contains("0 | Ana | enrolled: "));
        assert!(out.contains("0 | Turing"));
        assert!(out.contains("0 | A1"));
    }

    #[test]
    fn enrollment_validates_ids() {
        let script = "9 0 0\n2 Ana\n9 0 7\n9 0 2\n9 0 0\n10 2\n0\n";
        let (session, out) = run_script(chain(), script);
        assert!(out.contains("Invalid student id."));
        assert!(out.contains("Invalid course id."));
        assert!(out.contains("Enrolled student 0 in course 2"));
        assert!(out.contains("0 | Ana | enrolled: 2,0"));
        assert_eq!(
            session.completion_for(StudentId(0)).expect("student"),
            vec![true, false, true]
        );
    }

    #[test]
    fn assignments_validate_ids() {
        let script = "7 0 0\n3 Turing\n7 0 0\n8 0 0\n4 A1\n8 9 0\n8 0 0\n0\n";
        let (session, out) = run_script(chain(), script);
        assert!(out.contains("Invalid faculty id."));
        assert!(out.contains("Assigned faculty 0 to course 0"));
        assert!(out.contains("Invalid room id."));
        assert!(out.contains("Invalid course id."));
        assert!(out.contains("Assigned room 0 to course 0"));
        assert!(session.catalog().room_of(EntityId(0)).is_some());
    }

    #[test]
    fn list_courses() {
        let (_, out) = run_script(chain(), "10 1\n10 9\n0\n");
        assert!(out.contains("Courses:"));
        assert!(out.contains("2 | CS301 | Algorithms | credits: 4"));
        assert!(out.contains("Unknown option."));
    }
}

// =============================================================================
// REASONING
// =============================================================================

mod reasoning {
    use super::*;

    #[test]
    fn orders_listed_with_codes() {
        let (_, out) = run_script(chain(), "11\n0\n");
        assert!(out.contains("Topological orders (show up to 200):"));
        assert!(out.contains("CS101 -> CS201 -> CS301"));
        assert!(out.contains("Total shown: 1"));
    }

    #[test]
    fn orders_respect_configured_limit() {
        let mut session = Session::new();
        for code in ["A", "B", "C"] {
            session.add_course(code, code, 1).expect("add");
        }
        let config = AppConfig {
            order_limit: 4,
            ..AppConfig::default()
        };
        let (_, out) = run_with_config(session, config, "11\n0\n");
        assert!(out.contains("Topological orders (show up to 4):"));
        assert!(out.contains("A -> B -> C"));
        assert!(out.contains("Total shown: 4"));
    }

    #[test]
    fn orders_refused_without_courses() {
        let (_, out) = run_script(Session::new(), "11\n0\n");
        assert!(out.contains("No courses available."));
    }

    #[test]
    fn orders_refused_on_cycle() {
        let (_, out) = run_script(chain(), "5 2 0\n11\n0\n");
        assert!(out.contains("Prereq cycle exists; cannot list orders."));
        assert!(!out.contains("Total shown"));
    }

    #[test]
    fn induction_checks_report_both_rules() {
        let (_, out) = run_script(chain(), "12 2\n0 1 -1\n0\n");
        assert!(out.contains("Enter completed course ids (-1 to stop):"));
        assert!(out.contains("Recursive check: NOT SATISFIED"));
        assert!(out.contains("Strong induction check: SATISFIED"));
        assert!(out.contains("Indirect prerequisites: 0 1"));
    }

    #[test]
    fn induction_ignores_out_of_range_completions() {
        let (_, out) = run_script(chain(), "12 1\n9 -5 -1\n0\n");
        assert!(out.contains("Strong induction check: NOT SATISFIED"));
    }

    #[test]
    fn inference_applies_implications() {
        let (_, out) = run_script(chain(), "6 0 1\n6 1 2\n13\n0 -1\n0\n");
        assert!(out.contains("Facts after applying implications:"));
        assert!(out.contains("CS101 CS201 CS301"));
    }
}

// =============================================================================
// SETS, MAPPINGS AND REPORTS
// =============================================================================

mod reports {
    use super::*;

    fn with_students() -> Session {
        let mut session = chain();
        let catalog = session.catalog_mut();
        let ana = catalog.add_student("Ana").expect("add");
        let ben = catalog.add_student("Ben").expect("add");
        catalog.enroll(ana, EntityId(0)).expect("enroll");
        catalog.enroll(ana, EntityId(1)).expect("enroll");
        catalog.enroll(ben, EntityId(1)).expect("enroll");
        session
    }

    #[test]
    fn set_operations_for_two_students() {
        let (_, out) = run_script(with_students(), "14 0 1\n0\n");
        assert!(out.contains("Union: CS101 CS201"));
        assert!(out.contains("Intersection: CS201"));
        assert!(out.contains("Difference (s1 - s2): CS101"));
        assert!(out.contains("Power set of student1 courses (limited):"));
        assert!(out.contains("{}\n{CS101}\n{CS201}\n{CS101,CS201}\n"));
    }

    #[test]
    fn set_operations_reject_unknown_student() {
        let (_, out) = run_script(with_students(), "14 0 5\n0\n");
        assert!(out.contains("Invalid student ids."));
    }

    #[test]
    fn mapping_checks() {
        let script = "3 Turing\n3 Hopper\n3 Lovelace\n7 0 2\n7 1 0\n15\n7 2 1\n15\n0\n";
        let (_, out) = run_script(chain(), script);
        // First run: course 2 unassigned, second: a bijection.
        assert!(out.contains("Function? No\nInjective? No\nSurjective? No\nBijective? No"));
        assert!(out.contains("Function? Yes\nInjective? Yes\nSurjective? Yes\nBijective? Yes"));
    }

    #[test]
    fn consistency_report() {
        let (_, out) = run_script(with_students(), "16\n0\n");
        assert!(out.contains("=== Consistency Report ==="));
        assert!(out.contains("Prerequisite relation appears acyclic."));
        assert!(out.contains("Student Ben missing prereq CS101 for CS201."));
        assert!(out.contains("=== End Report ==="));
    }

    #[test]
    fn consistency_report_flags_overload() {
        let config = AppConfig {
            overload_threshold: 1,
            ..AppConfig::default()
        };
        let (_, out) = run_with_config(with_students(), config, "16\n0\n");
        assert!(out.contains("Warning: student Ana enrolled in 2 courses (possible overload)."));
    }

    #[test]
    fn recommendations() {
        let (_, out) = run_script(with_students(), "17 0\n17 9\n0\n");
        assert!(out.contains("Recommended next courses:\nCS301\n"));
        assert!(out.contains("Invalid student id."));
    }

    #[test]
    fn proof_shown_and_not_saved() {
        let (_, out) = run_script(chain(), "18 2\n0 -1\nno\n0\n");
        assert!(out.contains("Proof generated:\nProof for prerequisites of CS301."));
        assert!(out.contains("- Indirect prerequisite: CS101 : COMPLETED."));
        assert!(out.contains("- Indirect prerequisite: CS201 : MISSING."));
        assert!(out.contains("Conclusion: Prerequisites NOT satisfied for CS301."));
        assert!(!out.contains("Saved."));
    }

    #[test]
    fn proof_saved_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("proof.txt");
        let script = format!("18 0\n-1\n{}\n0\n", path.display());

        let (_, out) = run_script(chain(), &script);
        assert!(out.contains("Saved."));

        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(
            text,
            "Proof for prerequisites of CS101.\n\
             - No prerequisites found.\n\
             Conclusion: All prerequisites satisfied for CS101.\n"
        );
    }

    #[test]
    fn proof_save_failure_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("proof.txt");
        let script = format!("18 0\n-1\n{}\n0\n", path.display());

        let (_, out) = run_script(chain(), &script);
        assert!(out.contains("Failed to save."));
    }
}
