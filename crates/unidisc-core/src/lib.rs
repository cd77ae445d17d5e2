//! # unidisc-core
//!
//! The deterministic relation engine for UNIDISC - THE LOGIC.
//!
//! This crate models a finite set of courses connected by two relations
//! (prerequisite and implication) and reasons over them: transitive
//! closure, cycle detection, bounded enumeration of valid course orders,
//! induction-style satisfaction checks and implication propagation.
//!
//! ## Layers
//!
//! - Engine: `relations`, `closure`, `ordering`, `induction`, `inference`
//! - Advisory: `recommend`, `proof`
//! - Bookkeeping: `catalog`, `session`, `set_ops`, `mapping`, `consistency`
//!
//! ## Architectural Constraints
//!
//! - Ids outside the relation space never panic; they yield `false`,
//!   an empty list, or a no-op.
//! - Closures are recomputed on every query, never cached.
//! - Ordering enumeration always runs under an explicit cap.
//! - No async, no network, no logging: the application layer owns those.
//!
//! ## Example
//!
//! ```
//! use unidisc_core::{EntityId, Session};
//!
//! let mut session = Session::new();
//! let intro = session.add_course("CS101", "Intro", 3).expect("add");
//! let algo = session.add_course("CS201", "Algorithms", 3).expect("add");
//! session.add_prereq(intro, algo);
//!
//! assert_eq!(session.enumerator().enumerate(2, 10), vec![vec![EntityId(0), EntityId(1)]]);
//! assert!(session.induction().check_strong(algo, &[true, false]));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod closure;
pub mod consistency;
pub mod induction;
pub mod inference;
pub mod mapping;
pub mod ordering;
pub mod primitives;
pub mod proof;
pub mod recommend;
pub mod relations;
pub mod session;
pub mod set_ops;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EntityId, FacultyId, RelationKind, RoomId, StudentId, UnidiscError, is_marked};

// =============================================================================
// RE-EXPORTS: Relation Engine
// =============================================================================

pub use closure::ClosureEngine;
pub use induction::InductionChecker;
pub use inference::ImplicationPropagator;
pub use ordering::TopoEnumerator;
pub use relations::{BoolMatrix, RelationStore};

// =============================================================================
// RE-EXPORTS: Advisory and Bookkeeping
// =============================================================================

pub use catalog::{Catalog, Course, Faculty, Room, Student};
pub use consistency::{ConsistencyReport, MissingPrerequisite, Overload, RoomConflict};
pub use mapping::MappingProperties;
pub use proof::{Proof, ProofExporter, ProofStep};
pub use recommend::Recommender;
pub use session::Session;
