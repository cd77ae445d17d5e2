//! # Core Type Definitions
//!
//! This module contains the identifier and error types shared by every
//! layer of the UNIDISC engine:
//! - Course identifiers used by the relation engine (`EntityId`)
//! - Bookkeeping identifiers (`StudentId`, `FacultyId`, `RoomId`)
//! - Relation selector (`RelationKind`)
//! - Error types (`UnidiscError`)
//!
//! ## Determinism Guarantees
//!
//! All identifiers are dense integers assigned in insertion order and
//! implement `Ord`, so every listing produced by the engine is ascending.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIERS
// =============================================================================

/// Identifier of a course inside the relation space.
///
/// Ids are dense: a relation space of size `n` contains exactly the ids
/// `0..n`. The id is the only identity the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub usize);

impl EntityId {
    /// Convert a raw signed id (as typed by a user) into an `EntityId`.
    ///
    /// Negative ids have no meaning in the relation space and yield `None`.
    #[must_use]
    pub fn from_signed(raw: i64) -> Option<Self> {
        usize::try_from(raw).ok().map(Self)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a registered student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub usize);

/// Identifier of a registered faculty member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacultyId(pub usize);

/// Identifier of a registered room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

// =============================================================================
// RELATION KIND
// =============================================================================

/// Selects one of the two relations held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    /// `a -> b`: a must be completed before b.
    Prerequisite,
    /// `a -> b`: fact a entails fact b.
    Implication,
}

impl RelationKind {
    /// Human-readable relation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::Prerequisite => "prerequisite",
            RelationKind::Implication => "implication",
        }
    }
}

// =============================================================================
// COMPLETION VECTORS
// =============================================================================

/// Read a completion/fact vector at `id`.
///
/// Positions beyond the vector's length are unknown and read as `false`.
#[inline]
#[must_use]
pub fn is_marked(completed: &[bool], id: usize) -> bool {
    completed.get(id).copied().unwrap_or(false)
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the UNIDISC system.
///
/// The relation engine itself never returns errors: out-of-range ids
/// degrade to neutral values. These variants cover the bookkeeping layer,
/// file export and configuration.
#[derive(Debug, Error)]
pub enum UnidiscError {
    /// The referenced course is not registered.
    #[error("Course not found: {0}")]
    CourseNotFound(usize),

    /// The referenced student is not registered.
    #[error("Student not found: {0}")]
    StudentNotFound(usize),

    /// The referenced faculty member is not registered.
    #[error("Faculty not found: {0}")]
    FacultyNotFound(usize),

    /// The referenced room is not registered.
    #[error("Room not found: {0}")]
    RoomNotFound(usize),

    /// A name or course code is empty or too long.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// User-supplied input could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A scenario file could not be read or applied.
    #[error("Scenario error: {0}")]
    ScenarioError(String),
}

// =============================================================================
// TESTS
// =============================================================================
