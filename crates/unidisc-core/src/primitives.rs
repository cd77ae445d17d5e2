//! # Engine Primitives
//!
//! Hardcoded runtime constants for the UNIDISC engine.
//!
//! These limits are compiled into the binary. The application layer may
//! choose smaller values through configuration but never larger ones.

/// Default maximum number of orderings produced by one enumeration.
///
/// Enumeration of linear orderings is combinatorially explosive; this cap
/// is the engine's only bound on that work.
pub const DEFAULT_ORDER_LIMIT: usize = 200;

/// Default maximum number of course suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Default number of enrollments above which a student is flagged as overloaded.
pub const DEFAULT_OVERLOAD_THRESHOLD: usize = 6;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum size of the relation space.
///
/// Matrices are dense (`n * n` cells per relation), so a write referring to
/// an id at or beyond this limit is rejected instead of auto-extending.
pub const MAX_ENTITIES: usize = 4096;

/// Maximum number of elements accepted by `set_ops::power_set`.
///
/// `2^20` subsets is the largest power set the engine will materialize.
pub const MAX_POWER_SET_ELEMENTS: usize = 20;

/// Maximum length for names and course codes.
pub const MAX_NAME_LENGTH: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_limit_is_two_hundred() {
        assert_eq!(DEFAULT_ORDER_LIMIT, 200);
    }

    #[test]
    fn power_set_limit_fits_in_mask() {
        assert!(MAX_POWER_SET_ELEMENTS < usize::BITS as usize);
    }
}
