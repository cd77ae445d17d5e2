//! # Mapping Properties
//!
//! Function-property checks for an assignment from courses to a codomain
//! (in practice, courses to faculty).
//!
//! The domain is the list of course ids `0..image.len()`; `image[i]` is the
//! codomain element assigned to course `i`, or `None` when unassigned.
//!
//! A mapping with any unassigned course is not a function, and then no
//! other property holds either. Unassigned courses are never compared to
//! each other as if they shared a target.

use serde::{Deserialize, Serialize};

/// Properties of a course assignment viewed as a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingProperties {
    /// Every course is mapped to a valid codomain element.
    pub is_function: bool,
    /// A function with no codomain element used twice.
    pub injective: bool,
    /// A function that uses every codomain element.
    pub surjective: bool,
    /// Both injective and surjective.
    pub bijective: bool,
}

impl MappingProperties {
    /// Classify `image` against a codomain of `codomain_size` elements.
    #[must_use]
    pub fn of(image: &[Option<usize>], codomain_size: usize) -> Self {
        let is_function = image
            .iter()
            .all(|target| target.is_some_and(|t| t < codomain_size));
        if !is_function {
            return Self::default();
        }

        let mut seen = vec![false; codomain_size];
        let mut injective = true;
        for &target in image.iter().flatten() {
            if seen[target] {
                injective = false;
            }
            seen[target] = true;
        }
        let surjective = codomain_size > 0 && seen.iter().all(|s| *s);

        Self {
            is_function,
            injective,
            surjective,
            bijective: injective && surjective,
        }
    }
}
