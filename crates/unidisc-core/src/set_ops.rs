//! # Set Operations
//!
//! List-backed set algebra used to compare enrollments.
//!
//! Inputs are treated as sets; results keep the order in which elements
//! first appear in the left operand (then the right, for `union`).

use crate::primitives::MAX_POWER_SET_ELEMENTS;

/// Elements of `a`, followed by elements of `b` not already present.
#[must_use]
pub fn union<T: Copy + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = a.to_vec();
    for &x in b {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

/// Elements of `a` that are also in `b`.
#[must_use]
pub fn intersection<T: Copy + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().copied().filter(|x| b.contains(x)).collect()
}

/// Elements of `a` that are not in `b`.
#[must_use]
pub fn difference<T: Copy + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().copied().filter(|x| !b.contains(x)).collect()
}

/// All subsets of `a`, ordered by bitmask (bit `i` selects `a[i]`).
///
/// Returns `None` when `a` has more than `MAX_POWER_SET_ELEMENTS` elements.
#[must_use]
pub fn power_set<T: Copy>(a: &[T]) -> Option<Vec<Vec<T>>> {
    if a.len() > MAX_POWER_SET_ELEMENTS {
        return None;
    }
    let total = 1usize << a.len();
    let subsets = (0..total)
        .map(|mask| {
            a.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &x)| x)
                .collect()
        })
        .collect();
    Some(subsets)
}
