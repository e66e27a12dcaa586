//! Ordered threshold tables.
//!
//! Scoring and classification are both "first matching band wins" lookups.
//! Each table is a slice of [`Band`]s evaluated in order; the first band whose
//! [`Bound`] contains the input yields its value.

/// The range test a band applies to its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Matches `x < limit`.
    Below(f64),
    /// Matches `min <= x <= max`.
    Within { min: f64, max: f64 },
}

impl Bound {
    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        match self {
            Self::Below(limit) => x < limit,
            Self::Within { min, max } => (min..=max).contains(&x),
        }
    }
}

/// One row of an ordered threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<V> {
    pub bound: Bound,
    pub value: V,
}

impl<V> Band<V> {
    pub const fn below(limit: f64, value: V) -> Self {
        Self {
            bound: Bound::Below(limit),
            value,
        }
    }

    pub const fn within(min: f64, max: f64, value: V) -> Self {
        Self {
            bound: Bound::Within { min, max },
            value,
        }
    }
}

/// Return the value of the first band containing `x`, or `None` if no band does.
#[must_use]
pub fn first_match<V: Copy>(bands: &[Band<V>], x: f64) -> Option<V> {
    bands
        .iter()
        .find(|band| band.bound.contains(x))
        .map(|band| band.value)
}
