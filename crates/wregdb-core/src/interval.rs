//! # Frequency Intervals
//!
//! Closed numeric ranges `[start, end]` in MHz. Every frequency-range
//! decision in the crate (band admission, channel placement) reduces to
//! the operations defined here.
//!
//! Optional `other` arguments model an absent neighbour: union with nothing
//! is the identity, intersection with nothing is empty, and nothing overlaps
//! nothing.

use serde::{Deserialize, Serialize};

/// A closed range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound (inclusive).
    pub start: f64,
    /// Upper bound (inclusive).
    pub end: f64,
}

/// Result of [`Interval::overlaps`].
///
/// The discriminants are stable and match the numeric codes consumers
/// expect (`0` disjoint, `1` overlapping, `2` touching).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Overlap {
    /// The ranges share no point.
    Disjoint = 0,
    /// The ranges share more than a single endpoint.
    Overlapping = 1,
    /// The ranges share exactly one endpoint.
    Touching = 2,
}

impl Interval {
    /// Create an interval. Callers are responsible for `start <= end`; an
    /// inverted interval contains no point.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the interval.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `value` lies within the closed range.
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether `other` lies entirely within this interval. An absent
    /// interval is contained in everything.
    pub fn contains_interval(&self, other: Option<&Interval>) -> bool {
        match other {
            None => true,
            Some(o) => self.start <= o.start && o.end <= self.end,
        }
    }

    /// Smallest interval covering both ranges.
    pub fn union(&self, other: Option<&Interval>) -> Interval {
        match other {
            None => *self,
            Some(o) => Interval {
                start: self.start.min(o.start),
                end: self.end.max(o.end),
            },
        }
    }

    /// Common part of both ranges, or `None` if they are disjoint.
    pub fn intersection(&self, other: Option<&Interval>) -> Option<Interval> {
        let o = other?;
        if self.is_disjoint(o) {
            return None;
        }
        Some(Interval {
            start: self.start.max(o.start),
            end: self.end.min(o.end),
        })
    }

    /// Three-valued overlap test.
    pub fn overlaps(&self, other: Option<&Interval>) -> Overlap {
        let Some(o) = other else {
            return Overlap::Disjoint;
        };
        if self.is_disjoint(o) {
            Overlap::Disjoint
        } else if o.end == self.start || self.end == o.start {
            Overlap::Touching
        } else {
            Overlap::Overlapping
        }
    }

    fn is_disjoint(&self, o: &Interval) -> bool {
        o.end < self.start || self.end < o.start
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
