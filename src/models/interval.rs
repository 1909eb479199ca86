//! Minute-of-day intervals and the overlap predicate.
//!
//! # Time Model
//! All times are minutes since midnight, nominally `0..1440`.
//! An interval whose `to` is smaller than its `from` wraps past
//! midnight into the next day.
//!
//! # Overlap
//! Intervals are half-open: `[from, to)`. Touching endpoints do not
//! overlap, and a zero-length interval (`from == to`) never overlaps
//! anything. Zero-length items are markers, not occupants.
//!
//! The part of an overnight interval that runs past midnight also
//! covers the early minutes of the same day view, so `23:00–01:00`
//! overlaps `00:00–00:30`.

use serde::{Deserialize, Serialize};

/// Minutes since midnight.
pub type Minutes = i32;

/// Item identifier, unique within one layout call.
pub type ItemId = i64;

/// Length of a day in minutes.
pub const MINUTES_IN_DAY: Minutes = 1440;

/// Anything that occupies a minute-of-day interval and has a stable id.
///
/// Implemented by [`Event`](super::Event), [`DisabledBlock`](super::DisabledBlock)
/// and [`Interval`]; the layout algorithms are generic over it.
pub trait Timed {
    /// Stable identifier of the item.
    fn id(&self) -> ItemId;
    /// Start minute (inclusive).
    fn from(&self) -> Minutes;
    /// End minute (exclusive). May be `< from` for overnight items.
    fn to(&self) -> Minutes;

    /// The item's span after overnight normalization.
    #[inline]
    fn span(&self) -> TimeSpan {
        TimeSpan::normalized(self.from(), self.to())
    }
}

/// A bare interval with an id and no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Item identifier.
    pub id: ItemId,
    /// Start minute (inclusive).
    pub from: Minutes,
    /// End minute (exclusive).
    pub to: Minutes,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(id: ItemId, from: Minutes, to: Minutes) -> Self {
        Self { id, from, to }
    }
}

impl Timed for Interval {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from(&self) -> Minutes {
        self.from
    }

    fn to(&self) -> Minutes {
        self.to
    }
}

/// A normalized half-open span `[start, end)`.
///
/// After normalization `end >= start`; overnight spans extend past
/// [`MINUTES_IN_DAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start minute (inclusive).
    pub start: Minutes,
    /// End minute (exclusive).
    pub end: Minutes,
}

impl TimeSpan {
    /// Builds a span, wrapping `end` into the next day when `end < start`.
    pub fn normalized(start: Minutes, end: Minutes) -> Self {
        let end = if end < start { end + MINUTES_IN_DAY } else { end };
        Self { start, end }
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Whether this span has no length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a minute falls within this span.
    #[inline]
    pub fn contains(&self, minute: Minutes) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Half-open intersection test: `max(a1, b1) < min(a2, b2)`.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// The same span one day later.
    #[inline]
    pub fn next_day(&self) -> Self {
        Self {
            start: self.start + MINUTES_IN_DAY,
            end: self.end + MINUTES_IN_DAY,
        }
    }
}

/// Whether two items overlap in time.
///
/// Zero-length items never overlap. Overnight items are normalized
/// before the half-open test and their spill past midnight is also
/// tested against the other item moved one day forward, so
/// `23:00–01:00` overlaps `00:00–00:30` but `08:00–09:00` does not
/// overlap `09:00–10:00`.
pub fn overlaps<A: Timed + ?Sized, B: Timed + ?Sized>(a: &A, b: &B) -> bool {
    if a.from() == a.to() || b.from() == b.to() {
        return false;
    }
    let a = a.span();
    let b = b.span();
    a.intersects(&b) || a.intersects(&b.next_day()) || a.next_day().intersects(&b)
}
