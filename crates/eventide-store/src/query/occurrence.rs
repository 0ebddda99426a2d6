//! Occurrence queries.
//!
//! ## Summary
//! An [`OccurrenceQuery`] holds a fixed set of candidate occurrences and a
//! list of criteria. Adding a filter returns a new query with one more
//! criterion; nothing is evaluated until the query is materialized, at which
//! point matches come back ordered by start, then end.
//!
//! Range filters accept either plain dates, which expand to the whole day,
//! or exact date-times (see [`QueryBound`]).

use std::fmt;
use std::ops::Bound;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use eventide_calendar::DaySpan;
use eventide_core::error::{CoreError, CoreResult};
use eventide_core::types::Status;

use crate::model::{Occurrence, OccurrenceId};

/// A bound usable in range filters.
///
/// Dates cover the whole day: they start at midnight and run up to, but not
/// including, the following midnight, so leap-second instants still belong
/// to their day. Date-times are taken as-is and are inclusive.
pub trait QueryBound: Copy {
    fn lower_bound(self) -> NaiveDateTime;
    fn upper_bound(self) -> Bound<NaiveDateTime>;
}

impl QueryBound for NaiveDate {
    fn lower_bound(self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }

    fn upper_bound(self) -> Bound<NaiveDateTime> {
        self.succ_opt()
            .map_or(Bound::Unbounded, |next| Bound::Excluded(next.and_time(NaiveTime::MIN)))
    }
}

impl QueryBound for NaiveDateTime {
    fn lower_bound(self) -> NaiveDateTime {
        self
    }

    fn upper_bound(self) -> Bound<NaiveDateTime> {
        Bound::Included(self)
    }
}

/// Whether `instant` falls at or before the upper `bound`.
fn within(instant: NaiveDateTime, bound: Bound<NaiveDateTime>) -> bool {
    match bound {
        Bound::Included(upper) => instant <= upper,
        Bound::Excluded(upper) => instant < upper,
        Bound::Unbounded => true,
    }
}

type Predicate = Arc<dyn Fn(&Occurrence) -> bool + Send + Sync>;

#[derive(Clone)]
enum Criterion {
    Status(Status),
    /// `[start, end]` intersects the range from `lower` up to `upper`.
    Overlaps {
        lower: NaiveDateTime,
        upper: Bound<NaiveDateTime>,
    },
    EndsBefore(NaiveDateTime),
    /// Start lies beyond `upper`.
    StartsAfter(Bound<NaiveDateTime>),
    StartsWithin {
        lower: NaiveDateTime,
        upper: Bound<NaiveDateTime>,
    },
    StartsIn(DaySpan),
    Custom(Predicate),
}

impl Criterion {
    fn matches(&self, occurrence: &Occurrence) -> bool {
        match self {
            Self::Status(status) => occurrence.status() == *status,
            Self::Overlaps { lower, upper } => {
                within(occurrence.start(), *upper) && occurrence.end() >= *lower
            }
            Self::EndsBefore(bound) => occurrence.end() < *bound,
            Self::StartsAfter(upper) => !within(occurrence.start(), *upper),
            Self::StartsWithin { lower, upper } => {
                *lower <= occurrence.start() && within(occurrence.start(), *upper)
            }
            Self::StartsIn(span) => span.contains(occurrence.start().date()),
            Self::Custom(predicate) => predicate(occurrence),
        }
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => f.debug_tuple("Status").field(status).finish(),
            Self::Overlaps { lower, upper } => f
                .debug_struct("Overlaps")
                .field("lower", lower)
                .field("upper", upper)
                .finish(),
            Self::EndsBefore(bound) => f.debug_tuple("EndsBefore").field(bound).finish(),
            Self::StartsAfter(bound) => f.debug_tuple("StartsAfter").field(bound).finish(),
            Self::StartsWithin { lower, upper } => f
                .debug_struct("StartsWithin")
                .field("lower", lower)
                .field("upper", upper)
                .finish(),
            Self::StartsIn(span) => f.debug_tuple("StartsIn").field(span).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Immutable, lazily evaluated query over a set of occurrences.
#[derive(Debug, Clone)]
pub struct OccurrenceQuery<'a> {
    source: Arc<[&'a Occurrence]>,
    criteria: Vec<Criterion>,
}

impl<'a> OccurrenceQuery<'a> {
    /// Query matching every occurrence in `source`.
    pub fn new(source: impl IntoIterator<Item = &'a Occurrence>) -> Self {
        Self {
            source: source.into_iter().collect(),
            criteria: Vec::new(),
        }
    }

    #[must_use]
    pub fn all(&self) -> Self {
        self.clone()
    }

    #[must_use]
    pub fn filter_status(&self, status: Status) -> Self {
        self.with(Criterion::Status(status))
    }

    /// Retains occurrences for which `predicate` returns true.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Occurrence) -> bool + Send + Sync + 'static,
    {
        self.with(Criterion::Custom(Arc::new(predicate)))
    }

    /// ## Summary
    /// Occurrences overlapping the range from `from.lower_bound()` up to
    /// `to.upper_bound()`.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if the range ends before it starts.
    pub fn between<B: QueryBound>(&self, from: B, to: B) -> CoreResult<Self> {
        let (lower, upper) = checked_bounds(from, to)?;
        Ok(self.with(Criterion::Overlaps { lower, upper }))
    }

    /// Occurrences that overlap any part of `day`; same as `between(day, day)`.
    #[must_use]
    pub fn on(&self, day: NaiveDate) -> Self {
        self.with(Criterion::Overlaps {
            lower: day.lower_bound(),
            upper: day.upper_bound(),
        })
    }

    /// Occurrences that end strictly before `bound` begins.
    #[must_use]
    pub fn before<B: QueryBound>(&self, bound: B) -> Self {
        self.with(Criterion::EndsBefore(bound.lower_bound()))
    }

    /// Occurrences that start strictly after `bound` ends.
    #[must_use]
    pub fn after<B: QueryBound>(&self, bound: B) -> Self {
        self.with(Criterion::StartsAfter(bound.upper_bound()))
    }

    /// ## Summary
    /// Occurrences whose start lies between `from.lower_bound()` and
    /// `to.upper_bound()`, regardless of when they end.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if the range ends before it starts.
    pub fn starts_between<B: QueryBound>(&self, from: B, to: B) -> CoreResult<Self> {
        let (lower, upper) = checked_bounds(from, to)?;
        Ok(self.with(Criterion::StartsWithin { lower, upper }))
    }

    #[must_use]
    pub fn starts_on(&self, day: NaiveDate) -> Self {
        self.with(Criterion::StartsWithin {
            lower: day.lower_bound(),
            upper: day.upper_bound(),
        })
    }

    /// Occurrences starting on one of the days of `span`.
    #[must_use]
    pub fn starts_in(&self, span: DaySpan) -> Self {
        self.with(Criterion::StartsIn(span))
    }

    /// Occurrences that have not started yet at `now`.
    #[must_use]
    pub fn forthcoming(&self, now: NaiveDateTime) -> Self {
        self.with(Criterion::StartsAfter(Bound::Included(now)))
    }

    /// Occurrences that were already over at `now`.
    #[must_use]
    pub fn recent(&self, now: NaiveDateTime) -> Self {
        self.with(Criterion::EndsBefore(now))
    }

    /// Matches in default order (start, end, id).
    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a Occurrence> {
        let mut matches: Vec<_> = self.matching().collect();
        matches.sort_by(|a, b| Occurrence::default_order(a, b));
        matches
    }

    pub fn iter(&self) -> std::vec::IntoIter<&'a Occurrence> {
        self.to_vec().into_iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matching().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matching().next().is_none()
    }

    /// Earliest match by default order.
    #[must_use]
    pub fn first(&self) -> Option<&'a Occurrence> {
        self.matching()
            .min_by(|a, b| Occurrence::default_order(a, b))
    }

    /// Latest match by default order: greatest start, ties broken by end.
    #[must_use]
    pub fn last(&self) -> Option<&'a Occurrence> {
        self.matching()
            .max_by(|a, b| Occurrence::default_order(a, b))
    }

    #[must_use]
    pub fn contains(&self, id: OccurrenceId) -> bool {
        self.matching().any(|occurrence| occurrence.id() == id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<OccurrenceId> {
        self.iter().map(Occurrence::id).collect()
    }

    #[must_use]
    pub fn date_tester(&self) -> DateTester<'a> {
        DateTester {
            query: self.clone(),
        }
    }

    fn with(&self, criterion: Criterion) -> Self {
        let mut criteria = self.criteria.clone();
        criteria.push(criterion);
        Self {
            source: Arc::clone(&self.source),
            criteria,
        }
    }

    fn matching(&self) -> impl Iterator<Item = &'a Occurrence> + '_ {
        self.source.iter().copied().filter(|occurrence| {
            self.criteria
                .iter()
                .all(|criterion| criterion.matches(occurrence))
        })
    }
}

impl<'a> IntoIterator for &OccurrenceQuery<'a> {
    type Item = &'a Occurrence;
    type IntoIter = std::vec::IntoIter<&'a Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Answers whether any occurrence of a query starts on a given date.
#[derive(Debug, Clone)]
pub struct DateTester<'a> {
    query: OccurrenceQuery<'a>,
}

impl DateTester<'_> {
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        !self.query.starts_on(day).is_empty()
    }
}

fn checked_bounds<B: QueryBound>(
    from: B,
    to: B,
) -> CoreResult<(NaiveDateTime, Bound<NaiveDateTime>)> {
    let (lower, upper) = (from.lower_bound(), to.upper_bound());
    match upper {
        Bound::Included(end) if end < lower => Err(CoreError::invalid_range(lower, end)),
        Bound::Excluded(end) if end <= lower => Err(CoreError::invalid_range(lower, end)),
        _ => Ok((lower, upper)),
    }
}
