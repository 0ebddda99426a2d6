use std::iter::FusedIterator;

use chrono::NaiveDate;

/// Half-open span of days `[start, end)`.
///
/// Iterating is lazy and can be restarted any number of times since the span
/// itself is `Copy`. A span whose end is not after its start is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DaySpan {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day *not* in the span.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.end.signed_duration_since(self.start).num_days()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    #[must_use]
    pub fn iter(&self) -> DayIter {
        DayIter {
            next: self.start,
            end: self.end,
        }
    }
}

impl IntoIterator for DaySpan {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DaySpan {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DaySpan`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: NaiveDate,
    end: NaiveDate,
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        // current < end, so a successor always exists
        self.next = current.succ_opt().unwrap_or(self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DaySpan::new(self.next, self.end).len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayIter {}

impl FusedIterator for DayIter {}
