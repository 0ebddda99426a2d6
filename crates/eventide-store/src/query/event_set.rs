use std::collections::HashSet;

use crate::model::{Event, EventId, Occurrence, OccurrenceId};
use crate::query::OccurrenceQuery;
use crate::repository::EventRepository;
use crate::tree::EventTree;

/// An ordered set of events from one repository.
#[derive(Debug)]
pub struct EventSet<'r, R> {
    repo: &'r R,
    ids: Vec<EventId>,
}

impl<R> Clone for EventSet<'_, R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo,
            ids: self.ids.clone(),
        }
    }
}

impl<'r, R: EventRepository> EventSet<'r, R> {
    /// Every event in the repository.
    pub fn all(repo: &'r R) -> Self {
        let ids = repo.events().map(Event::id).collect();
        Self { repo, ids }
    }

    /// Root events only.
    pub fn roots(repo: &'r R) -> Self {
        let ids = repo.roots().into_iter().map(Event::id).collect();
        Self { repo, ids }
    }

    /// The given ids, in order, skipping unknown and repeated ones.
    pub fn from_ids(repo: &'r R, ids: impl IntoIterator<Item = EventId>) -> Self {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .filter(|id| repo.event(*id).is_some() && seen.insert(*id))
            .collect();
        Self { repo, ids }
    }

    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Event) -> bool,
    {
        let ids = self
            .ids
            .iter()
            .copied()
            .filter(|id| self.repo.event(*id).is_some_and(&predicate))
            .collect();
        Self {
            repo: self.repo,
            ids,
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[EventId] {
        &self.ids
    }

    #[must_use]
    pub fn events(&self) -> Vec<&'r Event> {
        self.ids
            .iter()
            .filter_map(|id| self.repo.event(*id))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Union of the members' own occurrences.
    #[must_use]
    pub fn occurrences(&self) -> OccurrenceQuery<'r> {
        let repo = self.repo;
        OccurrenceQuery::new(self.ids.iter().flat_map(|id| repo.occurrences_of(*id)))
    }

    /// ## Summary
    /// Members with no ancestor inside the set.
    ///
    /// For a set of all events these are the roots.
    #[must_use]
    pub fn top_level_ids(&self) -> Vec<EventId> {
        let members: HashSet<EventId> = self.ids.iter().copied().collect();
        self.ids
            .iter()
            .copied()
            .filter(|id| {
                !self
                    .repo
                    .ancestors(*id)
                    .iter()
                    .any(|ancestor| members.contains(&ancestor.id()))
            })
            .collect()
    }

    /// Opening occurrence of every top-level member, without duplicates,
    /// in default order.
    #[must_use]
    pub fn opening_occurrences(&self) -> Vec<&'r Occurrence> {
        let repo = self.repo;
        distinct(
            self.top_level_ids()
                .into_iter()
                .filter_map(|id| repo.opening_occurrence(id)),
        )
    }

    /// Closing occurrence of every top-level member, without duplicates,
    /// in default order.
    #[must_use]
    pub fn closing_occurrences(&self) -> Vec<&'r Occurrence> {
        let repo = self.repo;
        distinct(
            self.top_level_ids()
                .into_iter()
                .filter_map(|id| repo.closing_occurrence(id)),
        )
    }
}

fn distinct<'a>(occurrences: impl Iterator<Item = &'a Occurrence>) -> Vec<&'a Occurrence> {
    let mut seen: HashSet<OccurrenceId> = HashSet::new();
    let mut result: Vec<_> = occurrences
        .filter(|occurrence| seen.insert(occurrence.id()))
        .collect();
    result.sort_by(|a, b| Occurrence::default_order(a, b));
    result
}
