//! Field-level change cascade.
//!
//! ## Summary
//! Saving an event compares the proposed values with the persisted ones.
//! Each changed field then travels down the subtree: a descendant still
//! holding the old value takes the new one, while a descendant holding
//! anything else keeps its value and shields its own subtree from that
//! field. Fields are handled independently, and nothing ever flows upwards.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::model::{EventField, EventFields, EventId};
use crate::repository::EventRepository;

/// Outcome of a cascading save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Fields that differed from the persisted values of the saved event.
    pub changed: Vec<EventField>,
    /// Descendants that took the new value, per field.
    pub updated: Vec<(EventId, EventField)>,
    /// Descendants that kept a diverged value, per field. Their subtrees
    /// were not visited for that field.
    pub diverged: Vec<(EventId, EventField)>,
}

impl CascadeReport {
    /// True if the save changed nothing at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }

    /// Distinct descendants that were rewritten, in visiting order.
    #[must_use]
    pub fn updated_events(&self) -> Vec<EventId> {
        let mut events: Vec<EventId> = Vec::new();
        for (id, _) in &self.updated {
            if !events.contains(id) {
                events.push(*id);
            }
        }
        events
    }
}

#[tracing::instrument(skip(repo, new_fields), fields(changed = tracing::field::Empty))]
pub(super) fn save_with_cascade<R: EventRepository>(
    repo: &mut R,
    id: EventId,
    new_fields: EventFields,
) -> StoreResult<CascadeReport> {
    new_fields.validate()?;
    let old_fields = repo
        .event(id)
        .ok_or(StoreError::EventNotFound(id))?
        .fields()
        .clone();

    let changed = old_fields.changed_fields(&new_fields);
    tracing::Span::current().record("changed", tracing::field::debug(&changed));

    repo.persist_fields(id, new_fields.clone())?;

    let mut report = CascadeReport {
        changed,
        ..CascadeReport::default()
    };
    if report.is_noop() {
        tracing::debug!("No field changed, nothing to cascade");
        return Ok(report);
    }

    // Pending values per descendant, in first-visit order, so each one is
    // persisted once even when several fields change.
    let mut order: Vec<EventId> = Vec::new();
    let mut pending: HashMap<EventId, EventFields> = HashMap::new();

    for field in report.changed.clone() {
        let mut stack: Vec<EventId> = repo.child_ids(id).iter().rev().copied().collect();

        while let Some(descendant) = stack.pop() {
            let Some(event) = repo.event(descendant) else {
                continue;
            };

            if event.fields().field_eq(&old_fields, field) {
                tracing::trace!(%descendant, %field, "Cascading value");
                let fields = pending.entry(descendant).or_insert_with(|| {
                    order.push(descendant);
                    event.fields().clone()
                });
                fields.copy_field_from(&new_fields, field);
                report.updated.push((descendant, field));
                stack.extend(repo.child_ids(descendant).iter().rev().copied());
            } else {
                tracing::debug!(%descendant, %field, "Descendant diverged, not cascading");
                report.diverged.push((descendant, field));
            }
        }
    }

    for descendant in order {
        if let Some(fields) = pending.remove(&descendant) {
            repo.persist_fields(descendant, fields)?;
        }
    }

    tracing::debug!(
        updated = report.updated.len(),
        diverged = report.diverged.len(),
        "Cascade applied"
    );
    Ok(report)
}
