//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots that are rebuilt from their event history.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate records and replays.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the number of committed events applied so far.
    fn version(&self) -> i64;

    /// Apply a committed event, advancing the version by one.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded by command handling but not yet persisted.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events once they have been appended.
    fn clear_uncommitted_events(&mut self);

    /// Applies a sequence of committed events in order.
    fn replay<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        for event in events {
            self.apply(event);
        }
    }
}
