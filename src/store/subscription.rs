use crate::domain::{QuickAction, QuickActionId};

/// What changed in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(QuickActionId),
    Updated(QuickActionId),
    Deleted(QuickActionId),
    Moved(QuickActionId),
    Reset,
}

/// Handle returned by [`super::QuickActionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

/// Callback invoked with the event and the sorted snapshot after the change
pub type Subscriber = Box<dyn FnMut(&StoreEvent, &[QuickAction])>;

#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Subscribers {
    pub(super) fn add(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&mut self, event: &StoreEvent, snapshot: &[QuickAction]) {
        for (_, subscriber) in &mut self.entries {
            subscriber(event, snapshot);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
