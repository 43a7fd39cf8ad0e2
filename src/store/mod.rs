//! Quick action store
//!
//! The store owns the canonical collection of quick actions. The view layer
//! never touches the collection directly: it reads [`QuickActionStore::sorted_actions`]
//! and calls the mutation methods, which
//! - apply the change to the latest persisted collection and save it, under the
//!   backend's lock (changes made by another process are picked up here),
//! - notify every subscriber with a [`StoreEvent`] and the sorted snapshot.
//!
//! Mutations never fail from the caller's point of view. Persistence problems
//! are logged and kept in [`QuickActionStore::last_persist_error`]; the change
//! then lives in memory only. Storage that cannot be read is never overwritten.

mod error;
mod manager;
mod persistence;
mod subscription;

pub use error::StoreError;
pub use manager::QuickActionManager;
pub use persistence::{
    ActionChange, ActionPersistence, JsonFileBackend, MemoryBackend, STORE_FILE_VERSION,
};
pub use subscription::{StoreEvent, Subscriber, SubscriptionId};

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::{default_actions, NewQuickAction, QuickAction, QuickActionId};
use subscription::Subscribers;

/// Authoritative collection of quick actions
pub struct QuickActionStore {
    actions: Vec<QuickAction>,
    backend: Box<dyn ActionPersistence>,
    subscribers: Subscribers,
    revision: u64,
    last_persist_error: Option<String>,
}

impl QuickActionStore {
    /// Open a store, loading persisted actions or seeding the defaults.
    ///
    /// An unreadable store file falls back to the defaults in memory and is
    /// left as it is; mutations stay in memory until it can be read again.
    pub fn open(backend: impl ActionPersistence + 'static) -> Self {
        let backend: Box<dyn ActionPersistence> = Box::new(backend);
        let mut last_persist_error = None;

        let actions = match backend.load() {
            Ok(Some(actions)) => {
                debug!(
                    "[store] Loaded {} quick actions from {}",
                    actions.len(),
                    backend.describe()
                );
                dedup_ids(actions)
            }
            Ok(None) => {
                info!(
                    "[store] No quick actions at {}, seeding defaults",
                    backend.describe()
                );
                default_actions()
            }
            Err(e) => {
                warn!("[store] Failed to load quick actions: {}. Using defaults.", e);
                last_persist_error = Some(e.to_string());
                default_actions()
            }
        };

        Self {
            actions,
            backend,
            subscribers: Subscribers::default(),
            revision: 0,
            last_persist_error,
        }
    }

    /// Store backed by memory only, seeded with the defaults
    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    /// Actions ordered by sort order, then case-insensitive name, then id
    pub fn sorted_actions(&self) -> Vec<QuickAction> {
        let mut sorted = self.actions.clone();
        sort_actions(&mut sorted);
        sorted
    }

    pub fn get(&self, id: QuickActionId) -> Option<&QuickAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Incremented once per successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Message of the most recent load/save failure, cleared by the next successful save
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Location of the backing storage
    pub fn location(&self) -> String {
        self.backend.describe()
    }

    /// Add a new action; the store allocates its id and places it last
    pub fn add_action(&mut self, new_action: NewQuickAction) -> QuickActionId {
        let mut new_action = Some(new_action);
        let added = self.mutate(|actions| {
            let mut id = QuickActionId::new();
            while actions.iter().any(|a| a.id == id) {
                id = QuickActionId::new();
            }

            let sort_order = actions
                .iter()
                .map(|a| a.sort_order)
                .max()
                .map_or(0, |max| max.saturating_add(1));

            let action = new_action.take()?.into_action(id, sort_order);
            info!("[store] Added quick action '{}' ({})", action.name, id.short());
            actions.push(action);
            Some((id, StoreEvent::Added(id)))
        });
        // Adding never declines
        added.unwrap_or_default()
    }

    /// Replace the editable fields of the action with the same id.
    ///
    /// Returns `false` (and changes nothing) when no action has that id.
    pub fn update_action(&mut self, action: &QuickAction) -> bool {
        self.mutate(|actions| {
            let Some(existing) = actions.iter_mut().find(|a| a.id == action.id) else {
                debug!("[store] Ignoring update for unknown id {}", action.id.short());
                return None;
            };

            existing.apply_fields(action);
            info!("[store] Updated quick action '{}' ({})", existing.name, action.id.short());
            Some(((), StoreEvent::Updated(action.id)))
        })
        .is_some()
    }

    /// Remove an action, returning it if it existed
    pub fn delete_action(&mut self, id: QuickActionId) -> Option<QuickAction> {
        self.mutate(|actions| {
            let index = actions.iter().position(|a| a.id == id)?;
            let removed = actions.remove(index);
            info!("[store] Deleted quick action '{}' ({})", removed.name, id.short());
            Some((removed, StoreEvent::Deleted(id)))
        })
    }

    /// Replace the entire collection with the built-in defaults
    pub fn reset_to_defaults(&mut self) {
        self.mutate(|actions| {
            *actions = default_actions();
            info!("[store] Reset quick actions to defaults");
            Some(((), StoreEvent::Reset))
        });
    }

    /// Move an action to `to_index` in the sorted view (clamped) and renumber
    /// sort orders densely from zero.
    pub fn move_action(&mut self, id: QuickActionId, to_index: usize) -> bool {
        self.mutate(|actions| {
            sort_actions(actions);
            let from_index = actions.iter().position(|a| a.id == id)?;

            let action = actions.remove(from_index);
            let to_index = to_index.min(actions.len());
            actions.insert(to_index, action);

            for (order, action) in actions.iter_mut().enumerate() {
                action.sort_order = u32::try_from(order).unwrap_or(u32::MAX);
            }
            debug!("[store] Moved quick action {} to position {}", id.short(), to_index);
            Some(((), StoreEvent::Moved(id)))
        })
        .is_some()
    }

    /// Register a change callback
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&StoreEvent, &[QuickAction]) + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(Box::new(subscriber))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply `change` to the latest persisted collection and save the result.
    ///
    /// `change` returns `None` for a no-op (nothing saved, no event). When the
    /// backend cannot load, the change is applied to the in-memory copy only.
    fn mutate<R>(
        &mut self,
        mut change: impl FnMut(&mut Vec<QuickAction>) -> Option<(R, StoreEvent)>,
    ) -> Option<R> {
        let mut applied: Option<(R, StoreEvent, Vec<QuickAction>)> = None;
        let mut latest_seen: Option<Vec<QuickAction>> = None;
        let current = &self.actions;

        let result = self.backend.update(&mut |latest: Option<Vec<QuickAction>>| {
            let mut actions = match latest {
                Some(latest) => dedup_ids(latest),
                None => current.clone(),
            };
            latest_seen = Some(actions.clone());
            let (value, event) = change(&mut actions)?;
            applied = Some((value, event, actions.clone()));
            Some(actions)
        });

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!("[store] Failed to persist quick actions: {}", e);
                self.last_persist_error = Some(e.to_string());

                // Loading failed before the change ran; keep it in memory only
                if latest_seen.is_none() {
                    self.last_persist_error = Some(format!("{e} (changes kept in memory only)"));
                    let mut actions = self.actions.clone();
                    if let Some((value, event)) = change(&mut actions) {
                        applied = Some((value, event, actions));
                    }
                }
            }
        }

        let Some((value, event, actions)) = applied else {
            // No-op, but still show what another process may have saved
            if let Some(latest) = latest_seen {
                self.actions = latest;
            }
            return None;
        };

        self.actions = actions;
        self.revision += 1;
        let snapshot = self.sorted_actions();
        self.subscribers.notify(&event, &snapshot);
        Some(value)
    }
}

impl std::fmt::Debug for QuickActionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickActionStore")
            .field("actions", &self.actions)
            .field("backend", &self.backend.describe())
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

fn sort_actions(actions: &mut [QuickAction]) {
    actions.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn dedup_ids(actions: Vec<QuickAction>) -> Vec<QuickAction> {
    let mut seen = HashSet::new();
    actions
        .into_iter()
        .filter(|action| {
            let fresh = seen.insert(action.id);
            if !fresh {
                warn!(
                    "[store] Dropping quick action '{}' with duplicate id {}",
                    action.name, action.id
                );
            }
            fresh
        })
        .collect()
}
