use super::QuickActionStore;
use crate::domain::{NewQuickAction, QuickAction, QuickActionId};

/// Operations the settings sheet needs from whoever owns the collection
pub trait QuickActionManager {
    fn sorted_actions(&self) -> Vec<QuickAction>;

    fn get(&self, id: QuickActionId) -> Option<QuickAction> {
        self.sorted_actions().into_iter().find(|a| a.id == id)
    }

    fn add_action(&mut self, new_action: NewQuickAction) -> QuickActionId;

    fn update_action(&mut self, action: &QuickAction) -> bool;

    fn delete_action(&mut self, id: QuickActionId) -> Option<QuickAction>;

    fn reset_to_defaults(&mut self);
}

impl QuickActionManager for QuickActionStore {
    fn sorted_actions(&self) -> Vec<QuickAction> {
        QuickActionStore::sorted_actions(self)
    }

    fn get(&self, id: QuickActionId) -> Option<QuickAction> {
        QuickActionStore::get(self, id).cloned()
    }

    fn add_action(&mut self, new_action: NewQuickAction) -> QuickActionId {
        QuickActionStore::add_action(self, new_action)
    }

    fn update_action(&mut self, action: &QuickAction) -> bool {
        QuickActionStore::update_action(self, action)
    }

    fn delete_action(&mut self, id: QuickActionId) -> Option<QuickAction> {
        QuickActionStore::delete_action(self, id)
    }

    fn reset_to_defaults(&mut self) {
        QuickActionStore::reset_to_defaults(self)
    }
}
