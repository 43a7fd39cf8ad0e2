use uuid::Uuid;

use super::{ActionColor, NewQuickAction, QuickAction, QuickActionId};

pub const RUN_APP_NAME: &str = "Run App";
pub const COMMIT_AND_PUSH_NAME: &str = "Commit & Push";

/// Built-in ids never change, so a store that was never written still hands
/// out the same ids on every open
pub const RUN_APP_ID: QuickActionId =
    QuickActionId::from_uuid(Uuid::from_u128(0x6b1e_2f0a_91c4_4d57_8a3e_5f0c_d2b7_0001));
pub const COMMIT_AND_PUSH_ID: QuickActionId =
    QuickActionId::from_uuid(Uuid::from_u128(0x6b1e_2f0a_91c4_4d57_8a3e_5f0c_d2b7_0002));

/// The built-in actions a store is seeded with and reset to
pub fn default_actions() -> Vec<QuickAction> {
    vec![
        NewQuickAction::new(
            RUN_APP_NAME,
            "Run the app and report any build errors or runtime problems you see.",
            "play.fill",
            ActionColor::Green,
        )
        .into_action(RUN_APP_ID, 0),
        NewQuickAction::new(
            COMMIT_AND_PUSH_NAME,
            "Commit all current changes with a descriptive message and push to the remote.",
            "arrow.up.circle",
            ActionColor::Blue,
        )
        .into_action(COMMIT_AND_PUSH_ID, 1),
    ]
}
