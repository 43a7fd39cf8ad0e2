//! Resolve a user-supplied id, id prefix or name to a quick action

use anyhow::{bail, Result};

use quick_actions::domain::{QuickAction, QuickActionId};
use quick_actions::store::QuickActionStore;

const MIN_ID_PREFIX: usize = 4;

/// Match order: full id, unique id prefix, unique case-insensitive name
pub fn resolve(store: &QuickActionStore, query: &str) -> Result<QuickAction> {
    let query = query.trim();
    if query.is_empty() {
        bail!("No quick action given");
    }

    if let Ok(id) = query.parse::<QuickActionId>() {
        if let Some(action) = store.get(id) {
            return Ok(action.clone());
        }
    }

    let actions = store.sorted_actions();

    let prefix = query.replace('-', "").to_lowercase();
    let is_id_prefix = prefix.len() >= MIN_ID_PREFIX && prefix.chars().all(|c| c.is_ascii_hexdigit());
    let by_id: Vec<&QuickAction> = actions
        .iter()
        .filter(|a| is_id_prefix && a.id.as_uuid().simple().to_string().starts_with(&prefix))
        .collect();
    if let [action] = by_id.as_slice() {
        return Ok((*action).clone());
    }

    let by_name: Vec<&QuickAction> = actions
        .iter()
        .filter(|a| a.name.to_lowercase() == query.to_lowercase())
        .collect();
    match by_name.as_slice() {
        [action] => Ok((*action).clone()),
        [] if by_id.len() > 1 => bail!(
            "Id prefix '{}' is ambiguous ({} matches)",
            query,
            by_id.len()
        ),
        [] => bail!("No quick action matches '{}'", query),
        many => bail!(
            "Name '{}' is ambiguous; use an id instead: {}",
            query,
            many.iter()
                .map(|a| a.id.short())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
