//! Quick action CRUD commands (edit the store file)

use std::io::Write;

use anyhow::{bail, Context as _, Result};
use clap::Args;
use tracing::warn;

use super::lookup::resolve;
use super::Context;
use quick_actions::domain::{find_icon, ActionColor, NewQuickAction, QuickAction, DEFAULT_ICON};
use quick_actions::store::QuickActionStore;

#[derive(Debug, Clone, Args)]
pub struct ActionArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// Prompt sent when the action runs
    #[arg(long, default_value = "")]
    pub prompt: String,
    /// Symbolic icon name (e.g. play.fill, hammer)
    #[arg(long, default_value = DEFAULT_ICON)]
    pub icon: String,
    /// Accent color (blue, green, orange, red, purple, pink, yellow, teal, gray)
    #[arg(long, default_value = "blue")]
    pub color: ActionColor,
    /// Print JSON response
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Id, unique id prefix or name of the action
    pub action: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub color: Option<ActionColor>,
    /// Print JSON response
    #[arg(long)]
    pub json: bool,
}

/// Fail the command if the last mutation could not be written
fn ensure_persisted(store: &QuickActionStore) -> Result<()> {
    if let Some(e) = store.last_persist_error() {
        bail!("Failed to save quick actions to {}: {}", store.location(), e);
    }
    Ok(())
}

fn warn_unknown_icon(icon: &str) {
    if find_icon(icon).is_none() {
        warn!("Icon '{}' is not in the catalog; a fallback glyph will be shown", icon);
    }
}

fn print_action(out: &mut impl Write, action: &QuickAction, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(action)?)?;
    } else {
        writeln!(out, "id:     {}", action.id)?;
        writeln!(out, "name:   {}", action.name)?;
        writeln!(out, "icon:   {}", action.icon)?;
        writeln!(out, "color:  {}", action.color)?;
        writeln!(out, "order:  {}", action.sort_order)?;
        writeln!(out, "prompt:")?;
        for line in action.prompt.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

pub fn list_command(ctx: &Context, out: &mut impl Write, json: bool) -> Result<()> {
    let store = ctx.open_store();
    let actions = store.sorted_actions();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&actions)?)?;
        return Ok(());
    }

    if actions.is_empty() {
        writeln!(out, "No quick actions. Add one with `quick-actions add --name <name>`.")?;
        return Ok(());
    }

    let preview_chars = ctx.config.render_options().prompt_preview_chars;
    for (index, action) in actions.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} {:<24} {:<7} {}",
            index,
            action.id.short(),
            action.name,
            action.color,
            action.prompt_preview(preview_chars)
        )?;
    }
    Ok(())
}

pub fn show_command(ctx: &Context, out: &mut impl Write, query: &str, json: bool) -> Result<()> {
    let store = ctx.open_store();
    let action = resolve(&store, query)?;
    print_action(out, &action, json)
}

pub fn add_command(ctx: &Context, out: &mut impl Write, args: ActionArgs) -> Result<()> {
    warn_unknown_icon(&args.icon);

    let mut store = ctx.open_store();
    let id = store.add_action(NewQuickAction::new(args.name, args.prompt, args.icon, args.color));
    ensure_persisted(&store)?;

    let action = store
        .get(id)
        .cloned()
        .context("Added quick action disappeared from the store")?;
    if args.json {
        print_action(out, &action, true)
    } else {
        writeln!(out, "Added \"{}\" ({})", action.name, action.id.short())?;
        Ok(())
    }
}

pub fn edit_command(ctx: &Context, out: &mut impl Write, args: EditArgs) -> Result<()> {
    let mut store = ctx.open_store();
    let mut action = resolve(&store, &args.action)?;

    if args.name.is_none() && args.prompt.is_none() && args.icon.is_none() && args.color.is_none() {
        bail!("Nothing to change; pass at least one of --name, --prompt, --icon, --color");
    }

    if let Some(name) = args.name {
        action.name = name;
    }
    if let Some(prompt) = args.prompt {
        action.prompt = prompt;
    }
    if let Some(icon) = args.icon {
        warn_unknown_icon(&icon);
        action.icon = icon;
    }
    if let Some(color) = args.color {
        action.color = color;
    }

    if !store.update_action(&action) {
        bail!("Quick action {} no longer exists", action.id.short());
    }
    ensure_persisted(&store)?;

    if args.json {
        print_action(out, &action, true)
    } else {
        writeln!(out, "Saved \"{}\" ({})", action.name, action.id.short())?;
        Ok(())
    }
}

pub fn delete_command(ctx: &Context, out: &mut impl Write, query: &str, yes: bool) -> Result<()> {
    let mut store = ctx.open_store();
    let action = resolve(&store, query)?;

    if !yes {
        bail!(
            "Refusing to delete \"{}\" without confirmation; this cannot be undone. Re-run with --yes.",
            action.name
        );
    }

    store.delete_action(action.id);
    ensure_persisted(&store)?;
    writeln!(out, "Deleted \"{}\" ({})", action.name, action.id.short())?;
    Ok(())
}

pub fn reset_command(ctx: &Context, out: &mut impl Write, yes: bool) -> Result<()> {
    if !yes {
        bail!(
            "Refusing to reset without confirmation; this replaces all quick actions with the defaults (Run App, Commit & Push). Re-run with --yes."
        );
    }

    let mut store = ctx.open_store();
    store.reset_to_defaults();
    ensure_persisted(&store)?;
    writeln!(out, "Restored {} default quick actions", store.len())?;
    Ok(())
}

pub fn move_command(ctx: &Context, out: &mut impl Write, query: &str, index: usize) -> Result<()> {
    let mut store = ctx.open_store();
    let action = resolve(&store, query)?;

    store.move_action(action.id, index);
    ensure_persisted(&store)?;

    let position = store
        .sorted_actions()
        .iter()
        .position(|a| a.id == action.id)
        .unwrap_or(index);
    writeln!(out, "Moved \"{}\" to position {}", action.name, position)?;
    Ok(())
}
