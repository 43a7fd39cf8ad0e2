use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::action::{ActionArgs, EditArgs};

#[derive(Parser)]
#[command(name = "quick-actions")]
#[command(about = "Manage quick actions - named prompt shortcuts")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.quick-actions/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the quick actions store (overrides the config file)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Keep changes in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the quick actions window
    Gui,

    /// List quick actions in display order
    List {
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// Show a single quick action by id (or unique id prefix) or name
    Show {
        action: String,
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// Add a quick action
    Add(ActionArgs),

    /// Edit a quick action; only the given fields change
    Edit(EditArgs),

    /// Delete a quick action
    Delete {
        action: String,
        /// Confirm the deletion
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Replace all quick actions with the defaults (Run App, Commit & Push)
    Reset {
        /// Confirm the reset
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a quick action to a position in the list (0 = first)
    Move { action: String, index: usize },

    /// Write a default config file (~/.quick-actions/config.toml)
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout().lock();

    // Init runs before loading so it can replace an unreadable config
    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(&mut out, cli.config.as_deref(), cli.store, force);
    }

    let ctx = cli::Context::load(cli.config.as_deref(), cli.store, cli.ephemeral)?;

    match cli.command {
        Some(Commands::List { json }) => cli::action::list_command(&ctx, &mut out, json)?,
        Some(Commands::Show { action, json }) => {
            cli::action::show_command(&ctx, &mut out, &action, json)?
        }
        Some(Commands::Add(args)) => cli::action::add_command(&ctx, &mut out, args)?,
        Some(Commands::Edit(args)) => cli::action::edit_command(&ctx, &mut out, args)?,
        Some(Commands::Delete { action, yes }) => {
            cli::action::delete_command(&ctx, &mut out, &action, yes)?
        }
        Some(Commands::Reset { yes }) => cli::action::reset_command(&ctx, &mut out, yes)?,
        Some(Commands::Move { action, index }) => {
            cli::action::move_command(&ctx, &mut out, &action, index)?
        }
        // Handled above
        Some(Commands::Init { .. }) => {}
        Some(Commands::Gui) | None => {
            drop(out);
            quick_actions::gui::run_gui(&ctx.config, ctx.open_store())?;
        }
    }

    Ok(())
}
