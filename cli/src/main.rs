use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use notipanel_cli::commands::{self, ConfirmArg, ToggleField};
use notipanel_cli::{CliConfig, CliContext, logging, readline};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();

    let config = CliConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Using default configuration");
        CliConfig::default()
    });
    let mut ctx = CliContext::new(config).await.map_err(|e| e.to_string())?;
    ctx.panel.mount().await;
    commands::show(&ctx);

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Apply banner expiries that fired while waiting for input
        ctx.panel.process_pending();

        match respond(line, &mut ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "notification panel settings admin")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the settings being edited
    Show,
    Groups,
    Select {
        #[arg(short, long)]
        id: i64,
    },
    Toggle {
        #[arg(value_enum)]
        field: ToggleField,
    },
    SetSort {
        order: String,
    },
    SetDuplicates {
        mode: String,
    },
    SetUnitStatusTime {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    SetPendingEventsTime {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    SetNumPerCategory {
        #[arg(allow_negative_numbers = true, default_value_t = 1)]
        value: i32,
        #[arg(long)]
        show_all: bool,
    },
    MoveCategory {
        from: usize,
        to: usize,
    },
    EnableCategory {
        category: String,
        #[arg(action = ArgAction::Set, default_value_t = true)]
        enabled: bool,
    },
    UseDefault,
    Save,
    Cancel,
    NewGroup,
    Navigate {
        url: String,
    },
    Confirm {
        #[arg(value_enum)]
        choice: ConfirmArg,
    },
    Dismiss,
    Reload,
    Config {
        #[arg(long)]
        banner_timeout: Option<u64>,
        #[arg(long)]
        store_path: Option<PathBuf>,
    },
    Exit,
}

async fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "notipanel".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Show) => commands::show(ctx),
        Some(Commands::Groups) => commands::groups(ctx),
        Some(Commands::Select { id }) => commands::select(ctx, id).await.map_err(|e| e.to_string())?,
        Some(Commands::Toggle { field }) => commands::toggle(ctx, field),
        Some(Commands::SetSort { order }) => {
            commands::set_sort(ctx, &order).map_err(|e| e.to_string())?
        }
        Some(Commands::SetDuplicates { mode }) => {
            commands::set_duplicates(ctx, &mode).map_err(|e| e.to_string())?
        }
        Some(Commands::SetUnitStatusTime { value }) => commands::set_unit_status_time(ctx, value),
        Some(Commands::SetPendingEventsTime { value }) => {
            commands::set_pending_events_time(ctx, value)
        }
        Some(Commands::SetNumPerCategory { value, show_all }) => {
            commands::set_num_per_category(ctx, value, show_all)
        }
        Some(Commands::MoveCategory { from, to }) => commands::move_category(ctx, from, to),
        Some(Commands::EnableCategory { category, enabled }) => {
            commands::enable_category(ctx, &category, enabled).map_err(|e| e.to_string())?
        }
        Some(Commands::UseDefault) => commands::use_default(ctx),
        Some(Commands::Save) => commands::save(ctx).await,
        Some(Commands::Cancel) => commands::cancel(ctx),
        Some(Commands::NewGroup) => commands::new_group(ctx),
        Some(Commands::Navigate { url }) => commands::navigate(ctx, &url),
        Some(Commands::Confirm { choice }) => commands::confirm(ctx, choice).await,
        Some(Commands::Dismiss) => commands::dismiss(ctx),
        Some(Commands::Reload) => commands::reload(ctx).await,
        Some(Commands::Config {
            banner_timeout,
            store_path,
        }) => commands::config(ctx, banner_timeout, store_path).map_err(|e| e.to_string())?,
        Some(Commands::Exit) => {
            commands::exit(ctx).map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
