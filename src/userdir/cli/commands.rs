//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the logger
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from configuration and flags
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::render::{print_messages, render_text_list, render_user_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{self, Write};
use userdir::api::{CmdResult, ConfigAction, UserDirectory};
use userdir::commands::MutationPolicy;
use userdir::config::{config_dir, ClientConfig};
use userdir::error::{Result, UserdirError};
use userdir::model::{DraftUser, Field, UserId};
use userdir::remote::http::HttpSource;

struct AppContext {
    api: UserDirectory<HttpSource>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    // config does not need the user list
    if !matches!(cli.command, Some(Commands::Config { .. })) {
        ctx.api.start()?;
    }
    dispatch(&mut ctx, cli.command)
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        None | Some(Commands::List) => handle_list(ctx),
        Some(Commands::Add {
            name,
            lastname,
            phone,
        }) => handle_add(ctx, DraftUser::new(name, lastname, phone)),
        Some(Commands::Update {
            id,
            name,
            lastname,
            phone,
        }) => {
            let edits = [
                (Field::Name, name),
                (Field::Lastname, lastname),
                (Field::Phone, phone),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
            handle_update(ctx, id, edits)
        }
        Some(Commands::Delete { id, yes }) => handle_delete(ctx, id, yes),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir()?;
    let config = ClientConfig::load(&dir)?.with_endpoint_override(cli.endpoint.clone());
    log::debug!("Using endpoint {}", config.endpoint);

    let source = HttpSource::new(&config.endpoint)?;
    let policy = MutationPolicy::from(&config);
    Ok(AppContext {
        api: UserDirectory::new(source, policy, dir),
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print!("{}", render_user_table(ctx.api.users()));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: DraftUser) -> Result<()> {
    let result = ctx.api.add_user(draft)?;
    finish_submission(ctx, result, "User was not added")
}

fn handle_update(ctx: &mut AppContext, id: UserId, edits: Vec<(Field, String)>) -> Result<()> {
    let result = ctx.api.update_user(id, edits)?;
    finish_submission(ctx, result, "User was not updated")
}

fn handle_delete(ctx: &mut AppContext, id: UserId, yes: bool) -> Result<()> {
    let confirmed = yes || confirm("Are you sure you want to delete this record? [y/N] ")?;
    let result = ctx.api.delete_user(id, confirmed)?;
    print_messages(&result.messages);
    if confirmed {
        print!("{}", render_user_table(ctx.api.users()));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Print the outcome of a form submission. A rejected form fails the process.
fn finish_submission(ctx: &AppContext, result: CmdResult, rejected: &str) -> Result<()> {
    print_messages(&result.messages);
    if result.is_rejected() {
        return Err(UserdirError::Api(rejected.to_string()));
    }
    print!("{}", render_user_table(ctx.api.users()));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
