//! # CLI Behavior
//!
//! This is **one possible UI client** for userdir, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, prompts and
//! output formatting.
//!
//! ## Sessions
//!
//! Each invocation loads the user list once, then performs its action:
//!
//! - `userdir` / `userdir list`: render the list.
//! - `userdir add --name N --lastname L --phone P`: open the add form, fill it and
//!   submit. Validation errors are printed and the process exits non-zero.
//! - `userdir update <id> [--name N] [--lastname L] [--phone P]`: open the update
//!   form for `id`, apply the given edits and save.
//! - `userdir delete <id>`: asks for confirmation unless `--yes` is given.
//! - `userdir config [key] [value]`: show or change configuration. Does not load
//!   the list.
//!
//! ## Logging
//!
//! Diagnostics from the library (failed fetches, swallowed create errors) go to
//! stderr through `env_logger`. Default level is `warn`; `-v` shows `info`, `-vv`
//! shows `debug`. `RUST_LOG` takes precedence.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Table and message formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
