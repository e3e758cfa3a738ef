//! # Userdir Architecture
//!
//! Userdir is a **UI-agnostic client library** for a remote user directory (a REST
//! collection of users). The `userdir` binary is one client of it; the same core
//! could sit behind a TUI or a web front-end.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: owns the source, the UI state and config    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - fetch / create / update / delete flows                   │
//! │  - Drives the state container through explicit actions     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (remote/)                                     │
//! │  - Abstract UserSource trait                                │
//! │  - HttpSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! The "form" state of the directory (user list, whether a form is open and in which
//! mode, the draft being composed, validation errors, the user selected for editing
//! and the request currently in flight) lives in [`state::UiState`]. It only changes
//! through [`state::UiState::apply`], so every transition is named and testable.
//!
//! ## Failure Model
//!
//! Remote failures on fetch and create are logged through the `log` facade and
//! swallowed: the previous list is kept and the form is closed anyway. `Err` from the
//! API means a usage problem (no form open, unknown user, request already in flight)
//! or a local configuration problem.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts and never
//! exits the process. Confirmation for deletes is a plain `bool` argument.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: fetch, create, update and delete flows
//! - [`remote`]: Source abstraction and implementations
//! - [`state`]: UI state container and its actions
//! - [`validation`]: Draft validation rules
//! - [`model`]: Core data types (`User`, `DraftUser`, `Field`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod state;
pub mod validation;
