//! # Command Layer
//!
//! Each flow of the directory client lives in its own submodule as plain functions
//! over a [`UserSource`](crate::remote::UserSource) and the
//! [`UiState`](crate::state::UiState) container.
//!
//! ## Role and Responsibilities
//!
//! - Talk to the source, one request at a time, marking it in flight in the state
//! - Move the state through its actions (open/close forms, load users, reset drafts)
//! - Log remote failures and swallow them where the flow says so
//! - Return a structured [`CmdResult`]
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or prompts. Diagnostics go through `log`
//! - **Confirmation**: delete takes the user's answer as an argument
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Refetch
//!
//! A full re-read of the collection is the only way local state reconciles with the
//! server. Create refetches after a success status; update always refetches after
//! closing the form; delete refetches after confirmation.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemorySource`, which records every request, so they can
//! assert exactly which calls a flow made.
//!
//! ## Command Modules
//!
//! - [`fetch`]: Read and replace the user list
//! - [`create`]: Validate and submit the add form
//! - [`update`]: Save the update form
//! - [`delete`]: Delete a user after confirmation
//! - [`config`]: Show and change configuration

use crate::config::{ClientConfig, MutationMode};
use crate::model::User;
use crate::validation::ValidationErrors;

pub mod config;
pub mod create;
pub mod delete;
pub mod fetch;
pub mod update;

/// How update and delete behave; derived from [`ClientConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationPolicy {
    pub mode: MutationMode,
    pub validate_updates: bool,
}

impl MutationPolicy {
    pub fn remote() -> Self {
        Self {
            mode: MutationMode::Remote,
            ..Default::default()
        }
    }
}

impl From<&ClientConfig> for MutationPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            mode: config.mutations,
            validate_updates: config.validate_updates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Users a mutation targeted, as submitted
    pub affected_users: Vec<User>,
    /// The list after the command, in server order
    pub listed_users: Vec<User>,
    /// Set when a form submission was refused by validation
    pub validation_errors: Option<ValidationErrors>,
    pub config: Option<ClientConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_users(mut self, users: Vec<User>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// A refused submission: the errors plus one error message per invalid field.
    pub fn rejected(errors: ValidationErrors) -> Self {
        let mut result = CmdResult::default();
        for message in errors.messages() {
            result.add_message(CmdMessage::error(message));
        }
        result.validation_errors = Some(errors);
        result
    }

    pub fn is_rejected(&self) -> bool {
        self.validation_errors.is_some()
    }
}
