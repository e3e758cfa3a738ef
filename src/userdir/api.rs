//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all userdir operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! [`UserDirectory`] owns the three things a UI session needs:
//! - the [`UserSource`] to talk to,
//! - the [`UiState`] container,
//! - the [`MutationPolicy`] derived from configuration.
//!
//! Form interactions map one-to-one onto state actions (`open_add`, `edit_draft`,
//! `open_update`, `edit_selected`, `close_modal`); submissions dispatch to the
//! command modules.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr or prompts
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over UserSource
//!
//! - Production: `UserDirectory<HttpSource>`
//! - Testing: `UserDirectory<InMemorySource>`

use crate::commands::{self, MutationPolicy};
use crate::error::Result;
use crate::model::{DraftUser, Field, User, UserId};
use crate::remote::UserSource;
use crate::state::{Action, UiState};
use std::path::{Path, PathBuf};

/// The main API facade for userdir operations.
pub struct UserDirectory<S: UserSource> {
    source: S,
    state: UiState,
    policy: MutationPolicy,
    config_dir: PathBuf,
}

impl<S: UserSource> UserDirectory<S> {
    pub fn new(source: S, policy: MutationPolicy, config_dir: PathBuf) -> Self {
        Self {
            source,
            state: UiState::new(),
            policy,
            config_dir,
        }
    }

    /// Initial load. Failures are logged and leave the list empty.
    pub fn start(&mut self) -> Result<commands::CmdResult> {
        commands::fetch::run(&self.source, &mut self.state)
    }

    pub fn users(&self) -> &[User] {
        self.state.users()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> MutationPolicy {
        self.policy
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    // --- Add form ---

    pub fn open_add(&mut self) -> Result<()> {
        self.state.apply(Action::OpenAdd)
    }

    pub fn edit_draft(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.state.apply(Action::EditDraft(field, value.into()))
    }

    pub fn save_add(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&self.source, &mut self.state)
    }

    /// Open the add form, fill every field from `draft` and submit.
    pub fn add_user(&mut self, draft: DraftUser) -> Result<commands::CmdResult> {
        self.open_add()?;
        self.edit_draft(Field::Name, draft.name)?;
        self.edit_draft(Field::Lastname, draft.lastname)?;
        self.edit_draft(Field::Phone, draft.phone)?;
        self.save_add()
    }

    // --- Update form ---

    pub fn open_update(&mut self, id: UserId) -> Result<()> {
        self.state.apply(Action::OpenUpdate(id))
    }

    pub fn edit_selected(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.state.apply(Action::EditSelected(field, value.into()))
    }

    pub fn save_update(&mut self) -> Result<commands::CmdResult> {
        commands::update::run(&self.source, &mut self.state, self.policy)
    }

    /// Open the update form for `id`, apply `edits` in order and save.
    pub fn update_user(
        &mut self,
        id: UserId,
        edits: Vec<(Field, String)>,
    ) -> Result<commands::CmdResult> {
        self.open_update(id)?;
        for (field, value) in edits {
            self.edit_selected(field, value)?;
        }
        self.save_update()
    }

    pub fn close_modal(&mut self) -> Result<()> {
        self.state.apply(Action::CloseModal)
    }

    // --- Delete ---

    pub fn delete_user(&mut self, id: UserId, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&self.source, &mut self.state, id, confirmed, self.policy)
    }

    // --- Config ---

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
