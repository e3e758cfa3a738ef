//! # UI State Container
//!
//! All mutable client state lives in [`UiState`] and changes only through
//! [`UiState::apply`]. Each [`Action`] names one transition; invalid transitions
//! (editing a form that is not open, selecting an unknown user, starting a second
//! request while one is in flight) are rejected with an error and leave the state
//! untouched.
//!
//! ## Form Lifecycle
//!
//! ```text
//!            OpenAdd                      OpenUpdate(id)
//!   closed ───────────▶ open(Adding)     closed ───────────▶ open(Updating, selected)
//!     ▲                    │                ▲                    │
//!     │  SubmissionFinished│                │     CloseModal     │
//!     └────────────────────┘                └────────────────────┘
//! ```
//!
//! The draft survives closing the add form without submitting; it is only reset by
//! `SubmissionFinished`. The selected user is a working copy: edits to it never
//! touch the list, which only changes on `UsersLoaded`.

use crate::error::{Result, UserdirError};
use crate::model::{DraftUser, Field, User, UserId};
use crate::validation::ValidationErrors;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    #[default]
    Updating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Fetch => "fetch",
            RequestKind::Create => "create",
            RequestKind::Update => "update",
            RequestKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the list wholesale with a fresh read.
    UsersLoaded(Vec<User>),
    OpenAdd,
    OpenUpdate(UserId),
    CloseModal,
    EditDraft(Field, String),
    EditSelected(Field, String),
    ValidationFailed(ValidationErrors),
    /// A create attempt ended, whatever its outcome.
    SubmissionFinished,
    RequestStarted(RequestKind),
    RequestFinished,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    users: Vec<User>,
    modal_open: bool,
    mode: FormMode,
    draft: DraftUser,
    errors: ValidationErrors,
    selected: Option<User>,
    in_flight: Option<RequestKind>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &DraftUser {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn in_flight(&self) -> Option<RequestKind> {
        self.in_flight
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        log::debug!("state: {:?}", action);
        match action {
            Action::UsersLoaded(users) => {
                self.users = users;
            }
            Action::OpenAdd => {
                self.mode = FormMode::Adding;
                self.modal_open = true;
            }
            Action::OpenUpdate(id) => {
                let user = self
                    .users
                    .iter()
                    .find(|u| u.id == id)
                    .cloned()
                    .ok_or_else(|| UserdirError::Api(format!("User {} not found", id)))?;
                self.selected = Some(user);
                self.errors = ValidationErrors::default();
                self.mode = FormMode::Updating;
                self.modal_open = true;
            }
            Action::CloseModal => {
                self.modal_open = false;
                self.selected = None;
                self.errors = ValidationErrors::default();
            }
            Action::EditDraft(field, value) => {
                self.require_form(FormMode::Adding)?;
                self.draft.set_field(field, value);
            }
            Action::EditSelected(field, value) => {
                self.require_form(FormMode::Updating)?;
                let selected = self
                    .selected
                    .as_mut()
                    .ok_or_else(|| UserdirError::Api("No user selected".to_string()))?;
                selected.set_field(field, value);
            }
            Action::ValidationFailed(errors) => {
                self.errors = errors;
            }
            Action::SubmissionFinished => {
                self.modal_open = false;
                self.draft = DraftUser::default();
                self.errors = ValidationErrors::default();
            }
            Action::RequestStarted(kind) => {
                if let Some(current) = self.in_flight {
                    return Err(UserdirError::Busy(current));
                }
                self.in_flight = Some(kind);
            }
            Action::RequestFinished => {
                self.in_flight = None;
            }
        }
        Ok(())
    }

    /// Errors unless the form is open in the given mode.
    pub fn require_form(&self, mode: FormMode) -> Result<()> {
        if self.modal_open && self.mode == mode {
            return Ok(());
        }
        let name = match mode {
            FormMode::Adding => "add",
            FormMode::Updating => "update",
        };
        Err(UserdirError::Api(format!("The {} form is not open", name)))
    }
}
