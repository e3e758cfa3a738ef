use crate::commands::{fetch, CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::UserSource;
use crate::state::{Action, FormMode, RequestKind, UiState};
use crate::validation::validate_draft;

/// Submit the add form.
///
/// An invalid draft is refused before any request: the errors are stored and the
/// form stays open. Otherwise the draft is sent once; whatever happens the form
/// closes and the draft resets, and only a success status triggers a refetch.
pub fn run<S: UserSource>(source: &S, state: &mut UiState) -> Result<CmdResult> {
    state.require_form(FormMode::Adding)?;

    let draft = state.draft().clone();
    let validation = validate_draft(&draft);
    if !validation.valid {
        log::debug!("Draft refused: {:?}", validation.errors);
        state.apply(Action::ValidationFailed(validation.errors.clone()))?;
        return Ok(CmdResult::rejected(validation.errors));
    }

    state.apply(Action::RequestStarted(RequestKind::Create))?;
    let outcome = source.create_user(&draft);
    state.apply(Action::RequestFinished)?;

    let created = match outcome {
        Ok(status) if status.is_success() => {
            log::info!("User added: {:?}", draft);
            true
        }
        Ok(status) => {
            log::warn!("Adding user was rejected with status {}", status);
            false
        }
        Err(e) => {
            log::error!("Error adding user: {}", e);
            false
        }
    };

    state.apply(Action::SubmissionFinished)?;

    if !created {
        return Ok(CmdResult::default().with_listed_users(state.users().to_vec()));
    }

    let mut result = fetch::run(source, state)?;
    result.add_message(CmdMessage::success(format!(
        "User added: {}",
        draft.full_name()
    )));
    Ok(result)
}
