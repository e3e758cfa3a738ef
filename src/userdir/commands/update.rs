use crate::commands::{fetch, CmdMessage, CmdResult, MutationPolicy};
use crate::config::MutationMode;
use crate::error::{Result, UserdirError};
use crate::remote::UserSource;
use crate::state::{Action, FormMode, RequestKind, UiState};
use crate::validation::validate_draft;

/// Save the update form.
///
/// In simulated mode nothing is sent: the intended update is logged, the form
/// closes and the list is refetched, so the edits are dropped. In remote mode the
/// edited user is sent once before the same close-and-refetch. Validation only runs
/// when the policy asks for it.
pub fn run<S: UserSource>(
    source: &S,
    state: &mut UiState,
    policy: MutationPolicy,
) -> Result<CmdResult> {
    state.require_form(FormMode::Updating)?;
    let selected = state
        .selected()
        .cloned()
        .ok_or_else(|| UserdirError::Api("No user selected".to_string()))?;

    if policy.validate_updates {
        let validation = validate_draft(&selected.to_draft());
        if !validation.valid {
            state.apply(Action::ValidationFailed(validation.errors.clone()))?;
            return Ok(CmdResult::rejected(validation.errors));
        }
    }

    let message = match policy.mode {
        MutationMode::Simulated => {
            log::info!("Updating user (not sent): {:?}", selected);
            CmdMessage::info(format!(
                "Update of user {} was not sent (simulated mutations)",
                selected.id
            ))
        }
        MutationMode::Remote => {
            state.apply(Action::RequestStarted(RequestKind::Update))?;
            let outcome = source.update_user(&selected);
            state.apply(Action::RequestFinished)?;
            match outcome {
                Ok(status) if status.is_success() => {
                    log::info!("User updated: {:?}", selected);
                    CmdMessage::success(format!("User updated: {}", selected.full_name()))
                }
                Ok(status) => {
                    log::warn!("Updating user {} was rejected with status {}", selected.id, status);
                    CmdMessage::warning(format!("User {} was not updated", selected.id))
                }
                Err(e) => {
                    log::error!("Error updating user {}: {}", selected.id, e);
                    CmdMessage::warning(format!("User {} was not updated", selected.id))
                }
            }
        }
    };

    state.apply(Action::CloseModal)?;
    let mut result = fetch::run(source, state)?.with_affected_users(vec![selected]);
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fetch;
    use crate::model::{Field, StatusCode};
    use crate::remote::memory::fixtures::SourceFixture;
    use crate::remote::memory::{InMemorySource, Request};
    use crate::validation::NAME_ERROR;

    fn loaded(source: &InMemorySource) -> UiState {
        let mut state = UiState::new();
        fetch::run(source, &mut state).unwrap();
        source.clear_requests();
        state
    }

    #[test]
    fn simulated_update_discards_edits_and_refetches_once() {
        let source = SourceFixture::with_users(2).source;
        let mut state = loaded(&source);
        state.apply(Action::OpenUpdate(2)).unwrap();
        state
            .apply(Action::EditSelected(Field::Name, "Changed".into()))
            .unwrap();

        let result = run(&source, &mut state, MutationPolicy::default()).unwrap();

        assert_eq!(source.requests(), vec![Request::List]);
        assert!(!state.is_modal_open());
        assert!(state.selected().is_none());
        assert_eq!(state.users()[1].name, "UserB");
        assert_eq!(result.affected_users[0].name, "Changed");
        assert!(result.messages[0].content.contains("not sent"));
    }

    #[test]
    fn simulated_update_skips_validation_by_default() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        state.apply(Action::OpenUpdate(1)).unwrap();
        state
            .apply(Action::EditSelected(Field::Name, "".into()))
            .unwrap();

        let result = run(&source, &mut state, MutationPolicy::default()).unwrap();
        assert!(!result.is_rejected());
        assert_eq!(source.list_count(), 1);
    }

    #[test]
    fn validated_update_refuses_invalid_edit() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        state.apply(Action::OpenUpdate(1)).unwrap();
        state
            .apply(Action::EditSelected(Field::Name, "R2D2".into()))
            .unwrap();

        let policy = MutationPolicy {
            validate_updates: true,
            ..MutationPolicy::remote()
        };
        let result = run(&source, &mut state, policy).unwrap();

        assert!(result.is_rejected());
        assert!(source.requests().is_empty());
        assert!(state.is_modal_open());
        assert_eq!(state.errors().name, NAME_ERROR);
    }

    #[test]
    fn rejected_update_errors_do_not_reach_add_form() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        let policy = MutationPolicy {
            validate_updates: true,
            ..MutationPolicy::default()
        };
        state.apply(Action::OpenUpdate(1)).unwrap();
        state
            .apply(Action::EditSelected(Field::Name, "R2".into()))
            .unwrap();
        assert!(run(&source, &mut state, policy).unwrap().is_rejected());

        state
            .apply(Action::EditSelected(Field::Name, "Ok".into()))
            .unwrap();
        assert!(!run(&source, &mut state, policy).unwrap().is_rejected());

        state.apply(Action::OpenAdd).unwrap();
        assert!(state.errors().is_empty());
    }

    #[test]
    fn remote_update_sends_patch_then_refetches() {
        let source = SourceFixture::with_users(2).source;
        let mut state = loaded(&source);
        state.apply(Action::OpenUpdate(1)).unwrap();
        state
            .apply(Action::EditSelected(Field::Phone, "999".into()))
            .unwrap();
        let edited = state.selected().cloned().unwrap();

        run(&source, &mut state, MutationPolicy::remote()).unwrap();

        assert_eq!(
            source.requests(),
            vec![Request::Update(edited), Request::List]
        );
        assert_eq!(state.users()[0].phone, "999");
    }

    #[test]
    fn remote_update_failure_still_closes_and_refetches() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        source.set_write_status(StatusCode(404));
        state.apply(Action::OpenUpdate(1)).unwrap();

        let result = run(&source, &mut state, MutationPolicy::remote()).unwrap();

        assert!(!state.is_modal_open());
        assert_eq!(source.list_count(), 1);
        assert!(result.messages[0].content.contains("not updated"));
    }

    #[test]
    fn requires_open_update_form() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        state.apply(Action::OpenAdd).unwrap();

        assert!(run(&source, &mut state, MutationPolicy::default()).is_err());
        assert!(source.requests().is_empty());
    }
}
