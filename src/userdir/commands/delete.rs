use crate::commands::{fetch, CmdMessage, CmdResult, MutationPolicy};
use crate::config::MutationMode;
use crate::error::Result;
use crate::model::UserId;
use crate::remote::UserSource;
use crate::state::{Action, RequestKind, UiState};

/// Delete a user once the caller has confirmed.
///
/// Without confirmation nothing happens. In simulated mode the intended deletion is
/// only logged; in remote mode it is sent once. Either way the list is refetched.
pub fn run<S: UserSource>(
    source: &S,
    state: &mut UiState,
    id: UserId,
    confirmed: bool,
    policy: MutationPolicy,
) -> Result<CmdResult> {
    if !confirmed {
        let mut result = CmdResult::default().with_listed_users(state.users().to_vec());
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let message = match policy.mode {
        MutationMode::Simulated => {
            log::info!("Deleting user with id {} (not sent)", id);
            CmdMessage::info(format!(
                "Deletion of user {} was not sent (simulated mutations)",
                id
            ))
        }
        MutationMode::Remote => {
            state.apply(Action::RequestStarted(RequestKind::Delete))?;
            let outcome = source.delete_user(id);
            state.apply(Action::RequestFinished)?;
            match outcome {
                Ok(status) if status.is_success() => {
                    log::info!("Deleted user with id {}", id);
                    CmdMessage::success(format!("User {} deleted", id))
                }
                Ok(status) => {
                    log::warn!("Deleting user {} was rejected with status {}", id, status);
                    CmdMessage::warning(format!("User {} was not deleted", id))
                }
                Err(e) => {
                    log::error!("Error deleting user {}: {}", id, e);
                    CmdMessage::warning(format!("User {} was not deleted", id))
                }
            }
        }
    };

    let affected: Vec<_> = state.users().iter().filter(|u| u.id == id).cloned().collect();
    let mut result = fetch::run(source, state)?.with_affected_users(affected);
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusCode;
    use crate::remote::memory::fixtures::SourceFixture;
    use crate::remote::memory::{InMemorySource, Request};

    fn loaded(source: &InMemorySource) -> UiState {
        let mut state = UiState::new();
        fetch::run(source, &mut state).unwrap();
        source.clear_requests();
        state
    }

    #[test]
    fn simulated_delete_only_refetches() {
        let source = SourceFixture::with_users(3).source;
        let mut state = loaded(&source);

        let result = run(&source, &mut state, 2, true, MutationPolicy::default()).unwrap();

        assert_eq!(source.requests(), vec![Request::List]);
        assert_eq!(state.users().len(), 3);
        assert_eq!(result.affected_users[0].id, 2);
        assert!(result.messages[0].content.contains("not sent"));
    }

    #[test]
    fn unconfirmed_delete_does_nothing() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);

        let result = run(&source, &mut state, 1, false, MutationPolicy::remote()).unwrap();

        assert!(source.requests().is_empty());
        assert_eq!(result.messages[0].content, "Deletion cancelled.");
        assert_eq!(result.listed_users.len(), 1);
    }

    #[test]
    fn remote_delete_sends_once_then_refetches() {
        let source = SourceFixture::with_users(2).source;
        let mut state = loaded(&source);

        run(&source, &mut state, 1, true, MutationPolicy::remote()).unwrap();

        assert_eq!(source.requests(), vec![Request::Delete(1), Request::List]);
        let ids: Vec<_> = state.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn remote_delete_failure_is_reported_and_refetches() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        source.set_fail_writes(true);

        let result = run(&source, &mut state, 1, true, MutationPolicy::remote()).unwrap();

        assert_eq!(source.list_count(), 1);
        assert_eq!(state.users().len(), 1);
        assert!(state.in_flight().is_none());
        assert!(result.messages[0].content.contains("not deleted"));
    }

    #[test]
    fn remote_delete_of_unknown_id_is_rejected_by_server() {
        let source = SourceFixture::with_users(1).source;
        let mut state = loaded(&source);
        source.set_write_status(StatusCode(404));

        let result = run(&source, &mut state, 42, true, MutationPolicy::remote()).unwrap();
        assert!(result.affected_users.is_empty());
        assert_eq!(source.list_count(), 1);
    }
}
