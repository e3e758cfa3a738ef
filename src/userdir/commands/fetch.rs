use crate::commands::CmdResult;
use crate::error::Result;
use crate::remote::UserSource;
use crate::state::{Action, RequestKind, UiState};

/// Re-read the whole collection and replace the list.
///
/// Transport and parse failures are logged and the previous list is kept.
pub fn run<S: UserSource>(source: &S, state: &mut UiState) -> Result<CmdResult> {
    state.apply(Action::RequestStarted(RequestKind::Fetch))?;
    let outcome = source.list_users();
    state.apply(Action::RequestFinished)?;

    match outcome {
        Ok(users) => {
            log::info!("Fetched {} users", users.len());
            state.apply(Action::UsersLoaded(users))?;
        }
        Err(e) => log::error!("Error fetching users: {}", e),
    }

    Ok(CmdResult::default().with_listed_users(state.users().to_vec()))
}
