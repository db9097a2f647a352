use super::{
    repository::UsersRepository,
    utils::{UsersError, UsersViewState, DELETE_SUCCESS_MESSAGE},
};
use crate::{
    api::{ApiClient, UserId},
    state::{
        flash::{use_flash, FlashMessages},
        session::{require_admin, use_session, SessionProvider},
    },
    utils::navigation::Redirector,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub state: RwSignal<UsersViewState>,
    pub delete_action: Action<UserId, Result<(), UsersError>>,
}

/// Guards the session, then fetches the list into `state`.
///
/// A guard rejection returns before any request is made. Writes to a
/// disposed `state` are dropped.
pub async fn load_users(
    session: &dyn SessionProvider,
    repo: &UsersRepository,
    state: RwSignal<UsersViewState>,
) -> Result<(), UsersError> {
    let session = require_admin(session).map_err(|rejection| {
        log::info!("Users list blocked by session guard: {:?}", rejection);
        UsersError::from(rejection)
    })?;

    let outcome = repo.fetch_users(&session.token).await.map_err(|err| {
        log::warn!("Failed to load users: {} ({})", err, err.code);
        UsersError::FetchFailed
    });
    let result = outcome.as_ref().map(|_| ()).map_err(|err| *err);
    state.try_update(move |current| current.finish_loading(outcome));
    result
}

/// Deletes `user_id` on the server and, only on a 200, drops it from `state`.
pub async fn delete_user(
    session: &dyn SessionProvider,
    repo: &UsersRepository,
    state: RwSignal<UsersViewState>,
    user_id: UserId,
) -> Result<(), UsersError> {
    let token = session.token().ok_or_else(|| {
        log::info!("Delete of user {} blocked: no token", user_id);
        UsersError::AuthMissingOnDelete
    })?;

    match repo.delete_user(&token, user_id).await {
        Ok(()) => {
            state.try_update(|current| current.remove_user(user_id));
            Ok(())
        }
        Err(err) if err.is_transport() => {
            log::error!("Failed to delete user {}: {}", user_id, err);
            Err(UsersError::DeleteFailed)
        }
        Err(err) => {
            log::warn!("Delete of user {} rejected: {} ({})", user_id, err, err.code);
            Err(UsersError::DeleteFailed)
        }
    }
}

fn report_failure(err: UsersError, flash: RwSignal<FlashMessages>, redirector: &Redirector) {
    // FetchFailed is rendered inline from the view state.
    if err != UsersError::FetchFailed {
        flash.try_update(|messages| messages.set_error(err.to_string()));
    }
    if let Some(target) = err.redirect_target() {
        redirector.redirect(target);
    }
}

fn notify_delete_outcome(
    result: Result<(), UsersError>,
    flash: RwSignal<FlashMessages>,
    redirector: &Redirector,
) {
    match result {
        Ok(()) => {
            flash.try_update(|messages| messages.set_success(DELETE_SUCCESS_MESSAGE));
        }
        Err(err) => report_failure(err, flash, redirector),
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UsersRepository::new_with_client(Rc::new(api));
    let session = use_session();
    let flash = use_flash();
    let redirector = Redirector::capture();
    let state = create_rw_signal(UsersViewState::default());

    // Notices from an earlier visit do not carry over into this one.
    flash.try_update(|messages| messages.clear());

    // Once per mount; nothing re-triggers it.
    {
        let repo = repository.clone();
        let session = session.clone();
        let redirector = redirector.clone();
        spawn_local(async move {
            if let Err(err) = load_users(session.provider(), &repo, state).await {
                report_failure(err, flash, &redirector);
            }
        });
    }

    let delete_action = create_action(move |user_id: &UserId| {
        let repo = repository.clone();
        let session = session.clone();
        let redirector = redirector.clone();
        let user_id = *user_id;
        async move {
            let result = delete_user(session.provider(), &repo, state, user_id).await;
            notify_delete_outcome(result, flash, &redirector);
            result
        }
    });

    UsersViewModel {
        state,
        delete_action,
    }
}
