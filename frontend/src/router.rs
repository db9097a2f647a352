use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{ApiClient, UserId},
    pages::{HomePage, UsersPage},
    state::{
        flash::FlashProvider,
        session::{provide_session, LocalStorageSession},
    },
};

pub const HOME_ROUTE: &str = "/";
pub const USERS_ROUTE: &str = "/usuarios";
pub const USER_ADD_ROUTE: &str = "/usuarios/add";

pub const ROUTE_PATHS: &[&str] = &[HOME_ROUTE, USERS_ROUTE];

/// Edit form for one user; served by another page.
pub fn user_edit_path(id: UserId) -> String {
    format!("{}/edit/{}", USERS_ROUTE, id)
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_session(LocalStorageSession);
    view! {
        <FlashProvider>
            <Router>
                <Routes>
                    <Route path=HOME_ROUTE view=HomePage/>
                    <Route path=USERS_ROUTE view=UsersPage/>
                </Routes>
            </Router>
        </FlashProvider>
    }
}
