use crate::{
    api::{RoleResponse, UserId, UserRecord},
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::users::utils::UsersViewState,
    router::user_edit_path,
};
use leptos::*;

#[component]
pub fn UsersTable(
    #[prop(into)] state: Signal<UsersViewState>,
    on_delete: Callback<UserId>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let users = Signal::derive(move || state.with(|s| s.users.clone()));

    move || {
        if loading.get() {
            view! { <LoadingSpinner /> }.into_view()
        } else if let Some(message) = error.get() {
            view! { <ErrorMessage message=message /> }.into_view()
        } else {
            view! {
                <table class="table table-hover">
                    <thead>
                        <tr>
                            <th scope="col" class="col-sm-2">{"Nome"}</th>
                            <th scope="col" class="col-sm-2">{"E-mail"}</th>
                            <th scope="col" class="col-sm-2">{"Igreja"}</th>
                            <th scope="col" class="col-sm-3">{"Roles"}</th>
                            <th scope="col" class="col-sm-2">{"Telefone"}</th>
                            <th scope="col" class="col-buttons"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || users.with(|users| users.is_empty())>
                            <tr>
                                <td colspan="6" class="text-muted">{"Nenhum usuário encontrado."}</td>
                            </tr>
                        </Show>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user: UserRecord| view! { <UserRow user=user on_delete=on_delete /> }
                        />
                    </tbody>
                </table>
            }
            .into_view()
        }
    }
}

#[component]
fn UserRow(user: UserRecord, on_delete: Callback<UserId>) -> impl IntoView {
    let id = user.id;
    view! {
        <tr>
            <td>{user.username}</td>
            <td>{user.email}</td>
            <td>{user.church}</td>
            <td><RoleBadges roles=user.roles /></td>
            <td>{user.phone}</td>
            <td>
                <a href=user_edit_path(id) class="btn btn-outline-primary ms-5 mb-2">
                    {"Editar"}
                </a>
                <button
                    type="button"
                    class="btn btn-sm btn-danger"
                    on:click=move |_| on_delete.call(id)
                >
                    {"Excluir"}
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn RoleBadges(roles: Vec<RoleResponse>) -> impl IntoView {
    if roles.is_empty() {
        view! { <span class="text-muted">{"Sem roles"}</span> }.into_view()
    } else {
        roles
            .into_iter()
            .map(|role| view! { <span class="badge bg-secondary me-1">{role.name}</span> })
            .collect_view()
    }
}
