use crate::{api::UserId, components::layout::Layout};
use leptos::*;
use leptos_meta::Title;

use super::{components::list::UsersTable, layout::UsersFrame, view_model::use_users_view_model};

#[component]
pub fn UsersPanel() -> impl IntoView {
    let vm = use_users_view_model();
    let delete_action = vm.delete_action;
    let on_delete = Callback::new(move |user_id: UserId| delete_action.dispatch(user_id));

    view! {
        <Title text="Usuários" />
        <Layout>
            <UsersFrame>
                <UsersTable state=vm.state on_delete=on_delete />
            </UsersFrame>
        </Layout>
    }
}
