use crate::router::USER_ADD_ROUTE;
use leptos::*;

#[component]
pub fn UsersFrame(children: Children) -> impl IntoView {
    view! {
        <div>
            <div class="d-flex justify-content-between align-items-center">
                <div>
                    <h2 class="d-inline">{"Usuários"}</h2>
                    <a href=USER_ADD_ROUTE class="btn btn-outline-primary ms-5 mb-2">
                        {"Novo Usuário"}
                    </a>
                </div>
            </div>
            <div>{children()}</div>
        </div>
    }
}
