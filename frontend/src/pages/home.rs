use crate::{components::layout::Layout, router::USERS_ROUTE};
use leptos::*;

/// Landing page at `/`; the guarded pages send visitors here when the session
/// is missing, so it also shows any pending flash notice.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-5">
                <h1 class="display-5">{"Administração"}</h1>
                <p class="text-muted">{"Gerenciamento de usuários da igreja"}</p>
                <a href=USERS_ROUTE class="btn btn-primary mt-3">
                    {"Usuários"}
                </a>
            </div>
        </Layout>
    }
}
