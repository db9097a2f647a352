use crate::state::flash::use_flash;
use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="container-fluid mt-page">
            <main class="py-4">
                <FlashBanner/>
                {children()}
            </main>
        </div>
    }
}

/// Shows the pending flash notice, if any, with a dismiss button.
#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = use_flash();
    let success = Signal::derive(move || flash.get().success);
    let error = Signal::derive(move || flash.get().error);
    let dismiss = move |_| flash.update(|state| state.clear());

    view! {
        <Show when=move || success.get().is_some() || error.get().is_some()>
            <div class="flash-banner d-flex align-items-start gap-2" role="status">
                <div class="flex-grow-1">
                    {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                    {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                </div>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Fechar"
                    on:click=dismiss
                ></button>
            </div>
        </Show>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="d-flex align-items-center gap-2 p-4">
            <div class="spinner-border spinner-border-sm" role="status"></div>
            <p class="mb-0">{"Carregando..."}</p>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-danger text-danger mb-3" role="alert">
            <p class="mb-0">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-success mb-3" role="alert">
            <p class="mb-0">{message}</p>
        </div>
    }
}
