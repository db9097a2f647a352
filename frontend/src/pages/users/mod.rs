use leptos::*;

pub mod components;
pub mod layout;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::UsersPanel;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! { <UsersPanel /> }
}
