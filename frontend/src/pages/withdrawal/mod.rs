use leptos::*;

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::WithdrawalPanel;

#[component]
pub fn WithdrawalPage() -> impl IntoView {
    view! { <WithdrawalPanel/> }
}
