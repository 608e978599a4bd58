use leptos::*;

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::SubmitRequestPanel;

#[component]
pub fn SubmitRequestPage() -> impl IntoView {
    view! { <SubmitRequestPanel/> }
}
