use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{AdminPage, HomePage, SubmitRequestPage, WithdrawalPage},
    state::toast::provide_toast,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/submit-request", "/withdrawal", "/admin"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toast();
    view! {
        <Title formatter=|page: String| if page.is_empty() { "CorpPortal".to_string() } else { format!("{} | CorpPortal", page) }/>
        <Router>
            <Routes>
                <Route path="/" view=HomeRoute/>
                <Route path="/submit-request" view=SubmitRequestRoute/>
                <Route path="/withdrawal" view=WithdrawalRoute/>
                <Route path="/admin" view=AdminRoute/>
                <Route path="/*any" view=HomeRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! { <Title text=""/><HomePage/> }
}

#[component]
fn SubmitRequestRoute() -> impl IntoView {
    view! { <Title text="Submit Request"/><SubmitRequestPage/> }
}

#[component]
fn WithdrawalRoute() -> impl IntoView {
    view! { <Title text="Withdrawal"/><WithdrawalPage/> }
}

#[component]
fn AdminRoute() -> impl IntoView {
    view! { <Title text="Admin Dashboard"/><AdminPage/> }
}
