use crate::components::error::InlineErrorMessage;
use crate::pages::admin::{
    components::{
        detail_modal::RecordDetailModal, filter::TriageFilter, summary::SummaryCards,
        tabs::TriageTabs,
    },
    layout::AdminDashboardFrame,
    view_model::use_admin_view_model,
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let load_error = vm.load_error;
    let action_error = vm.action_error;

    view! {
        <AdminDashboardFrame>
            <InlineErrorMessage error=Signal::derive(move || load_error.get())/>
            <SummaryCards counters=vm.counters/>
            <TriageFilter filter_state=vm.filter_state/>
            <InlineErrorMessage error=Signal::derive(move || action_error.get())/>
            <TriageTabs
                active_tab=vm.active_tab
                filtered=vm.filtered
                on_view=vm.on_view_details()
                on_review=vm.on_review()
                busy=vm.review_pending()
            />
            <RecordDetailModal selected=vm.selected/>
        </AdminDashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_panel_renders_dashboard() {
        let html = render_to_string(move || view! { <AdminPanel/> });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Total Requests"));
        assert!(html.contains("Search by name, ID, or subject..."));
        assert!(html.contains("General Requests (2)"));
        assert!(html.contains("Withdrawals (2)"));
        assert!(html.contains("New laptop request"));
        assert!(!html.contains("role=\"dialog\""));
    }
}
