use crate::components::layout::{Layout, NavItem};
use leptos::*;

#[component]
pub fn AdminDashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout active=NavItem::Admin>
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Admin Dashboard"</h1>
                    <p class="text-gray-600">
                        "Manage and review all requests and withdrawal applications"
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
