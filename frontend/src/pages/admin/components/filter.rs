use crate::pages::admin::{types::StatusFilter, utils::TriageFilterState};
use leptos::*;

#[component]
pub fn TriageFilter(filter_state: TriageFilterState) -> impl IntoView {
    let search = filter_state.search_signal();
    let status = filter_state.status_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 mb-6">
            <div class="flex flex-col md:flex-row gap-4">
                <div class="flex-1 relative">
                    <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"></i>
                    <input
                        type="search"
                        aria-label="Search records"
                        class="w-full h-10 border border-gray-300 rounded-md pl-10 pr-3"
                        placeholder="Search by name, ID, or subject..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <select
                    aria-label="Filter by status"
                    class="w-full md:w-48 h-10 border border-gray-300 rounded-md px-3 bg-white"
                    prop:value=move || status.get()
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    {StatusFilter::OPTIONS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_search_and_status_options() {
        let html = render_to_string(move || {
            let state = TriageFilterState::new();
            view! { <TriageFilter filter_state=state/> }
        });
        assert!(html.contains("Search by name, ID, or subject..."));
        for (value, label) in StatusFilter::OPTIONS {
            assert!(html.contains(&format!("value=\"{}\"", value)));
            assert!(html.contains(label));
        }
    }
}
