use super::cards::{RequestCard, WithdrawalCard};
use crate::components::empty_state::EmptyState;
use crate::pages::admin::types::{ReviewCommand, TriageRecord, TriageTab, TriageView};
use leptos::*;

fn tab_class(tab: TriageTab, active: TriageTab) -> &'static str {
    if tab == active {
        "bg-white text-gray-900 shadow-sm"
    } else {
        "text-gray-500 hover:text-gray-700"
    }
}

#[component]
pub fn TriageTabs(
    active_tab: RwSignal<TriageTab>,
    filtered: Memo<TriageView>,
    on_view: Callback<TriageRecord>,
    on_review: Callback<ReviewCommand>,
    busy: Signal<bool>,
) -> impl IntoView {
    let tab_button = move |tab: TriageTab| {
        let count = move || match tab {
            TriageTab::Requests => filtered.with(|view| view.requests.len()),
            TriageTab::Withdrawals => filtered.with(|view| view.withdrawals.len()),
        };
        view! {
            <button
                type="button"
                role="tab"
                aria-selected=move || (active_tab.get() == tab).to_string()
                class=move || format!("rounded-sm px-3 py-1.5 text-sm font-medium transition-all {}", tab_class(tab, active_tab.get()))
                on:click=move |_| active_tab.set(tab)
            >
                {move || format!("{} ({})", tab.label(), count())}
            </button>
        }
    };

    view! {
        <div class="space-y-6">
            <div role="tablist" class="grid w-full md:w-96 grid-cols-2 rounded-md bg-gray-100 p-1">
                {tab_button(TriageTab::Requests)}
                {tab_button(TriageTab::Withdrawals)}
            </div>
            <div role="tabpanel" class="space-y-4">
                {move || match active_tab.get() {
                    TriageTab::Requests => {
                        let requests = filtered.with(|view| view.requests.clone());
                        if requests.is_empty() {
                            view! {
                                <EmptyState message="No requests found matching your criteria." icon="fa-file-alt"/>
                            }
                            .into_view()
                        } else {
                            requests
                                .into_iter()
                                .map(|record| view! {
                                    <RequestCard record=record on_view=on_view on_review=on_review busy=busy/>
                                })
                                .collect_view()
                        }
                    }
                    TriageTab::Withdrawals => {
                        let withdrawals = filtered.with(|view| view.withdrawals.clone());
                        if withdrawals.is_empty() {
                            view! {
                                <EmptyState
                                    message="No withdrawal applications found matching your criteria."
                                    icon="fa-wallet"
                                />
                            }
                            .into_view()
                        } else {
                            withdrawals
                                .into_iter()
                                .map(|record| view! {
                                    <WithdrawalCard record=record on_view=on_view on_review=on_review busy=busy/>
                                })
                                .collect_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin::{types::StatusFilter, utils::filter_records};
    use crate::test_support::helpers::seed_records;
    use crate::test_support::ssr::render_to_string;

    fn render(term: &'static str, tab: TriageTab) -> String {
        render_to_string(move || {
            let records = seed_records();
            let filtered = create_memo(move |_| filter_records(&records, term, StatusFilter::All));
            let active_tab = create_rw_signal(tab);
            view! {
                <TriageTabs
                    active_tab=active_tab
                    filtered=filtered
                    on_view=Callback::new(|_| {})
                    on_review=Callback::new(|_| {})
                    busy=Signal::derive(|| false)
                />
            }
        })
    }

    #[test]
    fn tab_headers_show_partition_counts() {
        let html = render("", TriageTab::Requests);
        assert!(html.contains("General Requests (2)"));
        assert!(html.contains("Withdrawals (2)"));
        assert!(html.contains("New laptop request"));
        assert!(!html.contains("Partial Withdrawal"));
    }

    #[test]
    fn withdrawals_tab_lists_withdrawals() {
        let html = render("", TriageTab::Withdrawals);
        assert!(html.contains("Partial Withdrawal"));
        assert!(html.contains("Emergency Withdrawal"));
        assert!(!html.contains("New laptop request"));
    }

    #[test]
    fn unmatched_search_shows_empty_state_per_tab() {
        let requests = render("nothing matches this", TriageTab::Requests);
        assert!(requests.contains("General Requests (0)"));
        assert!(requests.contains("No requests found matching your criteria."));

        let withdrawals = render("nothing matches this", TriageTab::Withdrawals);
        assert!(withdrawals.contains("No withdrawal applications found matching your criteria."));
    }

    #[test]
    fn laptop_search_empties_withdrawals_tab() {
        let html = render("laptop", TriageTab::Withdrawals);
        assert!(html.contains("General Requests (1)"));
        assert!(html.contains("Withdrawals (0)"));
        assert!(html.contains("No withdrawal applications found matching your criteria."));
    }

    #[test]
    fn active_tab_is_highlighted() {
        assert!(tab_class(TriageTab::Requests, TriageTab::Requests).contains("bg-white"));
        assert!(tab_class(TriageTab::Withdrawals, TriageTab::Requests).contains("text-gray-500"));
    }
}
