use crate::components::cards::StatCard;
use crate::pages::admin::types::SummaryCounters;
use leptos::*;

#[component]
pub fn SummaryCards(counters: Memo<SummaryCounters>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-4 gap-6 mb-8">
            <StatCard
                title="Total Requests"
                value=Signal::derive(move || counters.get().total_requests)
                icon="fa-file-alt"
            />
            <StatCard
                title="Withdrawals"
                value=Signal::derive(move || counters.get().total_withdrawals)
                icon="fa-wallet"
                accent="text-green-600"
            />
            <StatCard
                title="Pending Review"
                value=Signal::derive(move || counters.get().pending)
                icon="fa-clock"
                accent="text-yellow-600"
            />
            <StatCard
                title="Approved Today"
                value=Signal::derive(move || counters.get().approved_today)
                icon="fa-check"
                accent="text-green-600"
            />
        </div>
    }
}
