use super::badges::{AmountBadge, PriorityBadge, StatusBadge};
use crate::api::RecordStatus;
use crate::components::common::{Button, ButtonSize, ButtonVariant};
use crate::pages::admin::types::{
    RequestRecord, ReviewCommand, ReviewDecision, TriageRecord, WithdrawalRecord,
};
use leptos::*;

#[component]
fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <p>
            <strong>{label}{": "}</strong>
            {value}
        </p>
    }
}

/// View Details always; Approve and Reject only while the record is pending.
#[component]
fn ReviewActions(
    record: TriageRecord,
    on_view: Callback<TriageRecord>,
    on_review: Callback<ReviewCommand>,
    busy: Signal<bool>,
) -> impl IntoView {
    let id = record.id().to_string();
    let reviewable = record.status() == RecordStatus::Pending;
    let approve_id = id.clone();
    let reject_id = id;
    view! {
        <div class="flex flex-col md:flex-row gap-2">
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Small
                icon="fa-eye"
                on:click=move |_| on_view.call(record.clone())
            >
                "View Details"
            </Button>
            {reviewable.then(|| view! {
                <Button
                    variant=ButtonVariant::Success
                    size=ButtonSize::Small
                    icon="fa-check"
                    disabled=busy
                    on:click=move |_| on_review.call(ReviewCommand::new(approve_id.clone(), ReviewDecision::Approve))
                >
                    "Approve"
                </Button>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Small
                    icon="fa-times"
                    disabled=busy
                    on:click=move |_| on_review.call(ReviewCommand::new(reject_id.clone(), ReviewDecision::Reject))
                >
                    "Reject"
                </Button>
            })}
        </div>
    }
}

#[component]
pub fn RequestCard(
    record: RequestRecord,
    on_view: Callback<TriageRecord>,
    on_review: Callback<ReviewCommand>,
    busy: Signal<bool>,
) -> impl IntoView {
    let RequestRecord {
        id,
        name,
        department,
        subject,
        request_type,
        priority,
        status,
        date,
        ..
    } = record.clone();
    view! {
        <div class="bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-2">
                        <h3 class="font-semibold text-lg text-gray-900">{subject}</h3>
                        <StatusBadge status=status/>
                        <PriorityBadge priority=priority/>
                    </div>
                    <div class="text-sm text-gray-600 space-y-1">
                        <Field label="ID" value=id/>
                        <Field label="Name" value=name/>
                        <Field label="Department" value=department/>
                        <Field label="Type" value=request_type/>
                        <Field label="Date" value=date.to_string()/>
                    </div>
                </div>
                <ReviewActions record=record.into() on_view=on_view on_review=on_review busy=busy/>
            </div>
        </div>
    }
}

#[component]
pub fn WithdrawalCard(
    record: WithdrawalRecord,
    on_view: Callback<TriageRecord>,
    on_review: Callback<ReviewCommand>,
    busy: Signal<bool>,
) -> impl IntoView {
    let heading = record.heading();
    let WithdrawalRecord {
        id,
        name,
        employee_id,
        amount,
        reason,
        status,
        date,
        bank_name,
        account_number,
        ..
    } = record.clone();
    view! {
        <div class="bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-2">
                        <h3 class="font-semibold text-lg text-gray-900">{heading}</h3>
                        <StatusBadge status=status/>
                        <AmountBadge amount=amount/>
                    </div>
                    <div class="text-sm text-gray-600 space-y-1">
                        <Field label="ID" value=id/>
                        <Field label="Name" value=name/>
                        <Field label="Employee ID" value=employee_id/>
                        <Field label="Bank" value=bank_name/>
                        <Field label="Account" value=account_number/>
                        <Field label="Reason" value=reason/>
                        <Field label="Date" value=date.to_string()/>
                    </div>
                </div>
                <ReviewActions record=record.into() on_view=on_view on_review=on_review busy=busy/>
            </div>
        </div>
    }
}
