use crate::api::RecordStatus;
use crate::pages::admin::types::Priority;
use leptos::*;

const BADGE_BASE: &str =
    "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold";

fn status_badge_style(status: RecordStatus) -> (&'static str, &'static str) {
    match status {
        RecordStatus::Pending => ("text-yellow-600 border-yellow-600", "fa-clock"),
        RecordStatus::Approved => ("text-green-600 border-green-600", "fa-check"),
        RecordStatus::Rejected => ("text-red-600 border-red-600", "fa-times"),
    }
}

fn priority_badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent | Priority::High => "bg-red-600 border-transparent text-white",
        Priority::Medium => "text-orange-600 border-orange-600",
        Priority::Low => "text-blue-600 border-blue-600",
    }
}

#[component]
pub fn StatusBadge(status: RecordStatus) -> impl IntoView {
    let (class, icon) = status_badge_style(status);
    view! {
        <span class=format!("{} {}", BADGE_BASE, class)>
            <i class=format!("fas {} mr-1", icon)></i>
            {status.label()}
        </span>
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <span class=format!("{} {}", BADGE_BASE, priority_badge_class(priority))>
            {(priority == Priority::Urgent).then(|| view! { <i class="fas fa-exclamation-triangle mr-1"></i> })}
            {priority.label()}
        </span>
    }
}

#[component]
pub fn AmountBadge(#[prop(into)] amount: String) -> impl IntoView {
    view! {
        <span class=format!("{} text-green-600 border-green-600", BADGE_BASE)>{amount}</span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_badge_uses_status_palette() {
        let html = render_to_string(move || view! { <StatusBadge status=RecordStatus::Pending/> });
        assert!(html.contains("Pending"));
        assert!(html.contains("text-yellow-600"));
        assert_eq!(status_badge_style(RecordStatus::Rejected).1, "fa-times");
    }

    #[test]
    fn urgent_priority_gets_warning_icon() {
        let urgent = render_to_string(move || view! { <PriorityBadge priority=Priority::Urgent/> });
        assert!(urgent.contains("fa-exclamation-triangle"));
        let low = render_to_string(move || view! { <PriorityBadge priority=Priority::Low/> });
        assert!(!low.contains("fa-exclamation-triangle"));
        assert!(low.contains("text-blue-600"));
    }
}
