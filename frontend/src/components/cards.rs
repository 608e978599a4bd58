use leptos::*;

/// Single counter tile used in dashboard summaries.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<usize>,
    /// Font Awesome icon class, e.g. `fa-file-alt`.
    #[prop(into)]
    icon: String,
    #[prop(optional, into)] accent: Option<String>,
) -> impl IntoView {
    let accent = accent.unwrap_or_else(|| "text-blue-600".to_string());
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 flex items-center justify-between">
                <div>
                    <dt class="text-sm font-medium text-gray-600">{title}</dt>
                    <dd class="mt-1 text-2xl font-bold text-gray-900">{move || value.get()}</dd>
                </div>
                <i class=format!("fas {} text-2xl {}", icon, accent)></i>
            </div>
        </div>
    }
}

/// Titled white panel wrapping form content.
#[component]
pub fn FormCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow-lg rounded-lg">
            <div class="px-6 pt-6 pb-4">
                <h2 class="text-2xl font-semibold text-gray-900">{title}</h2>
                <p class="mt-1 text-sm text-gray-600">{description}</p>
            </div>
            <div class="px-6 pb-6">{children()}</div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_value() {
        let html = render_to_string(move || {
            let count = create_rw_signal(42usize);
            view! { <StatCard title="Pending Review" value=count icon="fa-clock" accent="text-yellow-600"/> }
        });
        assert!(html.contains("Pending Review"));
        assert!(html.contains("42"));
        assert!(html.contains("text-yellow-600"));
    }

    #[test]
    fn form_card_wraps_children() {
        let html = render_to_string(move || {
            view! {
                <FormCard title="Request Details" description="Please provide detailed information">
                    <p>"inner"</p>
                </FormCard>
            }
        });
        assert!(html.contains("Request Details"));
        assert!(html.contains("inner"));
    }
}
