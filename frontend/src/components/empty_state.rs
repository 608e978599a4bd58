use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Font Awesome icon class, e.g. `fa-file-alt`.
    #[prop(optional, into)]
    icon: Option<String>,
) -> impl IntoView {
    let icon = icon.unwrap_or_else(|| "fa-folder-open".to_string());
    view! {
        <div class="bg-white rounded-lg shadow p-8 text-center">
            <i class=format!("fas {} text-5xl text-gray-400 mx-auto mb-4", icon)></i>
            <p class="text-gray-500">{message}</p>
        </div>
    }
}
