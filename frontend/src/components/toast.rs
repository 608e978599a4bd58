use crate::state::toast::{use_toast, ToastVariant};
use leptos::*;

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "bg-white border border-gray-200 text-gray-900",
        ToastVariant::Destructive => "bg-red-600 border border-red-700 text-white",
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toast = use_toast();
    let current = toast.current();
    view! {
        <div class="fixed bottom-0 right-0 z-[100] flex flex-col p-4 w-full md:max-w-[420px]" aria-live="polite">
            {move || {
                current
                    .get()
                    .map(|item| {
                        view! {
                            <div
                                role="status"
                                class=format!("relative rounded-md p-6 pr-8 shadow-lg {}", toast_class(item.variant))
                            >
                                <div class="text-sm font-semibold">{item.title.clone()}</div>
                                <div class="text-sm opacity-90 mt-1">{item.description.clone()}</div>
                                <button
                                    type="button"
                                    aria-label="Close"
                                    class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                                    on:click=move |_| toast.dismiss()
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
