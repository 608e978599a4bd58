use super::badges::StatusBadge;
use crate::pages::admin::types::TriageRecord;
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[component]
pub fn RecordDetailModal(selected: RwSignal<Option<TriageRecord>>) -> impl IntoView {
    let close_ref = create_node_ref::<html::Button>();
    #[cfg(target_arch = "wasm32")]
    let previously_focused = store_value(None::<web_sys::HtmlElement>);

    let close = move || {
        selected.set(None);
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = previously_focused.get_value() {
            let _ = element.focus();
            previously_focused.set_value(None);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    create_effect(move |_| {
        if selected.get().is_some() {
            #[cfg(target_arch = "wasm32")]
            {
                let active = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.active_element())
                    .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
                previously_focused.set_value(active);
                if let Some(button) = close_ref.get() {
                    let _ = button.focus();
                }
            }
        }
    });

    move || {
        selected.get().map(|record| {
            let rows = record.detail_rows();
            view! {
                <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                    <div class="fixed inset-0 bg-black/50" on:click=move |_| close()></div>
                    <div
                        class="relative bg-white rounded-lg shadow-xl w-full max-w-lg mx-4 p-6 space-y-4"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="record-detail-title"
                        tabindex="-1"
                        on:keydown=on_keydown
                    >
                        <div class="flex items-start justify-between gap-4">
                            <div>
                                <p class="text-sm text-gray-500">{record.id().to_string()}</p>
                                <h2 id="record-detail-title" class="text-lg font-semibold text-gray-900">
                                    {record.title()}
                                </h2>
                            </div>
                            <div class="flex items-center gap-3">
                                <StatusBadge status=record.status()/>
                                <button
                                    type="button"
                                    node_ref=close_ref
                                    aria-label="Close"
                                    class="text-gray-500 hover:text-gray-700"
                                    on:click=move |_| close()
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        </div>
                        <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <dt class="font-medium text-gray-600">{label}</dt>
                                    <dd class="col-span-2 text-gray-900 break-words">{value}</dd>
                                })
                                .collect_view()}
                        </dl>
                    </div>
                </div>
            }
        })
    }
}
