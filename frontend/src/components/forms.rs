use crate::api::ApiError;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::components::error::InlineErrorMessage;
use leptos::*;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let input_class = if icon.is_some() {
        "mt-1 block w-full h-12 border border-gray-300 rounded-md pl-10 pr-3"
    } else {
        "mt-1 block w-full h-12 border border-gray-300 rounded-md px-3"
    };
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">{label}</label>
            <div class="relative">
                {icon.map(|icon| view! {
                    <i class=format!("fas {} absolute left-3 top-1/2 -translate-y-1/2 text-gray-400", icon)></i>
                })}
                <input
                    id=id.clone()
                    name=id
                    type=input_type.unwrap_or_else(|| "text".to_string())
                    class=input_class
                    placeholder=placeholder.unwrap_or_default()
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    options: &'static [SelectOption],
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">{label}</label>
            <select
                id=id.clone()
                name=id
                class="mt-1 block w-full h-12 border border-gray-300 rounded-md px-3 bg-white"
                required=true
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">{label}</label>
            <textarea
                id=id.clone()
                name=id
                rows=rows
                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 resize-none"
                placeholder=placeholder.unwrap_or_default()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Inline validation error and confirmation shown above a form.
#[component]
pub fn FormMessages(message: RwSignal<MessageState>) -> impl IntoView {
    let error = Signal::derive(move || message.get().error);
    view! {
        <InlineErrorMessage error=error/>
        <Show when=move || message.get().success.is_some()>
            <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
        </Show>
    }
}

#[component]
pub fn SubmitButton(
    pending: Signal<bool>,
    #[prop(into)] label: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("inline-flex items-center justify-center rounded-md text-white px-8 h-12 disabled:opacity-50 {}", class)
            disabled=move || pending.get()
        >
            <Show
                when=move || pending.get()
                fallback=move || view! { <i class="fas fa-paper-plane mr-2"></i>{label.clone()} }
            >
                <LoadingSpinner/>
                "Submitting..."
            </Show>
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    const COLORS: &[SelectOption] = &[option("red", "Red"), option("blue", "Blue")];

    #[test]
    fn message_state_keeps_one_outcome() {
        let mut state = MessageState::default();
        state.set_success("done");
        assert_eq!(state.success.as_deref(), Some("done"));
        state.set_error(ApiError::validation("bad"));
        assert!(state.success.is_none());
        assert!(state.error.is_some());
        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[test]
    fn fields_render_required_inputs() {
        let html = render_to_string(move || {
            let name = create_rw_signal("Jane".to_string());
            let color = create_rw_signal(String::new());
            let notes = create_rw_signal(String::new());
            view! {
                <form>
                    <TextField id="fullName" label="Full Name *" value=name input_type="email"/>
                    <SelectField id="color" label="Color *" value=color placeholder="Pick one" options=COLORS/>
                    <TextAreaField id="notes" label="Notes *" value=notes rows=6/>
                </form>
            }
        });
        assert!(html.contains("id=\"fullName\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Pick one"));
        assert!(html.contains("value=\"blue\""));
        assert!(html.contains("rows=\"6\""));
        assert!(html.contains("required"));
    }

    #[test]
    fn submit_button_shows_pending_label() {
        let idle = render_to_string(move || {
            let pending = create_rw_signal(false);
            view! { <SubmitButton pending=pending.into() label="Submit Request"/> }
        });
        assert!(idle.contains("Submit Request"));

        let busy = render_to_string(move || {
            let pending = create_rw_signal(true);
            view! { <SubmitButton pending=pending.into() label="Submit Request"/> }
        });
        assert!(busy.contains("Submitting..."));
        assert!(busy.contains("disabled"));
    }

    #[test]
    fn form_messages_render_success() {
        let html = render_to_string(move || {
            let message = create_rw_signal(MessageState::default());
            message.update(|msg| msg.set_success("Saved"));
            view! { <FormMessages message=message/> }
        });
        assert!(html.contains("Saved"));
    }
}
