use crate::api::ApiError;
use leptos::*;

/// Per-field messages carried in `details.errors` of a validation error.
fn field_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn visible_code(error: &ApiError) -> Option<String> {
    match error.code.as_str() {
        "" | "UNKNOWN" | "VALIDATION_ERROR" => None,
        code => Some(code.to_string()),
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            let messages = field_messages(&err);
            let code = visible_code(&err);
            view! {
                <div class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded space-y-1 my-2" role="alert">
                    <div class="font-bold">{err.error.clone()}</div>
                    {(!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })}
                    {code.map(|code| view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> })}
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_messages_only_for_validation_errors() {
        let validation = ApiError::missing_fields(&["Reason"]);
        assert_eq!(field_messages(&validation), vec!["Reason is required"]);
        assert!(field_messages(&ApiError::not_found("missing")).is_empty());
        assert_eq!(visible_code(&validation), None);
        assert_eq!(
            visible_code(&ApiError::request_failed("offline")).as_deref(),
            Some("REQUEST_FAILED")
        );
    }

    #[test]
    fn inline_error_renders_missing_fields() {
        let html = render_to_string(move || {
            let error = ApiError::missing_fields(&["Full Name", "Subject"]);
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please fill in all required fields."));
        assert!(html.contains("Full Name is required"));
        assert!(html.contains("Subject is required"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::not_found("Record WDR-404 not found")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Record WDR-404 not found"));
        assert!(html.contains("Code: NOT_FOUND"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
