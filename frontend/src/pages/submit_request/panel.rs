use super::{
    utils::{ATTACHMENT_ACCEPT, DEPARTMENTS, PRIORITIES, REQUEST_TYPES},
    view_model::use_submit_request_view_model,
};
use crate::components::{
    cards::FormCard,
    forms::{FormMessages, SelectField, SubmitButton, TextAreaField, TextField},
    layout::{FormPageHeading, Layout, NavItem},
};
use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

fn selected_file_names(ev: &Event) -> Vec<String> {
    let input = event_target::<HtmlInputElement>(ev);
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| file.name())
        .collect()
}

/// The native file input keeps its `FileList` after the form resets, so it is
/// emptied whenever the tracked names are.
fn selection_cleared(names: &[String]) -> bool {
    names.is_empty()
}

#[component]
fn AttachmentPicker(attachments: RwSignal<Vec<String>>) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    create_effect(move |_| {
        if attachments.with(|names| selection_cleared(names)) {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });
    view! {
        <div class="space-y-2">
            <label for="attachments" class="block text-sm font-medium text-gray-700">
                "Attachments (Optional)"
            </label>
            <label
                for="attachments"
                class="block border-2 border-dashed border-gray-300 rounded-lg p-6 text-center hover:border-blue-400 transition-colors cursor-pointer"
            >
                <i class="fas fa-upload text-5xl text-gray-400"></i>
                <p class="mt-2 text-sm text-gray-600">"Click to upload or drag and drop"</p>
                <p class="text-xs text-gray-500">"PDF, DOC, DOCX, JPG, PNG up to 10MB"</p>
                <input
                    node_ref=input_ref
                    type="file"
                    id="attachments"
                    name="attachments"
                    multiple=true
                    accept=ATTACHMENT_ACCEPT
                    class="hidden"
                    on:change=move |ev| attachments.set(selected_file_names(&ev))
                />
            </label>
            <Show when=move || attachments.with(|names| !names.is_empty())>
                <ul class="text-sm text-gray-600 list-disc list-inside">
                    {move || attachments.get().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn SubmitRequestPanel() -> impl IntoView {
    let vm = use_submit_request_view_model();
    let form = vm.form;
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Layout active=NavItem::SubmitRequest>
            <div class="max-w-4xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <FormPageHeading
                    title="Submit a Request"
                    description="Fill out the form below to submit your corporate request. All fields marked with * are required."
                />
                <FormCard
                    title="Request Details"
                    description="Please provide detailed information about your request"
                >
                    <form class="space-y-6" on:submit=on_submit>
                        <FormMessages message=vm.message/>
                        <div class="grid md:grid-cols-2 gap-6">
                            <TextField id="fullName" label="Full Name *" value=form.full_name placeholder="Enter your full name"/>
                            <TextField
                                id="email"
                                label="Email Address *"
                                value=form.email
                                input_type="email"
                                placeholder="Enter your email"
                            />
                        </div>
                        <div class="grid md:grid-cols-2 gap-6">
                            <TextField id="phone" label="Phone Number *" value=form.phone placeholder="Enter your phone number"/>
                            <SelectField
                                id="department"
                                label="Department *"
                                value=form.department
                                placeholder="Select your department"
                                options=DEPARTMENTS
                            />
                        </div>
                        <div class="grid md:grid-cols-2 gap-6">
                            <SelectField
                                id="requestType"
                                label="Request Type *"
                                value=form.request_type
                                placeholder="Select request type"
                                options=REQUEST_TYPES
                            />
                            <SelectField
                                id="priority"
                                label="Priority Level *"
                                value=form.priority
                                placeholder="Select priority"
                                options=PRIORITIES
                            />
                        </div>
                        <TextField id="subject" label="Subject *" value=form.subject placeholder="Brief description of your request"/>
                        <TextAreaField
                            id="description"
                            label="Detailed Description *"
                            value=form.description
                            placeholder="Please provide detailed information about your request..."
                            rows=6
                        />
                        <AttachmentPicker attachments=form.attachments/>
                        <div class="flex justify-end pt-6 border-t">
                            <SubmitButton
                                pending=vm.submitting()
                                label="Submit Request"
                                class="bg-blue-600 hover:bg-blue-700"
                            />
                        </div>
                    </form>
                </FormCard>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::submit_request::utils::{fill_sample, RequestFormState};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn reset_marks_file_selection_for_clearing() {
        with_runtime(|| {
            let form = RequestFormState::default();
            fill_sample(&form);
            form.attachments.set(vec!["quote.pdf".into()]);
            assert!(!form.attachments.with(|names| selection_cleared(names)));

            form.reset();
            assert!(form.attachments.with(|names| selection_cleared(names)));
        });
    }

    #[test]
    fn renders_request_form() {
        let html = render_to_string(move || view! { <SubmitRequestPanel/> });
        assert!(html.contains("Submit a Request"));
        assert!(html.contains("Request Details"));
        assert!(html.contains("Back to Home"));
        for id in ["fullName", "email", "phone", "department", "requestType", "priority", "subject", "description", "attachments"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("Information Technology"));
        assert!(html.contains("Expense Reimbursement"));
        assert!(html.contains(ATTACHMENT_ACCEPT));
        assert!(html.contains("Submit Request"));
    }
}
