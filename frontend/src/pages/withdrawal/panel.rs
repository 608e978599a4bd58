use super::{
    utils::{BANKS, WITHDRAWAL_TYPES},
    view_model::use_withdrawal_view_model,
};
use crate::components::{
    cards::FormCard,
    forms::{FormMessages, SelectField, SubmitButton, TextAreaField, TextField},
    layout::{FormPageHeading, Layout, NavItem},
};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
fn FormSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h3 class="text-lg font-semibold text-gray-900 border-b pb-2">{title}</h3>
            {children()}
        </section>
    }
}

#[component]
pub fn WithdrawalPanel() -> impl IntoView {
    let vm = use_withdrawal_view_model();
    let form = vm.form;
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Layout active=NavItem::Withdrawal>
            <div class="max-w-4xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <FormPageHeading
                    title="Withdrawal Application"
                    description="Apply for withdrawal from your savings account. Please ensure all information is accurate."
                />
                <FormCard
                    title="Savings Withdrawal Application"
                    description="Complete this form to request a withdrawal from your savings account"
                >
                    <form class="space-y-8" on:submit=on_submit>
                        <FormMessages message=vm.message/>
                        <FormSection title="Personal Information">
                            <div class="grid md:grid-cols-2 gap-6">
                                <TextField id="fullName" label="Full Name *" value=form.full_name placeholder="Enter your full name"/>
                                <TextField id="employeeId" label="Employee ID *" value=form.employee_id placeholder="Enter your employee ID"/>
                            </div>
                            <div class="grid md:grid-cols-2 gap-6">
                                <TextField
                                    id="email"
                                    label="Email Address *"
                                    value=form.email
                                    input_type="email"
                                    placeholder="Enter your email"
                                />
                                <TextField id="phone" label="Phone Number *" value=form.phone placeholder="Enter your phone number"/>
                            </div>
                        </FormSection>
                        <FormSection title="Banking Information">
                            <div class="grid md:grid-cols-2 gap-6">
                                <SelectField
                                    id="bankName"
                                    label="Bank Name *"
                                    value=form.bank_name
                                    placeholder="Select your bank"
                                    options=BANKS
                                />
                                <TextField
                                    id="accountNumber"
                                    label="Account Number *"
                                    value=form.account_number
                                    placeholder="Enter your account number"
                                />
                            </div>
                        </FormSection>
                        <FormSection title="Withdrawal Details">
                            <div class="grid md:grid-cols-2 gap-6">
                                <TextField
                                    id="currentBalance"
                                    label="Current Savings Balance *"
                                    value=form.current_balance
                                    input_type="number"
                                    placeholder="0.00"
                                    icon="fa-dollar-sign"
                                />
                                <TextField
                                    id="withdrawalAmount"
                                    label="Withdrawal Amount *"
                                    value=form.withdrawal_amount
                                    input_type="number"
                                    placeholder="0.00"
                                    icon="fa-dollar-sign"
                                />
                            </div>
                            <SelectField
                                id="withdrawalType"
                                label="Withdrawal Type *"
                                value=form.withdrawal_type
                                placeholder="Select withdrawal type"
                                options=WITHDRAWAL_TYPES
                            />
                            <TextAreaField
                                id="reason"
                                label="Reason for Withdrawal *"
                                value=form.reason
                                placeholder="Please explain the reason for your withdrawal..."
                            />
                        </FormSection>
                        <FormSection title="Emergency Contact">
                            <div class="grid md:grid-cols-2 gap-6">
                                <TextField
                                    id="emergencyContact"
                                    label="Emergency Contact Name *"
                                    value=form.emergency_contact
                                    placeholder="Enter emergency contact name"
                                />
                                <TextField
                                    id="emergencyPhone"
                                    label="Emergency Contact Phone *"
                                    value=form.emergency_phone
                                    placeholder="Enter emergency contact phone"
                                />
                            </div>
                        </FormSection>
                        <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-4">
                            <p class="text-sm text-yellow-800">
                                <strong>"Important:"</strong>
                                " Withdrawal applications are subject to approval and may take 2-3 business days to process. "
                                "Emergency withdrawals may be processed faster but require additional documentation."
                            </p>
                        </div>
                        <div class="flex justify-end pt-6 border-t">
                            <SubmitButton
                                pending=vm.submitting()
                                label="Submit Application"
                                class="bg-green-600 hover:bg-green-700"
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
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_withdrawal_sections_and_fields() {
        let html = render_to_string(move || view! { <WithdrawalPanel/> });
        assert!(html.contains("Withdrawal Application"));
        for section in ["Personal Information", "Banking Information", "Withdrawal Details", "Emergency Contact"] {
            assert!(html.contains(section), "missing section {}", section);
        }
        for id in [
            "fullName",
            "employeeId",
            "email",
            "phone",
            "bankName",
            "accountNumber",
            "currentBalance",
            "withdrawalAmount",
            "withdrawalType",
            "reason",
            "emergencyContact",
            "emergencyPhone",
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("Guaranty Trust Bank"));
        assert!(html.contains("Loan Against Savings"));
        assert!(html.contains("2-3 business days"));
        assert!(html.contains("Submit Application"));
    }
}
