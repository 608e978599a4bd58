use crate::components::layout::{Layout, NavItem};
use leptos::*;

struct Feature {
    icon: &'static str,
    tint: &'static str,
    title: &'static str,
    body: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "fa-shield-alt text-blue-600",
        tint: "bg-blue-100",
        title: "Secure & Reliable",
        body: "Your data is protected with enterprise-grade security measures and encrypted communications.",
    },
    Feature {
        icon: "fa-check-circle text-green-600",
        tint: "bg-green-100",
        title: "Fast Approval",
        body: "Streamlined approval process means faster response times and quicker resolution of your requests.",
    },
    Feature {
        icon: "fa-users text-purple-600",
        tint: "bg-purple-100",
        title: "24/7 Access",
        body: "Access the platform anytime, anywhere. No need to visit the office during business hours.",
    },
];

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg hover:shadow-xl transition-shadow p-6 text-center">
            <div class=format!("mx-auto w-12 h-12 {} rounded-full flex items-center justify-center mb-4", feature.tint)>
                <i class=format!("fas {} text-xl", feature.icon)></i>
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{feature.title}</h3>
            <p class="text-sm text-gray-600">{feature.body}</p>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout active=NavItem::Home>
            <section class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        "Streamline Your Corporate"
                        <span class="text-blue-600">" Requests"</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                        "Submit requests and manage withdrawal applications from anywhere. "
                        "No more office visits - everything you need in one secure platform."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href=NavItem::SubmitRequest.href()
                            class="inline-flex items-center justify-center px-8 h-12 rounded-md text-white bg-blue-600 hover:bg-blue-700"
                        >
                            <i class="fas fa-file-alt mr-2"></i>
                            "Submit Request"
                        </a>
                        <a
                            href=NavItem::Withdrawal.href()
                            class="inline-flex items-center justify-center px-8 h-12 rounded-md border border-gray-300 bg-white text-gray-900 hover:bg-gray-50"
                        >
                            <i class="fas fa-wallet mr-2"></i>
                            "Apply for Withdrawal"
                        </a>
                    </div>
                </div>
            </section>
            <section class="py-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">
                        "Why Choose Our Platform?"
                    </h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                    </div>
                </div>
            </section>
            <footer class="bg-gray-900 text-white py-12">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <div class="flex items-center justify-center space-x-3 mb-4">
                        <i class="fas fa-building text-2xl text-blue-400"></i>
                        <span class="text-xl font-bold">"CorpPortal"</span>
                    </div>
                    <p class="text-gray-400 mb-4">"Simplifying corporate processes, one request at a time."</p>
                    <p class="text-sm text-gray-500">"© 2025 CorpPortal. All rights reserved."</p>
                </div>
            </footer>
        </Layout>
    }
}
