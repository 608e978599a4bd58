use crate::components::toast::ToastViewport;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    SubmitRequest,
    Withdrawal,
    Admin,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Home,
        NavItem::SubmitRequest,
        NavItem::Withdrawal,
        NavItem::Admin,
    ];

    pub fn href(&self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::SubmitRequest => "/submit-request",
            NavItem::Withdrawal => "/withdrawal",
            NavItem::Admin => "/admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::SubmitRequest => "Submit Request",
            NavItem::Withdrawal => "Withdrawal",
            NavItem::Admin => "Admin",
        }
    }
}

fn nav_link_class(item: NavItem, active: NavItem) -> &'static str {
    if item == active {
        "text-blue-600 font-medium"
    } else {
        "text-gray-700 hover:text-blue-600 transition-colors"
    }
}

#[component]
pub fn Header(active: NavItem) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center space-x-3">
                        <i class="fas fa-building text-2xl text-blue-600"></i>
                        <span class="text-xl font-bold text-gray-900">"CorpPortal"</span>
                    </a>
                    <nav class="hidden md:flex space-x-8">
                        {NavItem::ALL
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a href=item.href() class=nav_link_class(item, active)>
                                        {item.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-700 hover:text-blue-600"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t">
                        <nav class="px-4 py-3 space-y-2">
                            {NavItem::ALL
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href()
                                            class=format!("block px-3 py-2 rounded-md text-sm {}", nav_link_class(item, active))
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {item.label()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(active: NavItem, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50">
            <Header active=active/>
            {children()}
            <ToastViewport/>
        </div>
    }
}

/// Heading block shared by the two form pages.
#[component]
pub fn FormPageHeading(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="mb-8">
            <a href="/" class="inline-flex items-center text-blue-600 hover:text-blue-700 transition-colors mb-4">
                <i class="fas fa-arrow-left mr-2"></i>
                "Back to Home"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{title}</h1>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
