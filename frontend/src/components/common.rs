use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Destructive,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-sm",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 text-white shadow-sm",
            ButtonVariant::Destructive => "bg-red-600 hover:bg-red-700 text-white shadow-sm",
            ButtonVariant::Outline => "border border-gray-300 bg-white hover:bg-gray-50 text-gray-900",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "h-9 px-3 text-sm",
            ButtonSize::Regular => "h-10 px-4 text-sm",
        }
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!(
        "inline-flex items-center justify-center rounded-md font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        size.classes(),
        variant.classes()
    );
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Font Awesome class rendered before the label, e.g. `fa-check`.
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            disabled=move || disabled.get()
            {..attributes}
        >
            {icon.map(|icon| view! { <i class=format!("fas {} mr-1", icon)></i> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_palettes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-blue-600"));
        assert!(ButtonVariant::Success.classes().contains("bg-green-600"));
        assert!(ButtonVariant::Destructive.classes().contains("bg-red-600"));
        assert!(ButtonVariant::Outline.classes().contains("border-gray-300"));
    }

    #[test]
    fn class_combines_size_variant_and_extra() {
        let class = button_class(ButtonVariant::Success, ButtonSize::Small, "w-full");
        assert!(class.contains("h-9 px-3"));
        assert!(class.contains("bg-green-600"));
        assert!(class.ends_with(" w-full"));

        let plain = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(plain.ends_with(ButtonVariant::Primary.classes()));
    }
}
