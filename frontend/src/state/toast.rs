use leptos::*;
use std::time::Duration;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Process-wide notification channel. At most one toast is visible; showing a
/// new one replaces the current one.
#[derive(Clone, Copy)]
pub struct ToastState {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
    duration: StoredValue<Duration>,
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(1),
            duration: store_value(duration),
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title.into(), description.into(), ToastVariant::Default)
    }

    pub fn show_error(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title.into(), description.into(), ToastVariant::Destructive)
    }

    fn push(&self, title: String, description: String, variant: ToastVariant) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        log::debug!("toast #{}: {}", id, title);
        self.current.set(Some(Toast {
            id,
            title,
            description,
            variant,
        }));
        self.schedule_dismiss(id);
        id
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the toast only if `id` is still the one on screen.
    pub fn dismiss_if_current(&self, id: u64) {
        let is_current = self
            .current
            .with_untracked(|toast| toast.as_ref().map(|t| t.id) == Some(id));
        if is_current {
            self.dismiss();
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration.get_value()
    }

    pub fn current(&self) -> Signal<Option<Toast>> {
        self.current.into()
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let state = *self;
        let millis = u32::try_from(self.duration().as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || state.dismiss_if_current(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn provide_toast() -> ToastState {
    let state = ToastState::new(config::current().toast_duration);
    provide_context(state);
    state
}

pub fn use_toast() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => provide_toast(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn showing_a_toast_replaces_the_previous_one() {
        with_runtime(|| {
            let toast = ToastState::new(Duration::from_secs(1));
            let first = toast.show("Saved", "first");
            let second = toast.show_error("Failed", "second");
            assert_ne!(first, second);

            let current = toast.current().get().unwrap();
            assert_eq!(current.id, second);
            assert_eq!(current.description, "second");
            assert_eq!(current.variant, ToastVariant::Destructive);
        });
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        with_runtime(|| {
            let toast = ToastState::new(Duration::from_secs(1));
            let first = toast.show("One", "");
            let second = toast.show("Two", "");

            toast.dismiss_if_current(first);
            assert_eq!(toast.current().get().map(|t| t.id), Some(second));

            toast.dismiss_if_current(second);
            assert!(toast.current().get().is_none());
        });
    }

    #[test]
    fn provided_toast_uses_configured_duration() {
        with_runtime(|| {
            let toast = provide_toast();
            assert_eq!(toast.duration(), config::current().toast_duration);
        });
    }

    #[test]
    fn use_toast_reuses_provided_state() {
        with_runtime(|| {
            let provided = provide_toast();
            provided.show("Hello", "world");
            let used = use_toast();
            assert_eq!(
                used.current().get().map(|t| t.title),
                Some("Hello".to_string())
            );
        });
    }
}
