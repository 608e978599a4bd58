mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;

#[cfg(test)]
mod test_support;

/// Installs the panic hook and logger, resolves the runtime config and mounts
/// the portal into `<body>`.
pub fn boot() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting CorpPortal frontend: resolving runtime config");

    leptos::spawn_local(async move {
        let config = config::init().await;
        log::info!(
            "Runtime config initialized (processing date {}, submit delay {} ms)",
            config.processing_date,
            config.submit_delay.as_millis()
        );
        router::mount_app();
    });
}
