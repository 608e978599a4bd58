use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_PROCESSING_DATE: &str = "2025-01-15";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;
/// Largest delay browser timers accept (`setTimeout` takes a signed 32-bit value).
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// Raw values as they appear in `window.__CORP_PORTAL_ENV` or `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "PROCESSING_DATE")]
    pub processing_date: Option<String>,
    #[serde(default, alias = "SUBMIT_DELAY_MS")]
    pub submit_delay_ms: Option<u64>,
    #[serde(default, alias = "TOAST_DURATION_MS")]
    pub toast_duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Date the "approved today" counter compares against.
    pub processing_date: NaiveDate,
    /// Length of the simulated submission round trip.
    pub submit_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            processing_date: default_processing_date(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl PortalConfig {
    pub fn from_runtime(raw: RuntimeConfig) -> Self {
        let defaults = Self::default();
        let processing_date = match raw.processing_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .unwrap_or_else(|err| {
                    log::warn!(
                        "Ignoring invalid processing_date {:?} ({}), using {}",
                        value,
                        err,
                        defaults.processing_date
                    );
                    defaults.processing_date
                }),
            _ => defaults.processing_date,
        };
        Self {
            processing_date,
            submit_delay: timer_setting(
                "submit_delay_ms",
                raw.submit_delay_ms,
                0,
                defaults.submit_delay,
            ),
            toast_duration: timer_setting(
                "toast_duration_ms",
                raw.toast_duration_ms,
                1,
                defaults.toast_duration,
            ),
        }
    }
}

fn timer_setting(name: &str, value: Option<u64>, min_ms: u64, default: Duration) -> Duration {
    match value {
        Some(ms) if (min_ms..=MAX_TIMER_MS).contains(&ms) => Duration::from_millis(ms),
        Some(ms) => {
            log::warn!(
                "Ignoring {} = {} (expected {}..={}), using {} ms",
                name,
                ms,
                min_ms,
                MAX_TIMER_MS,
                default.as_millis()
            );
            default
        }
        None => default,
    }
}

fn default_processing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or(NaiveDate::MIN)
}

static PORTAL_CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Resolved config, or the defaults before `init` has finished.
pub fn current() -> PortalConfig {
    PORTAL_CONFIG.get().cloned().unwrap_or_default()
}

fn cache(config: PortalConfig) -> PortalConfig {
    let _ = PORTAL_CONFIG.set(config);
    current()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Optional global: window.__CORP_PORTAL_ENV = { processing_date: "...", ... }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__CORP_PORTAL_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json)
        .map_err(|err| log::warn!("Ignoring malformed __CORP_PORTAL_ENV: {}", err))
        .ok()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let origin = web_sys::window()
        .context("no global `window` exists")?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("window.location.origin is unavailable"))?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid JSON")
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(raw) = snapshot_from_globals() {
        return raw;
    }
    match fetch_runtime_config().await {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("Using built-in config: {:#}", err);
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn init() -> PortalConfig {
    if let Some(cached) = PORTAL_CONFIG.get() {
        return cached.clone();
    }
    let raw = load_runtime_config().await;
    cache(PortalConfig::from_runtime(raw))
}
