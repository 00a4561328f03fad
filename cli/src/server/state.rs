use std::{net::IpAddr, sync::Arc, time::Duration};

use chatgate::{BackendError, Gateway, OllamaBackend, backend::normalize_base_url};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct BackendSettings {
    pub url: String,
    pub timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(
        url: String,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            url: normalize_base_url(&url),
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }
}

pub const DEFAULT_MAX_BODY_MIB: u64 = 64;

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub address: IpAddr,
    pub port: u16,
    /// Largest accepted JSON request body, in MiB.
    pub max_body_mib: u64,
    pub backend: BackendSettings,
}

pub fn build_gateway(settings: &BackendSettings) -> Result<Gateway, BackendError> {
    let backend = OllamaBackend::new(&settings.url, settings.timeout)?;
    Ok(Gateway::new(Arc::new(backend)))
}

fn spinner_style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Builds the gateway and probes the backend catalog once. An unreachable
/// backend is reported but not fatal: it may come up after the gateway.
pub async fn connect_gateway(
    settings: &BackendSettings
) -> Result<Gateway, BackendError> {
    let gateway = build_gateway(settings)?;

    let style_bold = Style::new().bold();
    let backend_url = style_bold.apply_to(settings.url.clone()).to_string();

    let progress_bar = ProgressBar::new_spinner();
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    progress_bar.set_style(spinner_style("{spinner:.green} Connecting: {msg}"));
    progress_bar.set_message(backend_url.clone());

    match gateway.list_models().await {
        Ok(directory) => {
            progress_bar.set_style(spinner_style("Connected: {msg}"));
            progress_bar.finish_with_message(format!(
                "{} ({} models)",
                backend_url,
                directory.models.len()
            ));
        },
        Err(error) => {
            progress_bar.set_style(spinner_style("Unreachable: {msg}"));
            progress_bar.finish_with_message(backend_url);
            warn!(%error, "backend is not reachable yet");
        },
    }

    Ok(gateway)
}
