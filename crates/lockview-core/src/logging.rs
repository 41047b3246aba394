use crate::config::Configuration;
use std::sync::OnceLock;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry, reload, EnvFilter, Registry};

static FILTER: OnceLock<Option<reload::Handle<EnvFilter, Registry>>> = OnceLock::new();

/// Installs the global subscriber at `info`. Safe to call before the config
/// is read; [`init_logging_for`] adjusts the level afterwards.
pub fn init_logging() {
    install("info");
}

/// Diagnostic messages are only wanted when the debug window is enabled.
pub fn init_logging_for(cfg: &Configuration) {
    install(default_directive(cfg));
}

fn default_directive(cfg: &Configuration) -> &'static str {
    if cfg.enable_debug_window {
        "debug"
    } else {
        "info"
    }
}

fn filter_for(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn install(default: &str) {
    let mut fresh = false;
    let handle = FILTER.get_or_init(|| {
        fresh = true;
        let (layer, handle) = reload::Layer::new(filter_for(default));
        registry()
            .with(layer)
            .with(fmt::layer())
            .try_init()
            .ok()
            .map(|_| handle)
    });
    // None means some other subscriber already owns the process.
    if let (false, Some(handle)) = (fresh, handle) {
        if let Err(e) = handle.reload(filter_for(default)) {
            tracing::warn!(error = %e, "could not change log filter");
        }
    }
}
