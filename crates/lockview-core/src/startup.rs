//! Startup path of the shell: find the config next to the executable, create
//! it on first run, and turn it into what the window needs to open.

use crate::config::Configuration;
use crate::error::CoreResult;
use crate::feature::{require, DenialSignal, FeatureFlag};
use crate::url_policy::UrlPolicy;
use std::path::{Path, PathBuf};

/// `/opt/lockview/lockview` -> `/opt/lockview/lockview.config`
pub fn config_path_for_exe(exe: &Path) -> PathBuf {
    exe.with_extension("config")
}

pub fn default_config_path() -> CoreResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| crate::CoreError::io("<current exe>", e))?;
    Ok(config_path_for_exe(&exe))
}

/// Loads the config at `path`, writing the defaults there first if the file
/// does not exist yet. Bad regex rules are rejected here.
pub fn load_or_create(path: &Path) -> CoreResult<Configuration> {
    let cfg = if path.exists() {
        Configuration::load(path)?
    } else {
        tracing::info!(path = %path.display(), "first run, writing default config");
        let cfg = Configuration::default();
        cfg.save(path)?;
        cfg
    };
    cfg.validate()?;
    Ok(cfg)
}

/// A positional URL is only accepted while `enable_command_line` is on.
pub fn check_command_line(
    cfg: &Configuration,
    positional: Option<&str>,
) -> Result<Option<String>, DenialSignal> {
    match positional {
        Some(url) => {
            require(FeatureFlag::CommandLine, cfg.enable_command_line)?;
            Ok(Some(url.to_string()))
        }
        None => Ok(None),
    }
}

pub fn resolve_icon(cfg: &Configuration) -> Option<PathBuf> {
    let path = Path::new(&cfg.app_icon);
    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        tracing::warn!(path = %cfg.app_icon, "invalid app_icon path in config");
        None
    }
}

#[derive(Debug, Clone)]
pub struct StartupPlan {
    pub title: String,
    pub start_url: String,
    pub icon: Option<PathBuf>,
    pub features: Vec<FeatureFlag>,
    pub policy: UrlPolicy,
}

pub fn plan(cfg: &Configuration, positional: Option<&str>) -> CoreResult<StartupPlan> {
    let requested = check_command_line(cfg, positional)?;
    let policy = UrlPolicy::compile(cfg)?;
    let home = cfg.home_url_or_default();

    let start_url = match requested {
        Some(url) if policy.permits(&url) => url,
        Some(url) => {
            tracing::info!(url = %url, home = %home, "requested url not allowed, opening home");
            home.to_string()
        }
        None => home.to_string(),
    };

    Ok(StartupPlan {
        title: cfg.app_title.clone(),
        start_url,
        icon: resolve_icon(cfg),
        features: cfg.enabled_features(),
        policy,
    })
}
