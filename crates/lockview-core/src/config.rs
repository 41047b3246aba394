use crate::error::{CoreError, CoreResult};
use crate::feature::{self, DenialSignal, FeatureFlag};
use crate::url_policy::{EmptyRulesPolicy, UrlMatchMode, UrlPolicy};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_HOME_URL: &str = "http://localhost";

/// One allow-list entry. Matched either literally or as an anchored regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UrlRule {
    #[serde(default)]
    pub is_regex: bool,
    #[serde(rename = "url", default)]
    pub pattern: String,
}

impl UrlRule {
    pub fn literal(url: impl Into<String>) -> Self {
        Self {
            is_regex: false,
            pattern: url.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            is_regex: true,
            pattern: pattern.into(),
        }
    }
}

/// Process-wide settings document, read once at startup and never mutated.
///
/// Older shells wrote the flag keys with a trailing space; those spellings are
/// still accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub app_icon: String,
    pub app_title: String,
    pub home_url: String,
    pub url_validators: Vec<UrlRule>,
    pub url_match_mode: UrlMatchMode,
    pub empty_rules_policy: EmptyRulesPolicy,
    #[serde(alias = "enable_clipboard ")]
    pub enable_clipboard: bool,
    #[serde(alias = "enable_command_line ")]
    pub enable_command_line: bool,
    #[serde(alias = "enable_debug_window ")]
    pub enable_debug_window: bool,
    #[serde(alias = "enable_edit ")]
    pub enable_edit: bool,
    #[serde(alias = "enable_navigation ")]
    pub enable_navigation: bool,
    #[serde(alias = "enable_printing ")]
    pub enable_printing: bool,
    #[serde(alias = "enable_reload ")]
    pub enable_reload: bool,
    #[serde(alias = "enable_search ")]
    pub enable_search: bool,
    #[serde(alias = "enable_select ")]
    pub enable_select: bool,
    #[serde(alias = "enable_title_change ")]
    pub enable_title_change: bool,
    #[serde(alias = "enable_toolbar ")]
    pub enable_toolbar: bool,
    #[serde(alias = "enable_view_source ")]
    pub enable_view_source: bool,
    #[serde(alias = "enable_view_text ")]
    pub enable_view_text: bool,
    #[serde(alias = "enable_zoom ")]
    pub enable_zoom: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            app_icon: String::new(),
            app_title: String::new(),
            home_url: String::new(),
            url_validators: Vec::new(),
            url_match_mode: UrlMatchMode::default(),
            empty_rules_policy: EmptyRulesPolicy::default(),
            enable_clipboard: true,
            enable_command_line: true,
            enable_debug_window: true,
            enable_edit: true,
            enable_navigation: true,
            enable_printing: true,
            enable_reload: true,
            enable_search: true,
            enable_select: true,
            enable_title_change: true,
            enable_toolbar: true,
            enable_view_source: true,
            enable_view_text: true,
            enable_zoom: true,
        }
    }
}

impl Configuration {
    /// Reads the document at `path`.
    ///
    /// A missing file yields the default document; persisting it is up to the
    /// caller. A file that exists but does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(CoreError::io(path, e)),
        };
        let cfg: Configuration =
            serde_json::from_str(&data).map_err(|source| CoreError::Deserialize {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            rules = cfg.url_validators.len(),
            "config loaded"
        );
        Ok(cfg)
    }

    /// Writes the document to `path` through a temporary sibling file so a
    /// failed write never leaves a truncated config behind.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| CoreError::io(dir, e))?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| CoreError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| CoreError::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| CoreError::io(path, e.error))?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Compiles every regex rule so a bad pattern fails at startup instead of
    /// on the first navigation that reaches it.
    pub fn validate(&self) -> CoreResult<()> {
        UrlPolicy::compile(self)?;
        Ok(())
    }

    pub fn home_url_or_default(&self) -> &str {
        if self.home_url.is_empty() {
            DEFAULT_HOME_URL
        } else {
            &self.home_url
        }
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::Clipboard => self.enable_clipboard,
            FeatureFlag::CommandLine => self.enable_command_line,
            FeatureFlag::DebugWindow => self.enable_debug_window,
            FeatureFlag::Edit => self.enable_edit,
            FeatureFlag::Navigation => self.enable_navigation,
            FeatureFlag::Printing => self.enable_printing,
            FeatureFlag::Reload => self.enable_reload,
            FeatureFlag::Search => self.enable_search,
            FeatureFlag::Select => self.enable_select,
            FeatureFlag::TitleChange => self.enable_title_change,
            FeatureFlag::Toolbar => self.enable_toolbar,
            FeatureFlag::ViewSource => self.enable_view_source,
            FeatureFlag::ViewText => self.enable_view_text,
            FeatureFlag::Zoom => self.enable_zoom,
        }
    }

    pub fn require(&self, flag: FeatureFlag) -> Result<(), DenialSignal> {
        feature::require(flag, self.is_enabled(flag))
    }

    pub fn enabled_features(&self) -> Vec<FeatureFlag> {
        FeatureFlag::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
            .collect()
    }
}
