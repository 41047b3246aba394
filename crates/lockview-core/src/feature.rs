//! Feature flags and the denial signal returned when a gated action is
//! attempted while its flag is off.

use std::fmt;
use thiserror::Error;

/// One category of browser capability that the configuration can switch off.
///
/// Variants are listed in the same order as the flags in the persisted
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureFlag {
    Clipboard,
    CommandLine,
    DebugWindow,
    Edit,
    Navigation,
    Printing,
    Reload,
    Search,
    Select,
    TitleChange,
    Toolbar,
    ViewSource,
    ViewText,
    Zoom,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 14] = [
        FeatureFlag::Clipboard,
        FeatureFlag::CommandLine,
        FeatureFlag::DebugWindow,
        FeatureFlag::Edit,
        FeatureFlag::Navigation,
        FeatureFlag::Printing,
        FeatureFlag::Reload,
        FeatureFlag::Search,
        FeatureFlag::Select,
        FeatureFlag::TitleChange,
        FeatureFlag::Toolbar,
        FeatureFlag::ViewSource,
        FeatureFlag::ViewText,
        FeatureFlag::Zoom,
    ];

    /// Key of the flag in the configuration file.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureFlag::Clipboard => "enable_clipboard",
            FeatureFlag::CommandLine => "enable_command_line",
            FeatureFlag::DebugWindow => "enable_debug_window",
            FeatureFlag::Edit => "enable_edit",
            FeatureFlag::Navigation => "enable_navigation",
            FeatureFlag::Printing => "enable_printing",
            FeatureFlag::Reload => "enable_reload",
            FeatureFlag::Search => "enable_search",
            FeatureFlag::Select => "enable_select",
            FeatureFlag::TitleChange => "enable_title_change",
            FeatureFlag::Toolbar => "enable_toolbar",
            FeatureFlag::ViewSource => "enable_view_source",
            FeatureFlag::ViewText => "enable_view_text",
            FeatureFlag::Zoom => "enable_zoom",
        }
    }

    /// User-facing text reported when the flag blocks an action.
    ///
    /// The wording is matched by existing log scrapers and must not be
    /// normalised, including the odd trailing periods and `naviation`.
    pub fn denial_message(&self) -> &'static str {
        match self {
            FeatureFlag::Clipboard => "Access denied, enable_clipboard feature is not enabled",
            FeatureFlag::CommandLine => {
                "Access denied, enable_command_line feature is not enabled."
            }
            FeatureFlag::DebugWindow => {
                "Access denied, enable_debug_window feature is not enabled."
            }
            FeatureFlag::Edit => "Access denied, enable_edit feature is not enabled",
            FeatureFlag::Navigation => "Access denied, enable_naviation feature is not enabled",
            FeatureFlag::Printing => "Access denied, enable_printing feature is not enabled",
            FeatureFlag::Reload => "Access denied, enable_reload feature is not enabled",
            FeatureFlag::Search => "Access denied, enable_search feature is not enabled",
            FeatureFlag::Select => "Access denied, enable_select feature is not enabled",
            FeatureFlag::TitleChange => {
                "Access denied, enable_title_change feature is not enabled"
            }
            FeatureFlag::Toolbar => "Access denied, enable_toolbar feature is not enabled",
            FeatureFlag::ViewSource => "Access denied, enable_view_source feature is not enabled",
            FeatureFlag::ViewText => "Access denied, enable_view_text feature is not enabled",
            FeatureFlag::Zoom => "Access denied, enable_zoom feature is not enabled",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gated action was attempted while `flag` was disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{}", .flag.denial_message())]
pub struct DenialSignal {
    pub flag: FeatureFlag,
}

impl DenialSignal {
    pub fn new(flag: FeatureFlag) -> Self {
        Self { flag }
    }

    pub fn message(&self) -> &'static str {
        self.flag.denial_message()
    }
}

pub fn require(flag: FeatureFlag, enabled: bool) -> Result<(), DenialSignal> {
    if enabled {
        Ok(())
    } else {
        tracing::warn!(flag = flag.as_str(), "feature denied");
        Err(DenialSignal::new(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_when_enabled() {
        assert_eq!(require(FeatureFlag::Printing, true), Ok(()));
    }

    #[test]
    fn require_names_the_blocking_flag() {
        let err = require(FeatureFlag::Printing, false).unwrap_err();
        assert_eq!(err.flag, FeatureFlag::Printing);
        assert_eq!(
            err.to_string(),
            "Access denied, enable_printing feature is not enabled"
        );
    }

    #[test]
    fn denial_messages_keep_historical_wording() {
        assert_eq!(
            FeatureFlag::Clipboard.denial_message(),
            "Access denied, enable_clipboard feature is not enabled"
        );
        assert_eq!(
            FeatureFlag::CommandLine.denial_message(),
            "Access denied, enable_command_line feature is not enabled."
        );
        assert_eq!(
            FeatureFlag::DebugWindow.denial_message(),
            "Access denied, enable_debug_window feature is not enabled."
        );
        assert_eq!(
            FeatureFlag::Navigation.denial_message(),
            "Access denied, enable_naviation feature is not enabled"
        );
    }

    #[test]
    fn every_denial_message_is_exact() {
        let expected = [
            (FeatureFlag::Clipboard, "Access denied, enable_clipboard feature is not enabled"),
            (FeatureFlag::CommandLine, "Access denied, enable_command_line feature is not enabled."),
            (FeatureFlag::DebugWindow, "Access denied, enable_debug_window feature is not enabled."),
            (FeatureFlag::Edit, "Access denied, enable_edit feature is not enabled"),
            (FeatureFlag::Navigation, "Access denied, enable_naviation feature is not enabled"),
            (FeatureFlag::Printing, "Access denied, enable_printing feature is not enabled"),
            (FeatureFlag::Reload, "Access denied, enable_reload feature is not enabled"),
            (FeatureFlag::Search, "Access denied, enable_search feature is not enabled"),
            (FeatureFlag::Select, "Access denied, enable_select feature is not enabled"),
            (FeatureFlag::TitleChange, "Access denied, enable_title_change feature is not enabled"),
            (FeatureFlag::Toolbar, "Access denied, enable_toolbar feature is not enabled"),
            (FeatureFlag::ViewSource, "Access denied, enable_view_source feature is not enabled"),
            (FeatureFlag::ViewText, "Access denied, enable_view_text feature is not enabled"),
            (FeatureFlag::Zoom, "Access denied, enable_zoom feature is not enabled"),
        ];
        assert_eq!(expected.len(), FeatureFlag::ALL.len());
        for (flag, text) in expected {
            assert_eq!(flag.denial_message(), text, "{flag}");
            assert_eq!(DenialSignal::new(flag).to_string(), text, "{flag}");
            assert_eq!(DenialSignal::new(flag).message(), text, "{flag}");
        }
    }

    #[test]
    fn every_message_mentions_a_flag_key() {
        for flag in FeatureFlag::ALL {
            let msg = flag.denial_message();
            assert!(msg.starts_with("Access denied, enable_"), "{msg}");
            if flag != FeatureFlag::Navigation {
                assert!(msg.contains(flag.as_str()), "{msg}");
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = FeatureFlag::ALL.iter().map(|f| f.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FeatureFlag::ALL.len());
    }
}
