use lockview_core::FeatureFlag;
use serde::{Deserialize, Serialize};

/// Privileged things the shell UI can ask the webview to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserAction {
    Back,
    Forward,
    Reload,
    Stop,
    ClearHistory,
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
    SetEditable,
    Find,
    FindNext,
    FindDone,
    ViewSource,
    ViewText,
    SetZoom,
    ToggleZoomLayout,
    SelectAll,
    ClearSelection,
    DeleteSelection,
    Print,
    PropagateTitle,
    ShowToolbar,
    ShowFindBar,
    ShowDebugLog,
}

impl BrowserAction {
    pub const ALL: [BrowserAction; 26] = [
        BrowserAction::Back,
        BrowserAction::Forward,
        BrowserAction::Reload,
        BrowserAction::Stop,
        BrowserAction::ClearHistory,
        BrowserAction::Cut,
        BrowserAction::Copy,
        BrowserAction::Paste,
        BrowserAction::Undo,
        BrowserAction::Redo,
        BrowserAction::SetEditable,
        BrowserAction::Find,
        BrowserAction::FindNext,
        BrowserAction::FindDone,
        BrowserAction::ViewSource,
        BrowserAction::ViewText,
        BrowserAction::SetZoom,
        BrowserAction::ToggleZoomLayout,
        BrowserAction::SelectAll,
        BrowserAction::ClearSelection,
        BrowserAction::DeleteSelection,
        BrowserAction::Print,
        BrowserAction::PropagateTitle,
        BrowserAction::ShowToolbar,
        BrowserAction::ShowFindBar,
        BrowserAction::ShowDebugLog,
    ];

    /// Flags that must all be on, in the order they are checked.
    pub fn required_flags(&self) -> &'static [FeatureFlag] {
        use BrowserAction::*;
        match self {
            Back | Forward => &[FeatureFlag::Navigation],
            Reload => &[FeatureFlag::Reload],
            Stop | ClearHistory => &[],
            Cut | Paste => &[FeatureFlag::Clipboard, FeatureFlag::Edit],
            Copy => &[FeatureFlag::Clipboard],
            Undo | Redo | SetEditable => &[FeatureFlag::Edit],
            Find | FindNext | FindDone => &[FeatureFlag::Search],
            ViewSource => &[FeatureFlag::ViewSource],
            ViewText => &[FeatureFlag::ViewText],
            SetZoom | ToggleZoomLayout => &[FeatureFlag::Zoom],
            SelectAll | ClearSelection | DeleteSelection => &[FeatureFlag::Select],
            Print => &[FeatureFlag::Printing],
            PropagateTitle => &[FeatureFlag::TitleChange],
            ShowToolbar | ShowFindBar => &[FeatureFlag::Toolbar],
            ShowDebugLog => &[FeatureFlag::DebugWindow],
        }
    }

    pub fn is_ungated(&self) -> bool {
        self.required_flags().is_empty()
    }
}
