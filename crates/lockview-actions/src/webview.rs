use crate::action::BrowserAction;
use crate::gate::{ActionGate, ActionResult};
use serde::{Deserialize, Serialize};

/// Longest selection used to seed the find bar.
pub const FIND_SEED_MAX_CHARS: usize = 150;

/// The fixed zoom steps offered by the tools menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Largest,
}

/// Whether zoom scales the whole layout or only the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomType {
    Layout,
    #[default]
    Text,
}

/// Narrow view of the host's embedded webview widget.
pub trait Webview {
    fn load_url(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn stop(&mut self);
    fn clear_history(&mut self);

    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
    fn set_editable(&mut self, editable: bool);

    fn selected_text(&self) -> String;
    /// Returns the number of matches; an empty needle clears the highlight.
    fn find(&mut self, needle: &str) -> usize;

    fn set_zoom(&mut self, level: ZoomLevel);
    fn set_zoom_type(&mut self, kind: ZoomType);

    fn select_all(&mut self);
    fn clear_selection(&mut self);
    fn delete_selection(&mut self);

    fn page_source(&self) -> String;
    fn page_text(&self) -> String;
    fn print(&mut self);
}

/// Wraps a [`Webview`] so every privileged call goes through the gate first.
/// Denied calls never reach the widget.
pub struct GatedWebview<'a, W: Webview> {
    gate: ActionGate<'a>,
    view: W,
}

impl<'a, W: Webview> GatedWebview<'a, W> {
    pub fn new(gate: ActionGate<'a>, view: W) -> Self {
        Self { gate, view }
    }

    pub fn inner(&self) -> &W {
        &self.view
    }

    pub fn into_inner(self) -> W {
        self.view
    }

    fn run<T>(&mut self, action: BrowserAction, f: impl FnOnce(&mut W) -> T) -> ActionResult<T> {
        self.gate.check(action)?;
        Ok(f(&mut self.view))
    }

    pub fn load_url(&mut self, url: &str) -> ActionResult<()> {
        self.gate.check_navigation(url)?;
        self.view.load_url(url);
        Ok(())
    }

    pub fn back(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Back, |v| v.go_back())
    }

    pub fn forward(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Forward, |v| v.go_forward())
    }

    pub fn reload(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Reload, |v| v.reload())
    }

    pub fn stop(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Stop, |v| v.stop())
    }

    pub fn clear_history(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::ClearHistory, |v| v.clear_history())
    }

    pub fn cut(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Cut, |v| v.cut())
    }

    pub fn copy(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Copy, |v| v.copy())
    }

    pub fn paste(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Paste, |v| v.paste())
    }

    pub fn undo(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Undo, |v| v.undo())
    }

    pub fn redo(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Redo, |v| v.redo())
    }

    pub fn set_editable(&mut self, editable: bool) -> ActionResult<()> {
        self.run(BrowserAction::SetEditable, |v| v.set_editable(editable))
    }

    /// Text to prefill the find bar with: the current selection, cut to
    /// [`FIND_SEED_MAX_CHARS`].
    pub fn find_seed(&mut self) -> ActionResult<String> {
        self.run(BrowserAction::Find, |v| {
            v.selected_text().chars().take(FIND_SEED_MAX_CHARS).collect()
        })
    }

    pub fn find_next(&mut self, needle: &str) -> ActionResult<usize> {
        self.run(BrowserAction::FindNext, |v| v.find(needle))
    }

    pub fn find_done(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::FindDone, |v| {
            v.find("");
        })
    }

    pub fn set_zoom(&mut self, level: ZoomLevel) -> ActionResult<()> {
        self.run(BrowserAction::SetZoom, |v| v.set_zoom(level))
    }

    /// `true` scales the whole layout, `false` only the text.
    pub fn set_zoom_layout(&mut self, layout: bool) -> ActionResult<()> {
        let kind = if layout { ZoomType::Layout } else { ZoomType::Text };
        self.run(BrowserAction::ToggleZoomLayout, |v| v.set_zoom_type(kind))
    }

    pub fn select_all(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::SelectAll, |v| v.select_all())
    }

    pub fn clear_selection(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::ClearSelection, |v| v.clear_selection())
    }

    pub fn delete_selection(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::DeleteSelection, |v| v.delete_selection())
    }

    pub fn view_source(&mut self) -> ActionResult<String> {
        self.run(BrowserAction::ViewSource, |v| v.page_source())
    }

    pub fn view_text(&mut self) -> ActionResult<String> {
        self.run(BrowserAction::ViewText, |v| v.page_text())
    }

    pub fn print(&mut self) -> ActionResult<()> {
        self.run(BrowserAction::Print, |v| v.print())
    }

    /// Title to show in the window frame, if title propagation is on.
    pub fn title_for_frame(&self, page_title: &str) -> ActionResult<String> {
        self.gate.check(BrowserAction::PropagateTitle)?;
        Ok(page_title.to_string())
    }
}
