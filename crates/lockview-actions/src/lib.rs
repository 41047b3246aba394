pub mod action;
pub mod gate;
pub mod webview;

pub use action::BrowserAction;
pub use gate::{ActionGate, ActionResult, GateError};
pub use webview::{GatedWebview, Webview, ZoomLevel, ZoomType, FIND_SEED_MAX_CHARS};
