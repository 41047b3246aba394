use crate::action::BrowserAction;
use lockview_core::{Configuration, DenialSignal, PatternError, UrlPolicy};
use thiserror::Error;

pub type ActionResult<T> = Result<T, GateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    Denied(#[from] DenialSignal),
    #[error("navigation to {url} is not allowed")]
    UrlRejected { url: String },
}

/// Answers "may the UI do this?" against one immutable configuration.
#[derive(Debug, Clone)]
pub struct ActionGate<'a> {
    cfg: &'a Configuration,
    policy: UrlPolicy,
}

impl<'a> ActionGate<'a> {
    pub fn new(cfg: &'a Configuration) -> Result<Self, PatternError> {
        let policy = UrlPolicy::compile(cfg)?;
        Ok(Self { cfg, policy })
    }

    pub fn with_policy(cfg: &'a Configuration, policy: UrlPolicy) -> Self {
        Self { cfg, policy }
    }

    pub fn allows(&self, action: BrowserAction) -> bool {
        self.check(action).is_ok()
    }

    pub fn check(&self, action: BrowserAction) -> Result<(), DenialSignal> {
        for flag in action.required_flags() {
            self.cfg.require(*flag).inspect_err(|_| {
                tracing::debug!(?action, "action blocked");
            })?;
        }
        Ok(())
    }

    pub fn check_navigation(&self, url: &str) -> ActionResult<()> {
        if self.policy.permits(url) {
            Ok(())
        } else {
            tracing::info!(url = %url, "navigation rejected by url policy");
            Err(GateError::UrlRejected {
                url: url.to_string(),
            })
        }
    }
}
