pub mod config;
pub mod error;
pub mod feature;
pub mod logging;
pub mod startup;
pub mod url_policy;

pub use config::{Configuration, UrlRule, DEFAULT_HOME_URL};
pub use error::{CoreError, CoreResult};
pub use feature::{require, DenialSignal, FeatureFlag};
pub use startup::StartupPlan;
pub use url_policy::{is_valid_url, EmptyRulesPolicy, PatternError, UrlMatchMode, UrlPolicy};
