//! Decides whether a navigation target is allowed by the configured rules.
//!
//! Evaluation walks the rule list in order. A regex rule that does not match
//! falls through to the next rule, while a literal rule that does not match
//! rejects the URL on the spot. That asymmetry is what existing deployments
//! rely on, so it stays the default ([`UrlMatchMode::Faithful`]);
//! [`UrlMatchMode::FirstMatch`] treats both kinds alike.

use crate::config::{Configuration, UrlRule};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMatchMode {
    /// Literal mismatch stops evaluation with a rejection.
    #[default]
    Faithful,
    /// Any matching rule allows; rejection only after the whole list.
    FirstMatch,
}

/// Outcome when the rule list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRulesPolicy {
    #[default]
    Allow,
    Deny,
}

#[derive(Debug, Error)]
#[error("invalid url pattern in rule {rule_index} ({pattern:?}): {source}")]
pub struct PatternError {
    pub rule_index: usize,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Regex(Regex),
}

impl Matcher {
    fn compile(index: usize, rule: &UrlRule) -> Result<Self, PatternError> {
        if !rule.is_regex {
            return Ok(Matcher::Literal(rule.pattern.clone()));
        }
        let invalid = |source| PatternError {
            rule_index: index,
            pattern: rule.pattern.clone(),
            source,
        };
        // The raw pattern must parse on its own; an unbalanced `)` would
        // otherwise close the anchoring group early.
        Regex::new(&rule.pattern).map_err(invalid)?;
        Regex::new(&format!("^(?:{})$", rule.pattern))
            .map(Matcher::Regex)
            .map_err(invalid)
    }

    fn is_match(&self, candidate: &str) -> bool {
        match self {
            Matcher::Literal(url) => url == candidate,
            Matcher::Regex(re) => re.is_match(candidate),
        }
    }
}

/// Compiled form of a configuration's URL rules.
#[derive(Debug, Clone)]
pub struct UrlPolicy {
    matchers: Vec<Matcher>,
    mode: UrlMatchMode,
    empty: EmptyRulesPolicy,
}

impl UrlPolicy {
    pub fn compile(cfg: &Configuration) -> Result<Self, PatternError> {
        let matchers = cfg
            .url_validators
            .iter()
            .enumerate()
            .map(|(i, rule)| Matcher::compile(i, rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            matchers,
            mode: cfg.url_match_mode,
            empty: cfg.empty_rules_policy,
        })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn permits(&self, candidate: &str) -> bool {
        if self.matchers.is_empty() {
            return self.empty == EmptyRulesPolicy::Allow;
        }
        for matcher in &self.matchers {
            if matcher.is_match(candidate) {
                return true;
            }
            if self.mode == UrlMatchMode::Faithful && matches!(matcher, Matcher::Literal(_)) {
                return false;
            }
        }
        false
    }
}

/// One-shot check of `candidate` against the rules of `cfg`.
///
/// Every rule is compiled before evaluation, so a bad pattern is reported even
/// when an earlier rule would have decided the outcome.
pub fn is_valid_url(cfg: &Configuration, candidate: &str) -> Result<bool, PatternError> {
    Ok(UrlPolicy::compile(cfg)?.permits(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rules(rules: Vec<UrlRule>) -> Configuration {
        Configuration {
            url_validators: rules,
            ..Configuration::default()
        }
    }

    #[test]
    fn empty_rules_allow_everything() {
        let cfg = Configuration::default();
        assert!(is_valid_url(&cfg, "").unwrap());
        assert!(is_valid_url(&cfg, "file:///etc/passwd").unwrap());
        assert!(is_valid_url(&cfg, "not a url at all").unwrap());
    }

    #[test]
    fn empty_rules_can_deny_everything() {
        let cfg = Configuration {
            empty_rules_policy: EmptyRulesPolicy::Deny,
            ..Configuration::default()
        };
        assert!(!is_valid_url(&cfg, "http://localhost").unwrap());
        assert!(!is_valid_url(&cfg, "").unwrap());
    }

    #[test]
    fn literal_rule_requires_exact_equality() {
        let cfg = with_rules(vec![UrlRule::literal("http://a")]);
        assert!(is_valid_url(&cfg, "http://a").unwrap());
        assert!(!is_valid_url(&cfg, "http://b").unwrap());
        assert!(!is_valid_url(&cfg, "http://a/").unwrap());
    }

    #[test]
    fn literal_mismatch_stops_before_later_rules() {
        let cfg = with_rules(vec![UrlRule::literal("http://a"), UrlRule::literal("http://b")]);
        assert!(!is_valid_url(&cfg, "http://b").unwrap());
    }

    #[test]
    fn regex_rule_is_a_full_match() {
        let cfg = with_rules(vec![UrlRule::regex("http://.*")]);
        assert!(is_valid_url(&cfg, "http://anything").unwrap());
        assert!(!is_valid_url(&cfg, "ftp://x").unwrap());
        assert!(!is_valid_url(&cfg, "see http://x").unwrap());
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let cfg = with_rules(vec![UrlRule::regex("http://a|http://b")]);
        assert!(is_valid_url(&cfg, "http://b").unwrap());
        assert!(!is_valid_url(&cfg, "http://a/extra").unwrap());
        assert!(!is_valid_url(&cfg, "xhttp://b").unwrap());
    }

    #[test]
    fn regex_mismatch_falls_through_to_next_rule() {
        let cfg = with_rules(vec![UrlRule::regex("http://a"), UrlRule::literal("http://b")]);
        assert!(is_valid_url(&cfg, "http://b").unwrap());
        assert!(is_valid_url(&cfg, "http://a").unwrap());
        assert!(!is_valid_url(&cfg, "http://c").unwrap());
    }

    #[test]
    fn only_regex_rules_exhausted_denies() {
        let cfg = with_rules(vec![UrlRule::regex("https://.*"), UrlRule::regex("file://.*")]);
        assert!(!is_valid_url(&cfg, "ftp://x").unwrap());
        assert!(is_valid_url(&cfg, "file:///tmp/a.html").unwrap());
    }

    #[test]
    fn first_match_mode_consults_every_rule() {
        let cfg = Configuration {
            url_match_mode: UrlMatchMode::FirstMatch,
            ..with_rules(vec![
                UrlRule::literal("http://a"),
                UrlRule::literal("http://b"),
                UrlRule::regex(r"https://docs\..*"),
            ])
        };
        assert!(is_valid_url(&cfg, "http://b").unwrap());
        assert!(is_valid_url(&cfg, "https://docs.example.org").unwrap());
        assert!(!is_valid_url(&cfg, "http://c").unwrap());
    }

    #[test]
    fn invalid_regex_reports_its_position() {
        let cfg = with_rules(vec![
            UrlRule::regex("http://ok"),
            UrlRule::literal("http://b"),
            UrlRule::regex("http://[unclosed"),
        ]);
        let err = is_valid_url(&cfg, "http://ok").unwrap_err();
        assert_eq!(err.rule_index, 2);
        assert_eq!(err.pattern, "http://[unclosed");
        assert!(err.to_string().contains("rule 2"));
    }

    #[test]
    fn unbalanced_group_cannot_escape_the_anchors() {
        let cfg = with_rules(vec![UrlRule::regex("http://a)|(.*")]);
        let err = is_valid_url(&cfg, "https://evil.example/").unwrap_err();
        assert_eq!(err.rule_index, 0);
        assert_eq!(err.pattern, "http://a)|(.*");

        let cfg = with_rules(vec![UrlRule::literal("http://x"), UrlRule::regex(".*)|(")]);
        assert_eq!(UrlPolicy::compile(&cfg).unwrap_err().rule_index, 1);
    }

    #[test]
    fn compiled_policy_is_reusable() {
        let cfg = with_rules(vec![UrlRule::regex(r"https://intranet\.local/.*")]);
        let policy = UrlPolicy::compile(&cfg).unwrap();
        assert_eq!(policy.len(), 1);
        assert!(policy.permits("https://intranet.local/index.html"));
        assert!(!policy.permits("https://intranet.local.evil.com/"));
    }
}
