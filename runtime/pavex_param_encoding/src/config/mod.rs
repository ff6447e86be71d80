//! Types related to [`ParamEncodingConfig`].
mod action;

pub use action::ActionEncodings;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::EncodingTag;
use crate::errors::{InvalidParamEncodingConfig, ResolveError};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RawParamEncodingConfig")]
/// The parameter encoding rules of a controller.
///
/// By default, every parameter is tagged with [`EncodingTag::TEXT_DEFAULT`].
/// A controller can opt out of the default:
///
/// - for every action, via [`skip_encoding`](Self::skip_encoding) with no actions;
/// - for specific actions, via [`skip_encoding`](Self::skip_encoding) with a list of actions;
/// - for a single parameter of a single action, via [`set_param_encoding`](Self::set_param_encoding).
///
/// # Example
///
/// ```rust
/// use pavex_param_encoding::{EncodingTag, ParamEncodingConfig};
///
/// let mut config = ParamEncodingConfig::new();
/// config.set_param_encoding("show", "file_path", EncodingTag::BINARY);
///
/// assert!(config.is_templated("show"));
/// assert_eq!(config.encoding_for("show", "file_path"), Some(&EncodingTag::BINARY));
/// assert_eq!(config.encoding_for("show", "repo_name"), Some(&EncodingTag::TEXT_DEFAULT));
/// // No rules for `index`: the caller falls back to its default handling.
/// assert_eq!(config.encoding_for("index", "file_path"), None);
/// ```
///
/// # Inheritance
///
/// A derived controller starts from a copy of its parent's rules,
/// see [`inherit`](Self::inherit).
/// From that point onwards, parent and child evolve independently.
///
/// # Configuration
///
/// The rules can be loaded from your application configuration.
/// Every field is optional; `default_encoding` and `actions` are mutually exclusive:
///
/// ```rust
/// use pavex_param_encoding::{EncodingTag, ParamEncodingConfig};
///
/// let config: ParamEncodingConfig = serde_json::from_str(r#"{
///     "actions": {
///         "show": { "fallback": "utf-8", "params": { "file_path": "binary" } }
///     }
/// }"#).unwrap();
/// assert_eq!(config.encoding_for("show", "file_path"), Some(&EncodingTag::BINARY));
/// ```
pub struct ParamEncodingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_encoding: Option<EncodingTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<IndexMap<String, ActionEncodings>>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "snake_case")]
struct RawParamEncodingConfig {
    #[serde(default)]
    default_encoding: Option<EncodingTag>,
    #[serde(default)]
    actions: Option<IndexMap<String, ActionEncodings>>,
}

impl TryFrom<RawParamEncodingConfig> for ParamEncodingConfig {
    type Error = InvalidParamEncodingConfig;

    fn try_from(raw: RawParamEncodingConfig) -> Result<Self, Self::Error> {
        if raw.default_encoding.is_some() && raw.actions.is_some() {
            return Err(InvalidParamEncodingConfig);
        }
        Ok(Self {
            default_encoding: raw.default_encoding,
            actions: raw.actions,
        })
    }
}

impl ParamEncodingConfig {
    /// A configuration with no rules: no action is templated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the starting configuration of a child controller from its parent's.
    ///
    /// The child gets its own copy of every rule: default tag, actions, explicit
    /// entries and fallback tags. Declarations on the child never affect the
    /// parent (or any sibling), and vice versa.
    ///
    /// It must be invoked when the child is defined, before any of its own declarations.
    /// [`ControllerRegistry::define`](crate::ControllerRegistry::define) does it for you.
    pub fn inherit(parent: &Self) -> Self {
        parent.clone()
    }

    /// Tag parameters with `with` instead of the default text encoding.
    ///
    /// If `actions` is empty, every parameter of every action is tagged with `with`
    /// and all action-specific rules are discarded.
    ///
    /// Otherwise the rule only applies to the listed actions, and any
    /// controller-wide rule is discarded.
    /// For each listed action, `with` becomes the fallback tag, i.e. the tag of every
    /// parameter without an explicit entry. Explicit entries that were already
    /// declared for that action are preserved.
    pub fn skip_encoding<I>(&mut self, actions: I, with: EncodingTag)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut actions = actions.into_iter().map(Into::<String>::into).peekable();
        if actions.peek().is_none() {
            tracing::debug!(encoding = %with, "Tagging the parameters of every action");
            self.default_encoding = Some(with);
            self.actions = None;
            return;
        }
        for action in actions {
            tracing::debug!(action = %action, encoding = %with, "Tagging the parameters of an action");
            self.action_mut(action, with.clone());
        }
    }

    /// Treat the parameters of the given actions as raw bytes.
    ///
    /// A shorthand for [`skip_encoding`](Self::skip_encoding) with [`EncodingTag::BINARY`].
    pub fn skip_parameter_encoding<I>(&mut self, actions: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.skip_encoding(actions, EncodingTag::BINARY)
    }

    /// Tag `param` with `encoding` when it's received by `action`.
    ///
    /// Every other parameter of `action` falls back to [`EncodingTag::TEXT_DEFAULT`],
    /// even if the controller used to tag all its parameters with a different encoding.
    /// Explicit entries previously declared for other parameters of `action` are preserved.
    pub fn set_param_encoding(
        &mut self,
        action: impl Into<String>,
        param: impl Into<String>,
        encoding: EncodingTag,
    ) {
        let (action, param) = (action.into(), param.into());
        tracing::debug!(action = %action, param = %param, encoding = %encoding, "Tagging a single parameter");
        self.action_mut(action, EncodingTag::TEXT_DEFAULT)
            .params
            .insert(param, encoding);
    }

    /// Returns `true` if at least one encoding rule applies to `action`.
    pub fn is_templated(&self, action: &str) -> bool {
        match (&self.default_encoding, &self.actions) {
            (_, Some(actions)) => actions.contains_key(action),
            (Some(_), None) => true,
            (None, None) => false,
        }
    }

    /// The tag for `param` when it's received by `action`.
    ///
    /// If an explicit entry exists for `param`, it wins. Otherwise the fallback tag
    /// of `action` (or the controller-wide tag) is returned.
    ///
    /// An error is returned if `action` is not [templated](Self::is_templated).
    pub fn resolve(&self, action: &str, param: &str) -> Result<&EncodingTag, ResolveError> {
        let tag = match (&self.actions, &self.default_encoding) {
            (None, Some(default)) => Some(default),
            (Some(actions), _) => actions.get(action).map(|rules| rules.resolve(param)),
            (None, None) => None,
        };
        let Some(tag) = tag else {
            return Err(ResolveError::UntemplatedAction {
                action: action.to_owned(),
            });
        };
        tracing::trace!(action, param, encoding = %tag, "Resolved parameter encoding");
        Ok(tag)
    }

    /// The tag for `param` when it's received by `action`, or `None`
    /// if no rule applies to `action`.
    ///
    /// It checks [`is_templated`](Self::is_templated) before [resolving](Self::resolve).
    pub fn encoding_for(&self, action: &str, param: &str) -> Option<&EncodingTag> {
        if !self.is_templated(action) {
            return None;
        }
        self.resolve(action, param).ok()
    }

    /// The tag applied to every parameter of every action, if one was set.
    pub fn default_encoding(&self) -> Option<&EncodingTag> {
        self.default_encoding.as_ref()
    }

    /// The rules declared for `action`, if any.
    pub fn action(&self, action: &str) -> Option<&ActionEncodings> {
        self.actions.as_ref()?.get(action)
    }

    /// Iterate over the actions with specific rules, in declaration order.
    pub fn actions(&self) -> impl Iterator<Item = (&str, &ActionEncodings)> {
        self.actions
            .iter()
            .flatten()
            .map(|(name, rules)| (name.as_str(), rules))
    }

    /// Returns `true` if no rule has been declared.
    pub fn is_empty(&self) -> bool {
        self.default_encoding.is_none() && self.actions.is_none()
    }

    /// Switch to per-action rules, then set the fallback tag of `action`,
    /// creating its entry if needed.
    fn action_mut(&mut self, action: String, fallback: EncodingTag) -> &mut ActionEncodings {
        self.default_encoding = None;
        match self.actions.get_or_insert_with(IndexMap::new).entry(action) {
            Entry::Occupied(entry) => {
                let rules = entry.into_mut();
                rules.fallback = fallback;
                rules
            }
            Entry::Vacant(entry) => entry.insert(ActionEncodings::new(fallback)),
        }
    }
}
