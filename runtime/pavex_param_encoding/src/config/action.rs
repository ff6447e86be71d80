use indexmap::IndexMap;

use crate::EncodingTag;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// The encoding rules for the parameters of a single action.
///
/// Parameters with an explicit entry use that entry's tag.
/// Every other parameter resolves to the [fallback tag](Self::fallback).
pub struct ActionEncodings {
    pub(crate) fallback: EncodingTag,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub(crate) params: IndexMap<String, EncodingTag>,
}

impl ActionEncodings {
    /// Rules with no explicit entries: every parameter resolves to `fallback`.
    pub fn new(fallback: EncodingTag) -> Self {
        Self {
            fallback,
            params: IndexMap::new(),
        }
    }

    /// The tag used for parameters without an explicit entry.
    pub fn fallback(&self) -> &EncodingTag {
        &self.fallback
    }

    /// The tag explicitly assigned to `param`, if any.
    ///
    /// It does **not** consider the fallback tag. Use [`resolve`](Self::resolve) for that.
    pub fn get(&self, param: &str) -> Option<&EncodingTag> {
        self.params.get(param)
    }

    /// The tag that applies to `param`: its explicit entry, if there is one,
    /// or the fallback tag otherwise.
    pub fn resolve(&self, param: &str) -> &EncodingTag {
        self.params.get(param).unwrap_or(&self.fallback)
    }

    /// Iterate over the explicit per-parameter entries, in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &EncodingTag)> {
        self.params.iter().map(|(name, tag)| (name.as_str(), tag))
    }
}
