use std::borrow::Cow;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
/// The byte encoding attached to a request parameter.
///
/// An encoding tag is a label: applying it to a value never transcodes the
/// underlying bytes, it only changes how they are meant to be interpreted.
///
/// # No validation
///
/// Tags are opaque. [`EncodingTag::new`] accepts any name, and two tags are
/// equal only if their names are byte-for-byte equal (`"UTF-8"` and `"utf-8"`
/// are different tags).
pub struct EncodingTag(Cow<'static, str>);

impl EncodingTag {
    /// Raw bytes, with no text encoding attached.
    pub const BINARY: EncodingTag = EncodingTag(Cow::Borrowed("binary"));
    /// The encoding used for parameters that have no special handling.
    pub const TEXT_DEFAULT: EncodingTag = EncodingTag(Cow::Borrowed("utf-8"));

    /// Create a tag from an arbitrary encoding name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The name of the encoding.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is [`EncodingTag::BINARY`].
    pub fn is_binary(&self) -> bool {
        *self == Self::BINARY
    }
}

impl Default for EncodingTag {
    fn default() -> Self {
        Self::TEXT_DEFAULT
    }
}

impl std::fmt::Display for EncodingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EncodingTag {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EncodingTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
