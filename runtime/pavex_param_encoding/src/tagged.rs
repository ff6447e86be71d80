use bytes::Bytes;

use crate::errors::InvalidUtf8Error;
use crate::{EncodingTag, ParamEncodingConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request parameter whose value has been labelled with an [`EncodingTag`].
///
/// The value is kept exactly as it was received: tagging never transcodes.
pub struct TaggedParam {
    name: String,
    value: Bytes,
    encoding: EncodingTag,
}

impl TaggedParam {
    pub fn new(name: impl Into<String>, value: impl Into<Bytes>, encoding: EncodingTag) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            encoding,
        }
    }

    /// Label the value with a different encoding.
    ///
    /// The underlying bytes are left untouched.
    pub fn retag(self, encoding: EncodingTag) -> Self {
        Self { encoding, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> &EncodingTag {
        &self.encoding
    }

    /// The raw bytes of the value.
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Interpret the value as a UTF-8 string.
    ///
    /// It fails if the bytes are not valid UTF-8, regardless of the tag: the
    /// value is never transcoded.
    pub fn to_str(&self) -> Result<&str, InvalidUtf8Error> {
        std::str::from_utf8(&self.value).map_err(|source| InvalidUtf8Error {
            name: self.name.clone(),
            source,
        })
    }

    pub fn into_parts(self) -> (String, Bytes, EncodingTag) {
        (self.name, self.value, self.encoding)
    }
}

impl ParamEncodingConfig {
    /// Tag a raw parameter value received by `action`.
    ///
    /// If `action` is [templated](Self::is_templated), the tag is [resolved](Self::resolve)
    /// from the declared rules. Otherwise the value is tagged with [`EncodingTag::TEXT_DEFAULT`].
    pub fn tag_param(
        &self,
        action: &str,
        name: impl Into<String>,
        raw: impl Into<Bytes>,
    ) -> TaggedParam {
        let name = name.into();
        let encoding = self
            .encoding_for(action, &name)
            .cloned()
            .unwrap_or(EncodingTag::TEXT_DEFAULT);
        TaggedParam::new(name, raw, encoding)
    }

    /// Tag every raw parameter value received by `action`.
    ///
    /// See [`tag_param`](Self::tag_param) for the tagging rules.
    pub fn tag_params<I, N, V>(&self, action: &str, params: I) -> Vec<TaggedParam>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Bytes>,
    {
        params
            .into_iter()
            .map(|(name, raw)| self.tag_param(action, name, raw))
            .collect()
    }
}
