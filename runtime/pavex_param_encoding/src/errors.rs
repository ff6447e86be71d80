//! Errors that can occur when declaring or resolving parameter encodings.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned by [`ParamEncodingConfig::resolve`][crate::ParamEncodingConfig::resolve].
pub enum ResolveError {
    /// No encoding rule applies to the requested action.
    ///
    /// Check [`ParamEncodingConfig::is_templated`][crate::ParamEncodingConfig::is_templated]
    /// before resolving.
    #[error("There are no parameter encoding rules for the `{action}` action")]
    UntemplatedAction {
        /// The action that was looked up.
        action: String,
    },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned by [`ControllerRegistry::define`][crate::ControllerRegistry::define].
pub enum DefineError {
    /// A controller with the same name has already been defined.
    #[error("A controller named `{name}` has already been defined")]
    AlreadyDefined {
        /// The name of the controller.
        name: String,
    },
    /// The parent controller has not been defined yet.
    #[error("`{controller}` can't inherit from `{parent}`: there is no controller named `{parent}`")]
    UnknownParent {
        /// The controller that was being defined.
        controller: String,
        /// The parent it was supposed to inherit from.
        parent: String,
    },
}

#[derive(Debug, thiserror::Error)]
#[error(
    "A parameter encoding configuration can't set both `default_encoding` and `actions`. \
    Use `default_encoding` to tag every parameter of every action, \
    or `actions` to tag the parameters of specific actions"
)]
/// Error raised when deserializing a
/// [`ParamEncodingConfig`][crate::ParamEncodingConfig] that sets mutually exclusive fields.
pub struct InvalidParamEncodingConfig;

#[derive(Debug, thiserror::Error)]
#[error("The value of the `{name}` parameter is not valid UTF-8")]
/// The error returned by [`TaggedParam::to_str`][crate::TaggedParam::to_str].
pub struct InvalidUtf8Error {
    /// The name of the parameter.
    pub name: String,
    #[source]
    pub source: std::str::Utf8Error,
}
