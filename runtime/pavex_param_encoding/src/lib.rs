/*!
Per-action encoding rules for request parameters.

Request parameters are text by default: their values are tagged with
[`EncodingTag::TEXT_DEFAULT`]. Some actions need something else: a file path
that may contain arbitrary bytes should be treated as [`EncodingTag::BINARY`].

A controller declares those exceptions on its [`ParamEncodingConfig`]:

- [`skip_encoding`](ParamEncodingConfig::skip_encoding) tags every parameter of
  every action (or of a list of actions) with a non-default encoding;
- [`set_param_encoding`](ParamEncodingConfig::set_param_encoding) tags a single
  parameter of a single action.

When a request comes in, the decoding layer asks the controller's rules whether the
target action [is templated](ParamEncodingConfig::is_templated) and, if it is,
[resolves](ParamEncodingConfig::resolve) the tag of each parameter.
[`ParamEncodingConfig::tag_params`] bundles those steps together.

# Tagging is not transcoding

An [`EncodingTag`] is a label. Tagging a value never changes its bytes,
see [`TaggedParam::retag`].

# Controller hierarchies

Controllers can be derived from one another via [`ControllerRegistry`].
A child controller starts from a copy of its parent's rules and then diverges
independently.
*/
pub mod config;
pub mod errors;
mod registry;
mod tag;
mod tagged;

pub use config::ParamEncodingConfig;
pub use registry::ControllerRegistry;
pub use tag::EncodingTag;
pub use tagged::TaggedParam;
