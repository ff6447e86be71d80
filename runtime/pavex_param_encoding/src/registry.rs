use indexmap::IndexMap;

use crate::ParamEncodingConfig;
use crate::errors::DefineError;

#[derive(Debug, Clone)]
struct Controller {
    parent: Option<String>,
    encodings: ParamEncodingConfig,
}

#[derive(Debug, Clone, Default)]
/// The parameter encoding rules of every controller in your application,
/// keyed by controller name.
///
/// Controllers can be derived from a parent controller: the child starts
/// with a copy of its parent's rules (see [`ParamEncodingConfig::inherit`]).
///
/// # Inheritance is a snapshot
///
/// The copy is taken when the child is [defined](Self::define).
/// Rules declared on the parent afterwards are **not** propagated to the child.
/// Define (and configure) parents before their children.
///
/// # Example
///
/// ```rust
/// use pavex_param_encoding::{ControllerRegistry, EncodingTag};
///
/// let mut registry = ControllerRegistry::new();
/// registry.define("FilesController", None)?
///     .skip_parameter_encoding(["download"]);
/// registry.define("ArchivesController", Some("FilesController"))?
///     .set_param_encoding("show", "path", EncodingTag::BINARY);
///
/// let archives = registry.get("ArchivesController").unwrap();
/// assert!(archives.is_templated("download"));
/// assert!(archives.is_templated("show"));
///
/// let files = registry.get("FilesController").unwrap();
/// assert!(!files.is_templated("show"));
/// # Ok::<(), pavex_param_encoding::errors::DefineError>(())
/// ```
pub struct ControllerRegistry {
    controllers: IndexMap<String, Controller>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new controller, optionally derived from `parent`.
    ///
    /// It returns the rules of the new controller, ready for its own declarations.
    /// It fails if a controller with the same name already exists or if
    /// `parent` hasn't been defined.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        parent: Option<&str>,
    ) -> Result<&mut ParamEncodingConfig, DefineError> {
        let name = name.into();
        if self.controllers.contains_key(&name) {
            return Err(DefineError::AlreadyDefined { name });
        }
        let encodings = match parent {
            None => ParamEncodingConfig::new(),
            Some(parent) => {
                let Some(parent_controller) = self.controllers.get(parent) else {
                    return Err(DefineError::UnknownParent {
                        controller: name,
                        parent: parent.to_owned(),
                    });
                };
                ParamEncodingConfig::inherit(&parent_controller.encodings)
            }
        };
        tracing::debug!(controller.name = %name, controller.parent = ?parent, "Defined a controller");
        let controller = self.controllers.entry(name).or_insert(Controller {
            parent: parent.map(ToOwned::to_owned),
            encodings,
        });
        Ok(&mut controller.encodings)
    }

    /// The rules of the controller named `name`, if it has been defined.
    pub fn get(&self, name: &str) -> Option<&ParamEncodingConfig> {
        self.controllers.get(name).map(|c| &c.encodings)
    }

    /// A mutable handle to the rules of the controller named `name`, if it has been defined.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParamEncodingConfig> {
        self.controllers.get_mut(name).map(|c| &mut c.encodings)
    }

    /// The name of the controller `name` was derived from.
    ///
    /// It returns `None` if `name` has no parent or hasn't been defined.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.controllers.get(name)?.parent.as_deref()
    }

    /// Iterate over all controllers, in definition order.
    pub fn controllers(&self) -> impl Iterator<Item = (&str, &ParamEncodingConfig)> {
        self.controllers
            .iter()
            .map(|(name, c)| (name.as_str(), &c.encodings))
    }
}
