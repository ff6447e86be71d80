use googletest::{
    assert_that,
    prelude::{eq, len, none},
};
use itertools::Itertools;
use pavex_param_encoding::{ControllerRegistry, EncodingTag, errors::DefineError};

#[test]
fn root_controllers_start_empty() {
    let mut registry = ControllerRegistry::new();
    let config = registry.define("Files", None).unwrap();

    assert!(config.is_empty());
    assert_that!(registry.parent_of("Files"), none());
}

#[test]
fn children_start_from_their_parent_rules() {
    let mut registry = ControllerRegistry::new();
    registry
        .define("Files", None)
        .unwrap()
        .skip_parameter_encoding(["download"]);
    let child = registry.define("Archives", Some("Files")).unwrap();

    assert_that!(child.is_templated("download"), eq(true));
    assert_eq!(
        child.resolve("download", "path").unwrap(),
        &EncodingTag::BINARY
    );
    assert_eq!(registry.parent_of("Archives"), Some("Files"));
}

#[test]
fn siblings_diverge_independently() {
    let mut registry = ControllerRegistry::new();
    registry
        .define("Base", None)
        .unwrap()
        .set_param_encoding("show", "path", EncodingTag::BINARY);
    registry
        .define("Left", Some("Base"))
        .unwrap()
        .skip_encoding(Vec::<String>::new(), EncodingTag::new("latin-1"));
    registry
        .define("Right", Some("Base"))
        .unwrap()
        .skip_parameter_encoding(["index"]);

    let base = registry.get("Base").unwrap();
    let left = registry.get("Left").unwrap();
    let right = registry.get("Right").unwrap();

    assert_that!(base.is_templated("index"), eq(false));
    assert_eq!(base.resolve("show", "path").unwrap(), &EncodingTag::BINARY);

    assert_eq!(
        left.resolve("show", "path").unwrap(),
        &EncodingTag::new("latin-1")
    );
    assert_that!(left.is_templated("index"), eq(true));

    assert_eq!(right.resolve("show", "path").unwrap(), &EncodingTag::BINARY);
    assert_eq!(right.resolve("index", "q").unwrap(), &EncodingTag::BINARY);
}

#[test]
fn grandchildren_inherit_the_whole_lineage() {
    let mut registry = ControllerRegistry::new();
    registry
        .define("Application", None)
        .unwrap()
        .skip_parameter_encoding(["upload"]);
    registry
        .define("Files", Some("Application"))
        .unwrap()
        .set_param_encoding("show", "path", EncodingTag::BINARY);
    let archives = registry.define("Archives", Some("Files")).unwrap();

    assert_that!(archives.is_templated("upload"), eq(true));
    assert_that!(archives.is_templated("show"), eq(true));
    assert_that!(archives.is_templated("index"), eq(false));
}

#[test]
fn parent_declarations_after_definition_are_not_propagated() {
    let mut registry = ControllerRegistry::new();
    registry.define("Files", None).unwrap();
    registry.define("Archives", Some("Files")).unwrap();

    registry
        .get_mut("Files")
        .unwrap()
        .skip_parameter_encoding(["download"]);

    assert_that!(registry.get("Files").unwrap().is_templated("download"), eq(true));
    assert_that!(
        registry.get("Archives").unwrap().is_templated("download"),
        eq(false)
    );
}

#[test]
fn controllers_are_listed_in_definition_order() {
    let mut registry = ControllerRegistry::new();
    registry.define("B", None).unwrap();
    registry.define("A", None).unwrap();
    registry.define("C", Some("A")).unwrap();

    let names = registry.controllers().map(|(name, _)| name).collect_vec();
    assert_that!(names, len(eq(3)));
    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn unknown_parents_are_rejected() {
    let mut registry = ControllerRegistry::new();
    let err = registry.define("Archives", Some("Files")).unwrap_err();

    assert!(matches!(err, DefineError::UnknownParent { .. }));
    assert_eq!(
        err.to_string(),
        "`Archives` can't inherit from `Files`: there is no controller named `Files`"
    );
}
