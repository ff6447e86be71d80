use bytes::Bytes;
use pavex_param_encoding::{EncodingTag, ParamEncodingConfig};

fn raw_params() -> Vec<(&'static str, Bytes)> {
    vec![
        ("repo_name", Bytes::from_static(b"pavex")),
        ("file_path", Bytes::from_static(b"docs/\xffguide.md")),
    ]
}

#[test]
fn untemplated_actions_are_tagged_as_text() {
    let config = ParamEncodingConfig::new();
    let tagged = config.tag_params("show", raw_params());

    for param in &tagged {
        assert_eq!(param.encoding(), &EncodingTag::TEXT_DEFAULT);
    }
}

#[test]
fn declared_parameters_are_tagged_without_transcoding() {
    let mut config = ParamEncodingConfig::new();
    config.set_param_encoding("show", "file_path", EncodingTag::BINARY);

    let tagged = config.tag_params("show", raw_params());

    assert_eq!(tagged[0].name(), "repo_name");
    assert_eq!(tagged[0].encoding(), &EncodingTag::TEXT_DEFAULT);
    assert_eq!(tagged[0].to_str().unwrap(), "pavex");

    assert_eq!(tagged[1].name(), "file_path");
    assert_eq!(tagged[1].encoding(), &EncodingTag::BINARY);
    assert_eq!(tagged[1].as_bytes(), b"docs/\xffguide.md");
    let err = tagged[1].to_str().unwrap_err();
    assert_eq!(
        err.to_string(),
        "The value of the `file_path` parameter is not valid UTF-8"
    );
}

#[test]
fn other_actions_are_left_alone() {
    let mut config = ParamEncodingConfig::new();
    config.skip_parameter_encoding(["upload"]);

    let param = config.tag_param("show", "file_path", "docs/guide.md");
    assert_eq!(param.encoding(), &EncodingTag::TEXT_DEFAULT);

    let param = config.tag_param("upload", "file_path", "docs/guide.md");
    assert!(param.encoding().is_binary());

    let (name, value, encoding) = param.into_parts();
    assert_eq!(name, "file_path");
    assert_eq!(value, Bytes::from_static(b"docs/guide.md"));
    assert_eq!(encoding, EncodingTag::BINARY);
}
