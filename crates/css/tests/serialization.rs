mod common;

use css_utils::vars::{ValidationError, assign_css_var, create_css_var};
use serde_json::json;
use std::error::Error;

#[test]
fn definitions_serialize_as_keyed_mapping() -> Result<(), Box<dyn Error>> {
    common::init_logging();
    let spacing = assign_css_var(create_css_var("spacing")?, "12")?;
    assert_eq!(serde_json::to_value(&spacing)?, json!({ "--spacing": "12" }));

    let width = assign_css_var(create_css_var("container-width")?, "calc(100% - 2rem)")?;
    assert_eq!(serde_json::to_value(&width)?, json!({ "--container-width": "calc(100% - 2rem)" }));

    let nulled = assign_css_var(create_css_var("test")?, None::<&str>)?;
    assert_eq!(serde_json::to_value(&nulled)?, json!({ "--test": null }));
    Ok(())
}

#[test]
fn names_and_references_serialize_as_strings() -> Result<(), Box<dyn Error>> {
    let reference = create_css_var("gap")?;
    assert_eq!(serde_json::to_string(&reference)?, "\"var(--gap)\"");
    let definition = assign_css_var(&reference, "4px")?;
    assert_eq!(serde_json::to_string(definition.name())?, "\"--gap\"");
    Ok(())
}

#[test]
fn validation_errors_are_std_errors() {
    let err: Box<dyn Error> = Box::new(ValidationError::MissingValue);
    assert_eq!(err.to_string(), "CSS variable value cannot be undefined");
}
