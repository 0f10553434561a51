//! Tag Helper Catalog Tests

use markup_compiler::descriptors::{NameComparison, TagHelperCatalog};
use markup_compiler::diagnostics::ErrorCode;
use markup_compiler::CompilerError;
use std::io::Write;

const CATALOG: &str = r#"[
  {
    "kind": "Components.Component",
    "name": "Test.Counter",
    "assemblyName": "Test",
    "metadata": { "Common.TypeName": "Test.Counter" },
    "boundAttributes": [
      {
        "name": "IncrementAmount",
        "typeName": "System.Int32",
        "metadata": { "Common.PropertyName": "IncrementAmount" }
      },
      { "name": "data-bad", "typeName": "System.String" }
    ],
    "tagMatchingRules": [{ "tagName": "Counter" }]
  },
  {
    "kind": "Components.Splat",
    "name": "Attributes",
    "assemblyName": "Microsoft.AspNetCore.Components",
    "metadata": { "Components.IsSpecialKind": "Components.Splat" },
    "boundAttributes": [
      {
        "name": "@attributes",
        "typeName": "System.Object",
        "metadata": { "Common.DirectiveAttribute": "True" },
        "parameters": [{ "name": "Format" }, { "name": "format" }]
      }
    ],
    "tagMatchingRules": [
      {
        "tagName": "*",
        "attributes": [{ "name": "@attributes", "nameComparison": "fullMatch" }]
      }
    ]
  }
]"#;

#[test]
fn should_build_descriptors_through_builders() {
    let catalog = TagHelperCatalog::from_json_str(CATALOG).unwrap();
    assert_eq!(catalog.len(), 2);

    let counter = catalog.find("Test.Counter").unwrap();
    assert!(counter.is_component_tag_helper());
    assert_eq!(
        counter.bound_attributes()[0].display_name(),
        Some("int Test.Counter.IncrementAmount")
    );

    let splat = catalog.find("Attributes").unwrap();
    assert!(splat.is_splat_tag_helper());
    assert!(splat.bound_attributes()[0].is_directive_attribute());
    assert_eq!(splat.bound_attributes()[0].parameters().len(), 2);
    assert_eq!(
        splat.tag_matching_rules()[0].attributes()[0].name_comparison(),
        NameComparison::FullMatch
    );
}

#[test]
fn should_surface_validation_diagnostics() {
    let catalog = TagHelperCatalog::from_json_str(CATALOG).unwrap();
    assert!(catalog.has_errors());

    let diagnostics = catalog.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let (owner, diagnostic) = diagnostics[0];
    assert_eq!(owner.name(), "Test.Counter");
    assert_eq!(diagnostic.code, ErrorCode::InvalidBoundAttributeNameStartsWith);
}

#[test]
fn should_reject_missing_required_fields() {
    let err = TagHelperCatalog::from_json_str(r#"[{ "kind": "ITagHelper", "name": "X" }]"#)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<CompilerError>(),
        Some(&CompilerError::MissingArgument("assembly_name"))
    );
}

#[test]
fn should_reject_malformed_json() {
    assert!(TagHelperCatalog::from_json_str("{ not json").is_err());
}

#[test]
fn should_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = TagHelperCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn should_report_missing_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = TagHelperCatalog::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}
