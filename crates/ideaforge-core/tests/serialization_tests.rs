//! Wire-contract tests for the request and blueprint JSON shapes.

use ideaforge_core::domain::GenerateRequest;
use ideaforge_core::generate::Generator;
use serde_json::Value;

#[test]
fn request_round_trips_from_the_wire_shape() {
    let request: GenerateRequest =
        serde_json::from_str(r#"{"idea": "a clinic scheduler", "includeNonJS": false}"#).unwrap();
    assert_eq!(request.idea, "a clinic scheduler");
    assert!(!request.include_non_js);

    // Consumers may omit either field; samples stay off unless asked for.
    let bare: GenerateRequest = serde_json::from_str(r#"{"idea": "x"}"#).unwrap();
    assert!(!bare.include_non_js);
}

#[test]
fn blueprint_serializes_the_published_field_set_in_order() {
    let blueprint = Generator::new().generate(&GenerateRequest::new("a clinic scheduler"));
    let json = serde_json::to_string(&blueprint).unwrap();

    let expected_order = [
        "\"title\":",
        "\"summary\":",
        "\"logic\":",
        "\"tech_stack\":",
        "\"modules\":",
        "\"folder_structure\":",
        "\"dfd\":",
        "\"architecture\":",
        "\"files\":",
    ];
    let mut last = 0;
    for key in expected_order {
        let at = json.find(key).unwrap_or_else(|| panic!("{key} missing"));
        assert!(at >= last, "{key} out of order");
        last = at;
    }
}

#[test]
fn blueprint_field_types_match_consumers_expectations() {
    let blueprint = Generator::new().generate(&GenerateRequest::new("an ai study chat"));
    let value: Value = serde_json::to_value(&blueprint).unwrap();

    assert!(value["title"].is_string());
    assert!(value["summary"].is_string());
    // logic travels as one newline-joined string, not an array.
    assert!(value["logic"].is_string());
    assert_eq!(value["logic"].as_str().unwrap().lines().count(), 5);

    assert!(value["tech_stack"].is_array());
    assert!(value["modules"].is_array());
    assert!(value["folder_structure"].is_string());
    assert!(value["dfd"].is_string());
    assert!(value["architecture"].is_string());

    let files = value["files"].as_object().unwrap();
    assert!(files.values().all(Value::is_string));
    assert!(files.contains_key("package.json"));
}

#[test]
fn package_manifest_in_files_parses_as_json() {
    let blueprint = Generator::new().generate(&GenerateRequest::new("notes app"));
    let manifest = blueprint.files.get("package.json").unwrap();
    let value: Value = serde_json::from_str(manifest).unwrap();

    assert_eq!(value["name"], "web-application-—-notes-app");
    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["private"], true);
    assert_eq!(value["dependencies"]["next"], "13.5.6");
    assert_eq!(value["devDependencies"]["tailwindcss"], "^3.5.5");
}
