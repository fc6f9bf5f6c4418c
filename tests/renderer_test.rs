use serde_json::json;
use wecon::error::Error;
use wecon::helpers::HelperTable;
use wecon::record::DataRecord;
use wecon::renderer::{PlaceholderRenderer, TemplateRenderer};

fn record() -> DataRecord {
    DataRecord::new()
        .with("name", "orders")
        .with("port", 3000)
        .with("debug", true)
        .with("app", json!({ "name": "shop" }))
}

#[test]
fn test_bare_keys() {
    let engine = PlaceholderRenderer::new();
    let rendered = engine.render("{{name}} on {{ port }} ({{debug}})", &record()).unwrap();
    assert_eq!(rendered, "orders on 3000 (true)");
}

#[test]
fn test_helpers() {
    let engine = PlaceholderRenderer::new();
    let record = record();
    assert_eq!(engine.render("{{capitalize name}}", &record).unwrap(), "Orders");
    assert_eq!(engine.render("{{uppercase name}}", &record).unwrap(), "ORDERS");
    assert_eq!(
        engine.render("{{lowercase name}}", &DataRecord::new().with("name", "MiXeD")).unwrap(),
        "mixed"
    );
    assert_eq!(
        engine.render("{{json app}}", &record).unwrap(),
        "{\n  \"name\": \"shop\"\n}"
    );
}

#[test]
fn test_missing_key_renders_empty() {
    let engine = PlaceholderRenderer::new();
    let rendered = engine.render("a[{{missing}}]b", &record()).unwrap();
    assert_eq!(rendered, "a[]b");

    let rendered = engine.render("[{{capitalize missing}}]", &record()).unwrap();
    assert_eq!(rendered, "[]");
}

#[test]
fn test_dotted_lookup() {
    let engine = PlaceholderRenderer::new();
    assert_eq!(engine.render("{{app.name}}", &record()).unwrap(), "shop");
    assert_eq!(engine.render("{{app.missing}}", &record()).unwrap(), "");
}

#[test]
fn test_unknown_helper_is_fatal() {
    let engine = PlaceholderRenderer::new();
    match engine.render("{{shout name}}", &record()) {
        Err(Error::UnknownHelper { name }) => assert_eq!(name, "shout"),
        other => panic!("Expected UnknownHelper, got {other:?}"),
    }
}

#[test]
fn test_malformed_placeholders() {
    let engine = PlaceholderRenderer::new();
    assert!(matches!(engine.render("{{}}", &record()), Err(Error::TemplateError(_))));
    assert!(matches!(engine.render("{{a b c}}", &record()), Err(Error::TemplateError(_))));
    // Unterminated placeholders are plain text.
    assert_eq!(engine.render("{{name", &record()).unwrap(), "{{name");
}

#[test]
fn test_no_html_escaping() {
    let engine = PlaceholderRenderer::new();
    let record = DataRecord::new().with("description", "<b>\"Tom & Jerry\"</b>");
    assert_eq!(engine.render("{{description}}", &record).unwrap(), "<b>\"Tom & Jerry\"</b>");
}

#[test]
fn test_rendering_is_idempotent() {
    let engine = PlaceholderRenderer::new();
    let template = "export const {{name}} = \"{{capitalize name}}\"; // {{port}}";
    let first = engine.render(template, &record()).unwrap();
    let second = engine.render(template, &record()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_helper_table() {
    fn reverse(value: &serde_json::Value) -> String {
        wecon::helpers::stringify(value).chars().rev().collect()
    }

    let engine = PlaceholderRenderer::with_helpers(HelperTable::empty().with("reverse", reverse));
    assert_eq!(engine.render("{{reverse name}}", &record()).unwrap(), "sredro");
    assert!(matches!(
        engine.render("{{capitalize name}}", &record()),
        Err(Error::UnknownHelper { .. })
    ));
}
