//! Bundled SOAR data templates, loaded once and immutable thereafter.

use lazy_static::lazy_static;
use serde_json::Value;

const TEMPLATES_JSON: &str = include_str!("../../data/templates.json");

lazy_static! {
    static ref TEMPLATES: serde_json::Map<String, Value> = {
        let doc: Value =
            serde_json::from_str(TEMPLATES_JSON).expect("bundled templates.json is valid JSON");
        match doc {
            Value::Object(map) => map,
            _ => panic!("bundled templates.json must be an object keyed by template id"),
        }
    };
}

pub fn get(template_id: &str) -> Option<&'static Value> {
    TEMPLATES.get(template_id)
}

pub fn template_ids() -> Vec<&'static str> {
    TEMPLATES.keys().map(String::as_str).collect()
}
