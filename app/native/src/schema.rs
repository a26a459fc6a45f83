//! JSON Schemas for the snapshot files and the configuration file.

use schemars::JsonSchema;

use crate::config::TesseraConfig;
use crate::constants::SCHEMA_BASE_URL;
use crate::settings::{AnimationState, Domain, HotkeyState, WindowLayoutState};

fn with_id<T: JsonSchema>(file_name: &str) -> schemars::Schema {
    let mut schema = schemars::schema_for!(T);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(format!("{SCHEMA_BASE_URL}/{file_name}")),
        );
    }

    schema
}

/// Generates the JSON Schema for `domain`'s snapshot file.
#[must_use]
pub fn snapshot_schema(domain: Domain) -> schemars::Schema {
    match domain {
        Domain::WindowLayout => with_id::<WindowLayoutState>("window-layout.schema.json"),
        Domain::Hotkey => with_id::<HotkeyState>("hotkey.schema.json"),
        Domain::Animation => with_id::<AnimationState>("animation.schema.json"),
    }
}

/// Generates the JSON Schema for the configuration file.
#[must_use]
pub fn config_schema() -> schemars::Schema { with_id::<TesseraConfig>("tessera.schema.json") }

/// Pretty-prints a schema.
#[must_use]
pub fn to_json(schema: &schemars::Schema) -> String {
    serde_json::to_string_pretty(schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_schema_has_camel_case_properties() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&snapshot_schema(Domain::WindowLayout))).unwrap();

        assert_eq!(json["$schema"], "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(json["title"], "WindowLayoutState");
        assert!(json["properties"]["windowGap"].is_object());
        assert!(json["properties"]["splitRatio"].is_object());
    }

    #[test]
    fn test_every_schema_has_id() {
        for domain in Domain::ALL {
            let schema = snapshot_schema(domain);
            let id = schema.as_object().unwrap()["$id"].as_str().unwrap().to_string();
            assert!(id.starts_with("https://"));
            assert!(id.ends_with(".schema.json"));
        }
    }

    #[test]
    fn test_config_schema() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&config_schema())).unwrap();
        assert!(json["properties"]["logLevel"].is_object());
        assert!(json["$id"].as_str().unwrap().ends_with("tessera.schema.json"));
    }
}
