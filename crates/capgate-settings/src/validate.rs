use crate::model::{GateConfigV1, ToolsSection};
use capgate_types::{ConfigIssue, FeatureId};
use serde_json::Value;
use std::collections::BTreeMap;

/// Validate a parsed JSON document against the v1 config shape.
///
/// Collects every violation rather than stopping at the first. `null`
/// normalizes to the default (everything enabled) document.
pub fn validate_config_value(value: &Value) -> Result<GateConfigV1, Vec<ConfigIssue>> {
    let root = match value {
        Value::Null => return Ok(GateConfigV1::default()),
        Value::Object(map) => map,
        other => {
            return Err(vec![ConfigIssue::new(
                Vec::<String>::new(),
                format!("expected an object, found {}", json_kind(other)),
            )]);
        }
    };

    let mut cfg = GateConfigV1::default();
    let mut issues = Vec::new();

    for (key, entry) in root {
        match key.as_str() {
            "schema" => match entry {
                Value::String(s) => cfg.schema = Some(s.clone()),
                other => issues.push(ConfigIssue::new(
                    ["schema"],
                    format!("expected a string, found {}", json_kind(other)),
                )),
            },
            "features" => validate_features(entry, &mut cfg.features, &mut issues),
            "tools" => validate_tools(entry, &mut cfg.tools, &mut issues),
            other => issues.push(ConfigIssue::new(
                [other],
                "unknown key (expected one of: schema, features, tools)",
            )),
        }
    }

    if issues.is_empty() { Ok(cfg) } else { Err(issues) }
}

fn validate_features(
    value: &Value,
    out: &mut BTreeMap<FeatureId, bool>,
    issues: &mut Vec<ConfigIssue>,
) {
    let Value::Object(map) = value else {
        issues.push(ConfigIssue::new(
            ["features"],
            format!("expected an object, found {}", json_kind(value)),
        ));
        return;
    };

    for (name, entry) in map {
        let Some(feature) = FeatureId::from_wire(name) else {
            issues.push(ConfigIssue::new(
                ["features", name.as_str()],
                format!("unknown feature (expected one of: {})", known_features()),
            ));
            continue;
        };
        match entry {
            Value::Bool(enabled) => {
                out.insert(feature, *enabled);
            }
            other => issues.push(ConfigIssue::new(
                ["features", name.as_str()],
                format!("expected a boolean, found {}", json_kind(other)),
            )),
        }
    }
}

fn validate_tools(value: &Value, out: &mut ToolsSection, issues: &mut Vec<ConfigIssue>) {
    let Value::Object(map) = value else {
        issues.push(ConfigIssue::new(
            ["tools"],
            format!("expected an object, found {}", json_kind(value)),
        ));
        return;
    };

    for (key, entry) in map {
        match key.as_str() {
            "disabled" => {
                let Value::Array(items) = entry else {
                    issues.push(ConfigIssue::new(
                        ["tools", "disabled"],
                        format!("expected an array of strings, found {}", json_kind(entry)),
                    ));
                    continue;
                };
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(tool) => out.disabled.push(tool.clone()),
                        other => issues.push(ConfigIssue::new(
                            vec!["tools".to_string(), "disabled".to_string(), index.to_string()],
                            format!("expected a string, found {}", json_kind(other)),
                        )),
                    }
                }
            }
            other => issues.push(ConfigIssue::new(
                ["tools", other],
                "unknown key (expected: disabled)",
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn known_features() -> String {
    FeatureId::ALL.map(FeatureId::as_str).join(", ")
}
