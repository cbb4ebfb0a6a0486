//! Config parsing and validation for capgate.
//!
//! This crate is intentionally IO-free: it parses and validates
//! configuration provided as strings or already-parsed JSON values.
//! Validation reports every violation found, not just the first, so the
//! serde derives on the models are for tooling and embedding consumers;
//! the loader goes through [`validate_config_value`].

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod validate;

pub use model::{GateConfigV1, ToolsSection};
pub use resolve::resolve_config;
pub use validate::validate_config_value;

/// Parse raw config text into a JSON value.
pub fn parse_config_json(input: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(input)
}

/// Fuzz-friendly API for testing parsing and validation robustness without
/// filesystem access. These functions are designed to never panic on any
/// input.
pub mod fuzz {
    use super::*;

    /// Parse and validate arbitrary text as a v1 config document.
    ///
    /// Returns `Ok(())` when the text is a well-formed, schema-valid
    /// document, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_and_validate(text: &str) -> anyhow::Result<()> {
        let value = parse_config_json(text)?;
        match validate_config_value(&value) {
            Ok(cfg) => {
                let _ = resolve_config(cfg);
                Ok(())
            }
            Err(issues) => anyhow::bail!("{} validation issue(s)", issues.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_and_validate_never_panics(input in ".*") {
            let _ = fuzz::parse_and_validate(&input);
        }
    }

    #[test]
    fn emitted_schema_accepts_valid_and_rejects_mistyped_documents() {
        let schema =
            serde_json::to_value(schemars::schema_for!(GateConfigV1)).expect("schema to value");
        let validator = jsonschema::validator_for(&schema).expect("compile schema");

        let good = serde_json::json!({
            "features": { "pipelines": false },
            "tools": { "disabled": ["trigger_pipeline"] }
        });
        assert!(validator.is_valid(&good));

        let mistyped = serde_json::json!({
            "features": { "pipelines": "off" }
        });
        assert!(!validator.is_valid(&mistyped));
    }
}
