use capgate_types::FeatureId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `capgate.json` schema v1.
///
/// Unknown keys are rejected, at the top level and inside `tools`. Forward
/// compatibility is handled by versioning the document (the `schema` hint),
/// not by ignoring unrecognized fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GateConfigV1 {
    /// Optional schema string for tooling (`capgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Per-feature overrides. A feature missing here is enabled.
    #[serde(default)]
    pub features: BTreeMap<FeatureId, bool>,

    /// Tool-level settings.
    #[serde(default)]
    pub tools: ToolsSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// Tools disabled by name regardless of their feature's state. Names
    /// outside the catalog are accepted; they simply never match.
    #[serde(default)]
    pub disabled: Vec<String>,
}
