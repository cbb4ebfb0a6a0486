use capgate_types::FeatureId;
use std::collections::{BTreeMap, BTreeSet};

/// Normalized enablement overrides, shared immutably across resolver queries.
///
/// Absence of a feature key means that feature is enabled. `disabled_tools`
/// entries are free-form names; entries outside the catalog never match and
/// are harmless. A reload produces a brand-new snapshot; a `GateConfig` is
/// never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateConfig {
    pub features: BTreeMap<FeatureId, bool>,
    pub disabled_tools: BTreeSet<String>,
}

impl GateConfig {
    /// The built-in configuration: every feature on, nothing disabled.
    pub fn all_enabled() -> Self {
        Self::default()
    }
}
