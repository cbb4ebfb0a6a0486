use crate::policy::GateConfig;
use capgate_types::FeatureId;

/// `true` unless the config carries an explicit override for `feature`.
pub fn is_feature_enabled(feature: FeatureId, cfg: &GateConfig) -> bool {
    cfg.features.get(&feature).copied().unwrap_or(true)
}

/// Whether `tool` should be exposed to callers.
///
/// Feature-level disablement (via the catalog's owner lookup) and explicit
/// tool-level disablement are independent conditions; either one is enough
/// to disable the tool. A tool with no registered owner and no explicit
/// disable entry is enabled.
pub fn is_tool_enabled(tool: &str, cfg: &GateConfig) -> bool {
    if let Some(feature) = capgate_catalog::feature_of(tool) {
        if !is_feature_enabled(feature, cfg) {
            return false;
        }
    }
    !cfg.disabled_tools.contains(tool)
}

/// Candidates that resolve as enabled, in input order.
pub fn enabled_subset<'a, I>(candidates: I, cfg: &GateConfig) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|tool| is_tool_enabled(tool, cfg))
        .collect()
}

/// Candidates that resolve as disabled, in input order.
pub fn disabled_subset<'a, I>(candidates: I, cfg: &GateConfig) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|tool| !is_tool_enabled(tool, cfg))
        .collect()
}

/// Features carrying an explicit `false` override, in declaration order.
pub fn disabled_features(cfg: &GateConfig) -> Vec<FeatureId> {
    FeatureId::ALL
        .into_iter()
        .filter(|feature| !is_feature_enabled(*feature, cfg))
        .collect()
}
