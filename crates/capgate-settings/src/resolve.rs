use crate::model::GateConfigV1;
use capgate_domain::policy::GateConfig;

/// Resolve the user-facing document into the normalized snapshot consumed by
/// the resolver. Total: every validated document resolves; duplicate
/// `tools.disabled` entries collapse into the set.
pub fn resolve_config(cfg: GateConfigV1) -> GateConfig {
    GateConfig {
        features: cfg.features,
        disabled_tools: cfg.tools.disabled.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolsSection;
    use capgate_types::FeatureId;

    #[test]
    fn default_document_resolves_to_all_enabled() {
        assert_eq!(resolve_config(GateConfigV1::default()), GateConfig::all_enabled());
    }

    #[test]
    fn overrides_and_disabled_tools_carry_over() {
        let cfg = resolve_config(GateConfigV1 {
            schema: None,
            features: [(FeatureId::Pipelines, false)].into_iter().collect(),
            tools: ToolsSection {
                disabled: vec![
                    "trigger_pipeline".to_string(),
                    "trigger_pipeline".to_string(),
                    "get_wiki_page".to_string(),
                ],
            },
        });

        assert_eq!(cfg.features.get(&FeatureId::Pipelines), Some(&false));
        assert_eq!(cfg.disabled_tools.len(), 2);
        assert!(cfg.disabled_tools.contains("trigger_pipeline"));
        assert!(cfg.disabled_tools.contains("get_wiki_page"));
    }
}
