//! Pure text rendering for the post-load diagnostic summary.
//!
//! Everything here builds strings from an already-loaded configuration. The
//! resolver never consults this output, and these functions never touch the
//! filesystem or an output stream.

use capgate_domain::policy::GateConfig;
use capgate_domain::{disabled_features, is_feature_enabled, is_tool_enabled};
use capgate_loader::{ConfigSource, LoadedConfig};
use capgate_types::FeatureId;

/// Summarize what a loaded configuration disables.
///
/// One line per fact: the config source, then disabled features, the tools
/// they take down with them, and explicitly disabled tools. A configuration
/// with no overrides summarizes to a single "everything enabled" line.
pub fn render_summary(loaded: &LoadedConfig) -> String {
    let mut out = String::new();

    match &loaded.source {
        ConfigSource::Default => {
            out.push_str("capgate: no config file found; defaults in effect\n");
        }
        ConfigSource::File(path) => {
            out.push_str(&format!("capgate: loaded {path}\n"));
        }
    }

    let cfg = &loaded.config;
    let off = disabled_features(cfg);

    if off.is_empty() && cfg.disabled_tools.is_empty() {
        out.push_str("all features and tools are enabled\n");
        return out;
    }

    if !off.is_empty() {
        let names: Vec<&str> = off.iter().map(|f| f.as_str()).collect();
        out.push_str(&format!("disabled features: {}\n", names.join(", ")));

        let gated: Vec<&str> = off
            .iter()
            .flat_map(|f| capgate_catalog::tools_of(*f).iter().copied())
            .collect();
        out.push_str(&format!("tools disabled via features: {}\n", gated.join(", ")));
    }

    if !cfg.disabled_tools.is_empty() {
        let names: Vec<&str> = cfg.disabled_tools.iter().map(String::as_str).collect();
        out.push_str(&format!("tools disabled by name: {}\n", names.join(", ")));
    }

    out
}

/// Per-feature listing of every registered tool with its effective state.
pub fn render_listing(cfg: &GateConfig) -> String {
    let mut out = String::new();
    for feature in FeatureId::ALL {
        out.push_str(&format!("{feature} ({})\n", state(is_feature_enabled(feature, cfg))));
        for tool in capgate_catalog::tools_of(feature) {
            out.push_str(&format!("  {tool}: {}\n", state(is_tool_enabled(tool, cfg))));
        }
    }
    out
}

fn state(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
