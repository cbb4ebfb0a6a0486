//! The `resolve` use case: partition candidate tool names by enablement.

use crate::summary::render_summary;
use anyhow::Context;
use camino::Utf8Path;
use capgate_domain::{disabled_subset, enabled_subset};

/// Input for the resolve use case.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInput<'a> {
    /// Explicit config path; `None` falls back to the environment override,
    /// then the default filename.
    pub config_path: Option<&'a Utf8Path>,
    /// Candidate tool names, in caller order.
    pub tools: &'a [String],
}

/// Output from the resolve use case. `enabled` and `disabled` partition the
/// input exactly, each preserving input order.
#[derive(Clone, Debug)]
pub struct ResolveOutput {
    /// Diagnostic summary of the loaded configuration, for stderr.
    pub summary: String,
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
}

/// Run the resolve use case: load config, partition the candidates.
pub fn run_resolve(input: ResolveInput<'_>) -> anyhow::Result<ResolveOutput> {
    let loaded = capgate_loader::load_config(input.config_path).context("load config")?;

    let candidates: Vec<&str> = input.tools.iter().map(String::as_str).collect();
    let enabled = enabled_subset(candidates.iter().copied(), &loaded.config);
    let disabled = disabled_subset(candidates.iter().copied(), &loaded.config);

    Ok(ResolveOutput {
        summary: render_summary(&loaded),
        enabled: enabled.into_iter().map(str::to_string).collect(),
        disabled: disabled.into_iter().map(str::to_string).collect(),
    })
}

/// Format the partition for terminal display, one line per subset.
pub fn format_partition(output: &ResolveOutput) -> String {
    format!(
        "enabled: {}\ndisabled: {}\n",
        join_or_none(&output.enabled),
        join_or_none(&output.disabled)
    )
}

fn join_or_none(tools: &[String]) -> String {
    if tools.is_empty() {
        "(none)".to_string()
    } else {
        tools.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partitions_against_a_feature_disable() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8_root(&tmp).join("capgate.json");
        std::fs::write(&path, r#"{"features":{"pipelines":false}}"#).expect("write config");

        let tools = names(&["trigger_pipeline", "get_wiki_page"]);
        let output = run_resolve(ResolveInput {
            config_path: Some(&path),
            tools: &tools,
        })
        .expect("run_resolve");

        assert_eq!(output.enabled, names(&["get_wiki_page"]));
        assert_eq!(output.disabled, names(&["trigger_pipeline"]));
    }

    #[test]
    fn missing_config_enables_every_candidate() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8_root(&tmp).join("absent.json");

        let tools = names(&["trigger_pipeline", "made_up_tool"]);
        let output = run_resolve(ResolveInput {
            config_path: Some(&path),
            tools: &tools,
        })
        .expect("run_resolve");

        assert_eq!(output.enabled, tools);
        assert!(output.disabled.is_empty());
    }

    #[test]
    fn format_partition_joins_names_and_marks_empty_subsets() {
        let output = ResolveOutput {
            summary: String::new(),
            enabled: names(&["get_wiki_page", "search_code"]),
            disabled: Vec::new(),
        };
        assert_eq!(
            format_partition(&output),
            "enabled: get_wiki_page, search_code\ndisabled: (none)\n"
        );
    }
}
