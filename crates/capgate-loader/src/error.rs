use camino::Utf8PathBuf;
use capgate_types::ConfigIssue;
use thiserror::Error;

/// Failures that abort config loading.
///
/// A missing file is not among them; it resolves to the default
/// configuration. All variants carry the offending path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but is not well-formed JSON.
    #[error("{path}: invalid JSON: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON violating the config schema. Every violation found
    /// is listed, one `dotted.path: message` line per issue.
    #[error("{path}: invalid config:\n{}", format_issues(.issues))]
    Validation {
        path: Utf8PathBuf,
        issues: Vec<ConfigIssue>,
    },

    /// Any other IO failure, propagated unchanged.
    #[error("{path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
