use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single config validation violation.
///
/// `path` holds the segments leading to the offending value (array indices
/// are rendered as decimal segments). Validation reports every issue found,
/// never just the first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigIssue {
    pub path: Vec<String>,
    pub message: String,
}

impl ConfigIssue {
    pub fn new<P, S>(path: P, message: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// The path joined with dots; `(root)` for a top-level issue.
    pub fn dotted_path(&self) -> String {
        if self.path.is_empty() {
            "(root)".to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dotted_path(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dotted_path_and_message() {
        let issue = ConfigIssue::new(["features", "pipelines"], "expected a boolean");
        assert_eq!(issue.to_string(), "features.pipelines: expected a boolean");
    }

    #[test]
    fn root_issue_renders_placeholder_path() {
        let issue = ConfigIssue::new(Vec::<String>::new(), "expected an object");
        assert_eq!(issue.to_string(), "(root): expected an object");
    }
}
