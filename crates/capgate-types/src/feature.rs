use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A functional domain grouping related tools.
///
/// The set is closed: feature names are compiled in, and config keys outside
/// this enumeration are rejected at validation time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    WorkItems,
    PullRequests,
    Pipelines,
    Wikis,
    Search,
    Projects,
}

impl FeatureId {
    /// Every feature, in catalog declaration order.
    pub const ALL: [FeatureId; 6] = [
        FeatureId::WorkItems,
        FeatureId::PullRequests,
        FeatureId::Pipelines,
        FeatureId::Wikis,
        FeatureId::Search,
        FeatureId::Projects,
    ];

    /// The wire name used in config files and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::WorkItems => "work_items",
            FeatureId::PullRequests => "pull_requests",
            FeatureId::Pipelines => "pipelines",
            FeatureId::Wikis => "wikis",
            FeatureId::Search => "search",
            FeatureId::Projects => "projects",
        }
    }

    /// Look up a feature by its wire name. `None` for anything outside the
    /// closed set.
    pub fn from_wire(name: &str) -> Option<FeatureId> {
        FeatureId::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
