//! Static feature ↔ tool registry.
//!
//! The forward tables are compiled in. The reverse index (tool → owning
//! feature) is derived from them once and stays read-only for the remainder
//! of the process, so the two can never drift.

#![forbid(unsafe_code)]

use capgate_types::{FeatureId, ids};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Tools owned by `feature`, in registration order.
pub fn tools_of(feature: FeatureId) -> &'static [&'static str] {
    match feature {
        FeatureId::WorkItems => &[
            ids::TOOL_LIST_WORK_ITEMS,
            ids::TOOL_GET_WORK_ITEM,
            ids::TOOL_CREATE_WORK_ITEM,
            ids::TOOL_UPDATE_WORK_ITEM,
            ids::TOOL_ADD_WORK_ITEM_COMMENT,
        ],
        FeatureId::PullRequests => &[
            ids::TOOL_LIST_PULL_REQUESTS,
            ids::TOOL_GET_PULL_REQUEST,
            ids::TOOL_CREATE_PULL_REQUEST,
            ids::TOOL_UPDATE_PULL_REQUEST,
            ids::TOOL_LIST_PULL_REQUEST_THREADS,
        ],
        FeatureId::Pipelines => &[
            ids::TOOL_LIST_PIPELINES,
            ids::TOOL_GET_PIPELINE,
            ids::TOOL_TRIGGER_PIPELINE,
            ids::TOOL_GET_PIPELINE_RUN,
            ids::TOOL_LIST_PIPELINE_RUNS,
        ],
        FeatureId::Wikis => &[
            ids::TOOL_LIST_WIKIS,
            ids::TOOL_GET_WIKI_PAGE,
            ids::TOOL_CREATE_WIKI_PAGE,
            ids::TOOL_UPDATE_WIKI_PAGE,
        ],
        FeatureId::Search => &[
            ids::TOOL_SEARCH_CODE,
            ids::TOOL_SEARCH_WIKI,
            ids::TOOL_SEARCH_WORK_ITEMS,
        ],
        FeatureId::Projects => &[
            ids::TOOL_LIST_PROJECTS,
            ids::TOOL_GET_PROJECT,
            ids::TOOL_LIST_TEAMS,
        ],
    }
}

static TOOL_OWNERS: LazyLock<BTreeMap<&'static str, FeatureId>> = LazyLock::new(|| {
    let mut owners = BTreeMap::new();
    for feature in FeatureId::ALL {
        for tool in tools_of(feature) {
            owners.insert(*tool, feature);
        }
    }
    owners
});

/// The feature owning `tool`, or `None` for tools outside the registry.
///
/// Unregistered tools are allowed: they have no feature gate and stay
/// enabled unless a config disables them by name.
pub fn feature_of(tool: &str) -> Option<FeatureId> {
    TOOL_OWNERS.get(tool).copied()
}

/// Every registered tool, grouped by feature declaration order.
pub fn all_tools() -> impl Iterator<Item = &'static str> {
    FeatureId::ALL
        .into_iter()
        .flat_map(|feature| tools_of(feature).iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_ownership_is_disjoint() {
        let mut seen: BTreeMap<&str, FeatureId> = BTreeMap::new();
        for feature in FeatureId::ALL {
            for tool in tools_of(feature) {
                if let Some(previous) = seen.insert(*tool, feature) {
                    panic!("tool {tool} registered under both {previous} and {feature}");
                }
            }
        }
    }

    #[test]
    fn reverse_index_matches_forward_tables() {
        for feature in FeatureId::ALL {
            for tool in tools_of(feature) {
                assert_eq!(feature_of(tool), Some(feature), "owner of {}", tool);
            }
        }
        assert_eq!(all_tools().count(), TOOL_OWNERS.len());
    }

    #[test]
    fn unregistered_tool_has_no_owner() {
        assert_eq!(feature_of("definitely_not_registered"), None);
        assert_eq!(feature_of(""), None);
    }

    #[test]
    fn every_feature_owns_at_least_one_tool() {
        for feature in FeatureId::ALL {
            assert!(!tools_of(feature).is_empty(), "{feature} owns no tools");
        }
    }
}
