//! Stable identifiers for gated tools.
//!
//! Tool names are short snake_case operation names, stable across releases.
//! Each registered tool is owned by exactly one feature in the catalog.

// work_items
pub const TOOL_LIST_WORK_ITEMS: &str = "list_work_items";
pub const TOOL_GET_WORK_ITEM: &str = "get_work_item";
pub const TOOL_CREATE_WORK_ITEM: &str = "create_work_item";
pub const TOOL_UPDATE_WORK_ITEM: &str = "update_work_item";
pub const TOOL_ADD_WORK_ITEM_COMMENT: &str = "add_work_item_comment";

// pull_requests
pub const TOOL_LIST_PULL_REQUESTS: &str = "list_pull_requests";
pub const TOOL_GET_PULL_REQUEST: &str = "get_pull_request";
pub const TOOL_CREATE_PULL_REQUEST: &str = "create_pull_request";
pub const TOOL_UPDATE_PULL_REQUEST: &str = "update_pull_request";
pub const TOOL_LIST_PULL_REQUEST_THREADS: &str = "list_pull_request_threads";

// pipelines
pub const TOOL_LIST_PIPELINES: &str = "list_pipelines";
pub const TOOL_GET_PIPELINE: &str = "get_pipeline";
pub const TOOL_TRIGGER_PIPELINE: &str = "trigger_pipeline";
pub const TOOL_GET_PIPELINE_RUN: &str = "get_pipeline_run";
pub const TOOL_LIST_PIPELINE_RUNS: &str = "list_pipeline_runs";

// wikis
pub const TOOL_LIST_WIKIS: &str = "list_wikis";
pub const TOOL_GET_WIKI_PAGE: &str = "get_wiki_page";
pub const TOOL_CREATE_WIKI_PAGE: &str = "create_wiki_page";
pub const TOOL_UPDATE_WIKI_PAGE: &str = "update_wiki_page";

// search
pub const TOOL_SEARCH_CODE: &str = "search_code";
pub const TOOL_SEARCH_WIKI: &str = "search_wiki";
pub const TOOL_SEARCH_WORK_ITEMS: &str = "search_work_items";

// projects
pub const TOOL_LIST_PROJECTS: &str = "list_projects";
pub const TOOL_GET_PROJECT: &str = "get_project";
pub const TOOL_LIST_TEAMS: &str = "list_teams";
