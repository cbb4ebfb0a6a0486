//! The `show` use case: load config and describe effective enablement.

use crate::summary::{render_listing, render_summary};
use anyhow::Context;
use camino::Utf8Path;

/// Input for the show use case.
#[derive(Clone, Copy, Debug)]
pub struct ShowInput<'a> {
    /// Explicit config path; `None` falls back to the environment override,
    /// then the default filename.
    pub config_path: Option<&'a Utf8Path>,
}

/// Output from the show use case.
#[derive(Clone, Debug)]
pub struct ShowOutput {
    /// Diagnostic summary of the loaded configuration, for stderr.
    pub summary: String,
    /// Per-feature tool listing, for stdout.
    pub listing: String,
}

/// Run the show use case: load config, render summary and listing.
pub fn run_show(input: ShowInput<'_>) -> anyhow::Result<ShowOutput> {
    let loaded = capgate_loader::load_config(input.config_path).context("load config")?;
    Ok(ShowOutput {
        summary: render_summary(&loaded),
        listing: render_listing(&loaded.config),
    })
}
