//! The `validate` use case: check the config document without applying it.

use crate::summary::render_summary;
use anyhow::Context;
use camino::Utf8Path;
use capgate_loader::LoadError;

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub enum ValidateOutput {
    /// The resolved source loads cleanly (a missing file counts: defaults
    /// apply). Carries the summary of what the config disables.
    Valid { summary: String },
    /// The file exists but cannot be applied: malformed JSON or schema
    /// violations. Carries the full diagnostic, one line per issue.
    Invalid { diagnostic: String },
}

/// Run the validate use case.
///
/// Parse and schema failures are a verdict, not an error; IO failures other
/// than a missing file still propagate as errors.
pub fn run_validate(config_path: Option<&Utf8Path>) -> anyhow::Result<ValidateOutput> {
    match capgate_loader::load_config(config_path) {
        Ok(loaded) => Ok(ValidateOutput::Valid {
            summary: render_summary(&loaded),
        }),
        Err(err @ (LoadError::Parse { .. } | LoadError::Validation { .. })) => {
            Ok(ValidateOutput::Invalid {
                diagnostic: err.to_string(),
            })
        }
        Err(err) => Err(err).context("read config"),
    }
}

/// Map validation outcome to exit code: 0 = valid, 2 = invalid.
pub fn validate_exit_code(output: &ValidateOutput) -> i32 {
    match output {
        ValidateOutput::Valid { .. } => 0,
        ValidateOutput::Invalid { .. } => 2,
    }
}
