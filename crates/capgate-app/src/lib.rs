//! Use case orchestration for capgate.
//!
//! This crate provides the application layer: use cases that coordinate the
//! loader, catalog, and domain layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod resolve;
mod show;
mod summary;
mod validate;

pub use resolve::{format_partition, run_resolve, ResolveInput, ResolveOutput};
pub use show::{run_show, ShowInput, ShowOutput};
pub use summary::{render_listing, render_summary};
pub use validate::{run_validate, validate_exit_code, ValidateOutput};
