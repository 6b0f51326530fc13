//! # CLI Behavior
//!
//! This is **one possible UI client** for tabula, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Commands
//!
//! - `tabula query`: runs a view over items and prints `{data, paginationInfo}`.
//!   `--search`, `--page`, `--per-page` and `--sort` override the `--view` file.
//! - `tabula operators`: the sanitized operator list of every field.
//! - `tabula filters`: the filter menu for a set of fields and a view.
//! - `tabula table new|edit|show|nav`: the table grid operations.
//!
//! ## Configuration
//!
//! Defaults come from `TABULA_PER_PAGE`, then `./tabula.toml`, then
//! `tabula.toml` in the user config directory.
//!
//! ## Logging
//!
//! Library events go to stderr through `tracing-subscriber`. `RUST_LOG` wins;
//! otherwise `--verbose` shows `debug`, and the default is `warn`.

mod commands;
mod render;
mod setup;

pub use commands::run;
