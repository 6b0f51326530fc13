//! # Tabula Architecture
//!
//! Tabula is a **UI-agnostic data view and table grid library**. The `tabula`
//! binary is one client of it; a web backend or an editor plugin could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (tabula-cli crate)                               │
//! │  - Parses arguments, reads JSON, prints pages and grids     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Data Views (dataview/)      │ │  Table Grid (table/)       │
//! │  - Field descriptors         │ │  - Head/body/foot model    │
//! │  - Search, filter, sort      │ │  - Row and column edits    │
//! │  - Pagination, filter menus  │ │  - Selection, navigation   │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! Everything in this crate:
//! - Takes regular Rust arguments and returns regular Rust values
//! - **Never** writes to stdout/stderr
//! - **Never** mutates its inputs; table operations return a new table
//!
//! The only file access is [`config::TabulaConfig::load`], which the caller
//! points at explicit paths.
//!
//! ## Module Overview
//!
//! - [`dataview`]: Fields, operators, views and the filter/sort/paginate engine
//! - [`table`]: Table state, pure edit operations and cell navigation
//! - [`config`]: Layered defaults for views
//! - [`error`]: Error types

pub mod config;
pub mod dataview;
pub mod error;
pub mod table;

pub use error::{Result, TabulaError};
