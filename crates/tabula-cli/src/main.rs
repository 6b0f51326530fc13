//! # Tabula CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/tabula-cli/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, logging and dispatch (commands.rs)               │
//! │  - Text grid rendering (render.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/tabula)                                    │
//! │  - Data views and table grid, no terminal I/O               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every input is JSON read from a file path, or from stdin when the path is
//! `-`. Every result is printed as pretty JSON on stdout, except `table show`
//! which prints a text grid.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
