//! # Warehouse CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/warehouse/cli/)                             │
//! │  - clap argument parsing (args.rs)                          │
//! │  - config, logging and store wiring (mod.rs)                │
//! │  - line-based input over any reader (console.rs)            │
//! │  - menu loop and order prompts (repl.rs)                    │
//! │  - colored terminal output (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!               warehouse library (api.rs and inward)
//! ```
//!
//! Quitting from the menu, or closing stdin, exits with code 0. Any error that
//! escapes the REPL (an unreadable inventory or config, a broken terminal) is
//! printed to stderr and exits with code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
