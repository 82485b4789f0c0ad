//! # Warehouse Architecture
//!
//! Warehouse is an interactive console over a small, read-only stock of items
//! spread across numbered warehouses. A user can list stock per warehouse, search
//! an item and order it, and browse items by category.
//!
//! The library holds all the logic; the binary is one client that wires it to a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL loop, prompts, rendering, exit codes                │
//! │  - The ONLY place that reads input or writes output         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw input (item names → ItemQuery)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, search, order, browse                              │
//! │  - Returns CmdResult, records into the SessionLog           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore, JSON inventory loading   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Names
//!
//! Items carry no identifier. A user searches for `"<state> <category>"`, e.g.
//! `brand new laptop`, and every item whose state and category match
//! case-insensitively counts as one available unit. See [`model::ItemKey`].
//!
//! ## Sessions
//!
//! Each completed top-level action appends a sentence to a
//! [`session::SessionLog`], which is printed when the user quits. The log is
//! an explicit value handed to each action rather than global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each action, including the order state machine
//! - [`store`]: Data accessor trait and implementations
//! - [`model`]: `Item`, `ItemKey`, `ItemQuery`
//! - [`session`]: Session log and article selection
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
