//! # Solidz Architecture
//!
//! Solidz keeps an in-memory collection of geometric-solid records (sphere,
//! box, cylinder), each tagged with a density and an owner, and drives it with
//! a small line-oriented command language: `add`, `rem`, `print`.
//!
//! The shapes are property bags. Nothing computes volumes or collisions; what
//! matters is the container and the conditions used to pick records out of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, prints events            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Script Dispatcher (script.rs)         │
//! │  - Parses and validates script lines                        │
//! │  - Dispatches to commands, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove / print                                     │
//! │  - Turns container results into event messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Container (store.rs) + Conditions (attributes/)            │
//! │  - Ordered, append-only collection of solids                │
//! │  - Field lookup by name, `(field, op, literal)` predicates  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. Events
//! such as "Added ..." or "Deleted because ..." are returned as
//! [`commands::CmdMessage`]s; printing them is the CLI's job. Diagnostics go
//! through `tracing` and are only visible when a subscriber is installed.
//!
//! ## Leniency
//!
//! A removal condition naming a field a solid does not have, an operator
//! outside `== != > <`, or a literal that is not a number simply matches
//! nothing. A malformed script line becomes an error message for that line
//! and the script keeps running.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and script runner
//! - [`script`]: Line parsing and validation
//! - [`commands`]: Business logic for each command
//! - [`store`]: The container
//! - [`attributes`]: Field registry and condition evaluation
//! - [`model`]: Core data types (`Solid`, `Shape`, `ShapeKind`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod script;
pub mod store;
