//! # Core Application Logic
//!
//! This module contains statuscheck's session logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Probe    │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `ProbeConfig`, the fixed target and timeout
//! - [`state`]: The `Session` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: `render()`, the text the user sees

pub mod action;
pub mod config;
pub mod state;
pub mod view;
