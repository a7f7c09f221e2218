//! # Core Application Logic
//!
//! Stacks' business logic: the category/chart state machine behind the
//! search screen. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state + chart)  │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │  One-shot  │
//!     │  Adapter   │      │  Adapter   │      │    CLI     │
//!     │ (ratatui)  │      │  (future)  │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct (selection, chart, and search bookkeeping)
//! - [`action`]: The `Action` enum and the pure `update` reducer
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;

// Re-exports so callers write `core::App`, not `core::state::App`
// pub use action::Action;
// pub use state::App;
