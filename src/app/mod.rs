//! Application layer coordinating state, events, and actions.
//!
//! Sits between the terminal loop (`main.rs`) and the search, selection and
//! directory layers.
//!
//! # Architecture
//!
//! ```text
//! Input line → parse_command → Event → handle_event → State mutation → Actions → execute
//!                                 ↑                                               │
//!                                 └──── SearchUpdated (watch channel) ◄───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`executor`]: Runs actions against the selection store
//! - [`handler`]: Event processing and state transitions
//! - [`input`]: Line-oriented command parsing
//! - [`modes`]: Details overlay state
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod executor;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use executor::{execute, execute_all, Flow};
pub use handler::{handle_event, Event};
pub use input::parse_command;
pub use modes::{DismissReason, Overlay};
pub use state::AppState;
