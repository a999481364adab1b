//! Debounced country search.
//!
//! - `debounce`: cancellable one-shot timer ([`DebounceHandle`])
//! - `pipeline`: the [`SearchPipeline`] view-model and its [`SearchState`]

pub mod debounce;
pub mod pipeline;

pub use debounce::{schedule, DebounceHandle};
pub use pipeline::{SearchPipeline, SearchState, DEFAULT_DEBOUNCE};
