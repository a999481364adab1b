//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data for one frame
//! - [`renderer`]: Frame assembly
//! - [`components`]: Header, search box, results, selected list, details card, footer
//! - [`helpers`]: Cursor positioning, highlighting, truncation, number formats
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    DetailRow, DetailsCard, FooterInfo, HeaderInfo, ResultItem, ResultsPanel, SearchBarInfo, SelectedItem,
    SelectedPanel, UIViewModel,
};
