//! Domain layer for the country picker.
//!
//! This module contains the core domain types, independent of HTTP, terminal or
//! runtime concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types, the failing [`Operation`], and result aliases
//! - [`country`]: The canonical [`Country`] value
//!
//! # Examples
//!
//! ```
//! use country_picker::domain::{Country, Result};
//!
//! fn pick() -> Result<Country> {
//!     Ok(Country::new("JPN", "Japan", "https://flagcdn.com/w320/jp.png"))
//! }
//! ```

pub mod country;
pub mod error;

pub use country::Country;
pub use error::{CountryError, Operation, Result};
