//! Overlay state for the details view.
//!
//! The application has a single modal surface: the details overlay opened by
//! inspecting a search result. It is dismissed by the close control, the Escape
//! key, or a click outside the card, all of which have the same effect.

use crate::domain::Country;

/// How the user dismissed the details overlay.
///
/// Carried for tracing only; every reason closes the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The close control on the card.
    CloseButton,
    /// The Escape key.
    Escape,
    /// A click on the backdrop around the card.
    ClickOutside,
}

/// Whether the details overlay is open, and for which country.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    Hidden,
    /// Showing the extended attributes of a search result.
    Details(Country),
}

impl Overlay {
    /// Code of the inspected country, if the overlay is open.
    #[must_use]
    pub fn active_code(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Details(country) => Some(&country.code),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Details(_))
    }
}
