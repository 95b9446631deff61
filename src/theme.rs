//! Day/night theme state and its projection onto the page.
//!
//! The stored preference is parsed into a [`Theme`] once at load; from then
//! on the enum is authoritative and the root class only mirrors it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ClassNames;
use crate::consts::DARK_FLAG;
use crate::error::ChromeError;
use crate::surface::{Part, Surface};

/// Display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Interpret a stored preference. Only the exact flag means night.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_FLAG) => Self::Night,
            _ => Self::Day,
        }
    }

    /// Value to persist for this theme; `None` means "remove the key".
    #[must_use]
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Day => None,
            Self::Night => Some(DARK_FLAG),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Night
    }

    #[must_use]
    pub fn projection(self) -> ThemeProjection {
        ThemeProjection {
            sun_visible: !self.is_dark(),
            moon_visible: self.is_dark(),
            root_dark: self.is_dark(),
        }
    }
}

/// Visible state implied by a [`Theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeProjection {
    pub sun_visible: bool,
    pub moon_visible: bool,
    pub root_dark: bool,
}

impl ThemeProjection {
    /// Write this projection to `surface`.
    ///
    /// Each write sets an absolute class state, so repeating it is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates the first failed class mutation.
    pub fn apply<D: Surface>(self, surface: &mut D, classes: &ClassNames) -> Result<(), ChromeError> {
        surface.set_class(Part::SunIcon, &classes.hidden, !self.sun_visible)?;
        surface.set_class(Part::MoonIcon, &classes.hidden, !self.moon_visible)?;
        surface.set_class(Part::Root, &classes.dark, self.root_dark)?;
        Ok(())
    }

    /// Read the projection currently shown on `surface`.
    #[must_use]
    pub fn observe<D: Surface>(surface: &D, classes: &ClassNames) -> Self {
        Self {
            sun_visible: !surface.has_class(Part::SunIcon, &classes.hidden),
            moon_visible: !surface.has_class(Part::MoonIcon, &classes.hidden),
            root_dark: surface.has_class(Part::Root, &classes.dark),
        }
    }
}
