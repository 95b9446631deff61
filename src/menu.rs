//! Mobile navigation menu state machine.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::ClassNames;
use crate::error::ChromeError;
use crate::surface::{Part, Surface};

/// Whether the mobile menu is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Click that can drive the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    OpenClick,
    CloseClick,
}

impl MenuState {
    /// Next state after `input`. Inputs that do not match the current state
    /// leave it unchanged.
    #[must_use]
    pub fn on(self, input: MenuInput) -> Self {
        match (self, input) {
            (Self::Closed, MenuInput::OpenClick) => Self::Open,
            (Self::Open, MenuInput::CloseClick) => Self::Closed,
            (state, _) => state,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Overlay visibility, including the transparent frame before the fade-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    /// In layout but fully transparent; the transition starts from here.
    Transparent,
    Opaque,
}

/// Visible state of the menu controls, panel and overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuProjection {
    pub open_control_visible: bool,
    pub close_control_visible: bool,
    pub panel_visible: bool,
    pub overlay: OverlayPhase,
}

impl MenuProjection {
    /// Projection for `state`. An open menu starts with a transparent overlay;
    /// the opaque phase is reached only through [`MenuProjection::revealed`].
    #[must_use]
    pub fn of(state: MenuState) -> Self {
        let open = state.is_open();
        Self {
            open_control_visible: !open,
            close_control_visible: open,
            panel_visible: open,
            overlay: if open { OverlayPhase::Transparent } else { OverlayPhase::Hidden },
        }
    }

    #[must_use]
    pub fn revealed(self) -> Self {
        Self { overlay: OverlayPhase::Opaque, ..self }
    }

    /// Write this projection to `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first failed class mutation.
    pub fn apply<D: Surface>(self, surface: &mut D, classes: &ClassNames) -> Result<(), ChromeError> {
        surface.set_class(Part::MenuOpen, &classes.hidden, !self.open_control_visible)?;
        surface.set_class(Part::MenuClose, &classes.hidden, !self.close_control_visible)?;
        surface.set_class(Part::MenuPanel, &classes.hidden, !self.panel_visible)?;
        apply_overlay(surface, classes, self.overlay)
    }

    /// Read the projection currently shown on `surface`.
    #[must_use]
    pub fn observe<D: Surface>(surface: &D, classes: &ClassNames) -> Self {
        let overlay = if surface.has_class(Part::MenuOverlay, &classes.hidden) {
            OverlayPhase::Hidden
        } else if surface.has_class(Part::MenuOverlay, &classes.transparent) {
            OverlayPhase::Transparent
        } else {
            OverlayPhase::Opaque
        };
        Self {
            open_control_visible: !surface.has_class(Part::MenuOpen, &classes.hidden),
            close_control_visible: !surface.has_class(Part::MenuClose, &classes.hidden),
            panel_visible: !surface.has_class(Part::MenuPanel, &classes.hidden),
            overlay,
        }
    }
}

/// Write only the overlay classes for `phase`.
///
/// A hidden overlay is reset to transparent so the next reveal fades in again.
///
/// # Errors
///
/// Propagates the first failed class mutation.
pub fn apply_overlay<D: Surface>(surface: &mut D, classes: &ClassNames, phase: OverlayPhase) -> Result<(), ChromeError> {
    match phase {
        OverlayPhase::Hidden => {
            surface.set_class(Part::MenuOverlay, &classes.hidden, true)?;
            surface.set_class(Part::MenuOverlay, &classes.transparent, true)?;
        }
        OverlayPhase::Transparent => {
            surface.set_class(Part::MenuOverlay, &classes.transparent, true)?;
            surface.set_class(Part::MenuOverlay, &classes.hidden, false)?;
        }
        OverlayPhase::Opaque => {
            surface.set_class(Part::MenuOverlay, &classes.hidden, false)?;
            surface.set_class(Part::MenuOverlay, &classes.transparent, false)?;
        }
    }
    Ok(())
}
