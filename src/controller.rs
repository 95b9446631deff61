//! The site chrome controller: theme toggle and mobile menu.
//!
//! DESIGN
//! ======
//! `ControllerCore` owns the two state machines plus injected storage and
//! surface handles. It never touches browser globals, so the whole behavior
//! is testable natively. Host code turns clicks into [`Event`]s and carries
//! out the returned [`Action`]s (currently only the deferred overlay reveal).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ChromeConfig;
use crate::error::ChromeError;
use crate::menu::{self, MenuInput, MenuProjection, MenuState, OverlayPhase};
use crate::storage::PreferenceStore;
use crate::surface::Surface;
use crate::theme::Theme;

/// Identifies one pending overlay reveal. Tickets from before the latest
/// open are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTicket(u64);

/// User or scheduler input to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    ToggleTheme,
    OpenMenu,
    CloseMenu,
    RevealOverlay(FadeTicket),
}

/// Follow-up work the host must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Deliver `Event::RevealOverlay(ticket)` after the configured delay.
    ScheduleReveal(FadeTicket),
}

/// Controller state and its injected collaborators.
pub struct ControllerCore<S, D> {
    config: ChromeConfig,
    store: S,
    surface: D,
    theme: Theme,
    menu: MenuState,
    overlay: OverlayPhase,
    fade_seq: u64,
    system_prefers_dark: bool,
}

impl<S: PreferenceStore, D: Surface> ControllerCore<S, D> {
    #[must_use]
    pub fn new(config: ChromeConfig, store: S, surface: D) -> Self {
        Self {
            config,
            store,
            surface,
            theme: Theme::Day,
            menu: MenuState::Closed,
            overlay: OverlayPhase::Hidden,
            fade_seq: 0,
            system_prefers_dark: false,
        }
    }

    /// Record the platform color-scheme hint. Only consulted when
    /// `follow_system_scheme` is enabled and nothing is stored.
    #[must_use]
    pub fn with_system_hint(mut self, prefers_dark: bool) -> Self {
        self.system_prefers_dark = prefers_dark;
        self
    }

    /// Read the stored preference and project both state machines.
    ///
    /// A storage read failure counts as "no preference".
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures.
    pub fn initialize(&mut self) -> Result<Theme, ChromeError> {
        let stored = match self.store.read(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("reading theme preference failed, using day: {e}");
                None
            }
        };
        self.theme = match stored.as_deref() {
            None if self.config.follow_system_scheme => {
                if self.system_prefers_dark { Theme::Night } else { Theme::Day }
            }
            value => Theme::from_stored(value),
        };
        self.menu = MenuState::Closed;
        self.overlay = OverlayPhase::Hidden;

        self.theme.projection().apply(&mut self.surface, &self.config.classes)?;
        MenuProjection::of(self.menu).apply(&mut self.surface, &self.config.classes)?;
        log::debug!("chrome initialized: theme={:?}", self.theme);
        Ok(self.theme)
    }

    /// Dispatch one event.
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures.
    pub fn handle(&mut self, event: Event) -> Result<Action, ChromeError> {
        match event {
            Event::ToggleTheme => self.toggle_theme().map(|_| Action::None),
            Event::OpenMenu => Ok(self.open_menu()?.map_or(Action::None, Action::ScheduleReveal)),
            Event::CloseMenu => self.close_menu().map(|()| Action::None),
            Event::RevealOverlay(ticket) => self.reveal_overlay(ticket).map(|_| Action::None),
        }
    }

    /// Flip the theme, update the page, then persist it.
    ///
    /// Nothing is committed until every class write succeeds; on failure the
    /// previous projection is restored and storage is left untouched. A
    /// persist failure is only logged, and the new theme lasts for this page
    /// view.
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures.
    pub fn toggle_theme(&mut self) -> Result<Theme, ChromeError> {
        let next = self.theme.toggled();
        if let Err(e) = next.projection().apply(&mut self.surface, &self.config.classes) {
            self.restore_theme();
            return Err(e);
        }

        let key = &self.config.storage_key;
        let persisted = match next.stored_value() {
            Some(value) => self.store.write(key, value),
            None => self.store.clear(key),
        };
        if let Err(e) = persisted {
            log::warn!("persisting theme preference failed: {e}");
        }
        self.theme = next;
        log::debug!("theme toggled to {next:?}");
        Ok(next)
    }

    /// Open the menu. Returns the ticket for the follow-up reveal, or `None`
    /// if the menu was already open.
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures; the menu stays closed so a later
    /// click can retry.
    pub fn open_menu(&mut self) -> Result<Option<FadeTicket>, ChromeError> {
        let next = self.menu.on(MenuInput::OpenClick);
        if next == self.menu {
            return Ok(None);
        }
        let projection = MenuProjection::of(next);
        if let Err(e) = projection.apply(&mut self.surface, &self.config.classes) {
            self.restore_menu();
            return Err(e);
        }
        self.menu = next;
        self.overlay = projection.overlay;
        self.fade_seq += 1;
        log::debug!("menu opened");
        Ok(Some(FadeTicket(self.fade_seq)))
    }

    /// Close the menu and hide the overlay at once.
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures; the menu stays open so a later
    /// click can retry.
    pub fn close_menu(&mut self) -> Result<(), ChromeError> {
        let next = self.menu.on(MenuInput::CloseClick);
        if next == self.menu {
            return Ok(());
        }
        let projection = MenuProjection::of(next);
        if let Err(e) = projection.apply(&mut self.surface, &self.config.classes) {
            self.restore_menu();
            return Err(e);
        }
        self.menu = next;
        self.overlay = projection.overlay;
        log::debug!("menu closed");
        Ok(())
    }

    /// Re-project the committed theme after a failed transition.
    fn restore_theme(&mut self) {
        if let Err(e) = self.theme.projection().apply(&mut self.surface, &self.config.classes) {
            log::warn!("restoring {:?} theme failed: {e}", self.theme);
        }
    }

    /// Re-project the committed menu state after a failed transition.
    fn restore_menu(&mut self) {
        let projection = MenuProjection { overlay: self.overlay, ..MenuProjection::of(self.menu) };
        if let Err(e) = projection.apply(&mut self.surface, &self.config.classes) {
            log::warn!("restoring {:?} menu failed: {e}", self.menu);
        }
    }

    /// Drop the overlay's transparency so it fades in. Returns `false` for a
    /// stale ticket, which changes nothing.
    ///
    /// # Errors
    ///
    /// Propagates surface mutation failures.
    pub fn reveal_overlay(&mut self, ticket: FadeTicket) -> Result<bool, ChromeError> {
        if !self.menu.is_open() || self.overlay != OverlayPhase::Transparent || ticket.0 != self.fade_seq {
            log::debug!("ignoring stale overlay reveal {ticket:?}");
            return Ok(false);
        }
        menu::apply_overlay(&mut self.surface, &self.config.classes, OverlayPhase::Opaque)?;
        self.overlay = OverlayPhase::Opaque;
        Ok(true)
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayPhase {
        self.overlay
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }
}
