//! Default identifiers and class names for the site chrome.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the display-mode preference.
pub const STORAGE_KEY: &str = "folio-dark-mode";

/// The only stored value that means "night".
pub const DARK_FLAG: &str = "true";

// ── Element ids ─────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const SUN_ICON_ID: &str = "theme-sun";
pub const MOON_ICON_ID: &str = "theme-moon";
pub const MENU_OPEN_ID: &str = "menu-open";
pub const MENU_CLOSE_ID: &str = "menu-close";
pub const MENU_PANEL_ID: &str = "mobile-menu";
pub const MENU_OVERLAY_ID: &str = "menu-overlay";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-chrome-config";

// ── Classes ─────────────────────────────────────────────────────

/// Class that removes an element from layout.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class on `<html>` that switches the stylesheet to night colors.
pub const DARK_CLASS: &str = "dark";

/// Class that keeps the overlay fully transparent before its fade-in.
pub const TRANSPARENT_CLASS: &str = "opacity-0";

// ── Timing ──────────────────────────────────────────────────────

/// Delay before the overlay's transparency class is dropped, in ms.
/// Zero still lands on a later task, after the initial style is committed.
pub const FADE_DELAY_MS: u32 = 0;

// ── Logging ─────────────────────────────────────────────────────

/// Console log level: transitions are visible in debug builds only.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
