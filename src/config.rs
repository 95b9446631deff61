//! Element ids, class names and storage key used by the controller.
//!
//! DESIGN
//! ======
//! Every field has a default from [`crate::consts`], and the page may override
//! any subset through an inline JSON block, so templates can rename ids
//! without rebuilding the wasm module.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ChromeError;
use crate::surface::Part;

/// Ids of the elements the controller drives.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub theme_toggle: String,
    pub sun_icon: String,
    pub moon_icon: String,
    pub menu_open: String,
    pub menu_close: String,
    pub menu_panel: String,
    pub menu_overlay: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: consts::THEME_TOGGLE_ID.to_owned(),
            sun_icon: consts::SUN_ICON_ID.to_owned(),
            moon_icon: consts::MOON_ICON_ID.to_owned(),
            menu_open: consts::MENU_OPEN_ID.to_owned(),
            menu_close: consts::MENU_CLOSE_ID.to_owned(),
            menu_panel: consts::MENU_PANEL_ID.to_owned(),
            menu_overlay: consts::MENU_OVERLAY_ID.to_owned(),
        }
    }
}

impl ElementIds {
    /// Id for `part`, or `None` for the document root which has no id.
    #[must_use]
    pub fn for_part(&self, part: Part) -> Option<&str> {
        match part {
            Part::Root => None,
            Part::ThemeToggle => Some(self.theme_toggle.as_str()),
            Part::SunIcon => Some(self.sun_icon.as_str()),
            Part::MoonIcon => Some(self.moon_icon.as_str()),
            Part::MenuOpen => Some(self.menu_open.as_str()),
            Part::MenuClose => Some(self.menu_close.as_str()),
            Part::MenuPanel => Some(self.menu_panel.as_str()),
            Part::MenuOverlay => Some(self.menu_overlay.as_str()),
        }
    }
}

/// CSS classes the controller toggles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub hidden: String,
    pub dark: String,
    pub transparent: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: consts::HIDDEN_CLASS.to_owned(),
            dark: consts::DARK_CLASS.to_owned(),
            transparent: consts::TRANSPARENT_CLASS.to_owned(),
        }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub storage_key: String,
    pub ids: ElementIds,
    pub classes: ClassNames,
    pub fade_delay_ms: u32,
    /// Use `prefers-color-scheme` when no preference is stored.
    pub follow_system_scheme: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            fade_delay_ms: consts::FADE_DELAY_MS,
            follow_system_scheme: false,
        }
    }
}

impl ChromeConfig {
    /// Parse a JSON override; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Config`] if `raw` is not a JSON object of the
    /// expected shape, or [`ChromeError::InvalidConfig`] if it names an
    /// unusable id, class or key.
    pub fn from_json(raw: &str) -> Result<Self, ChromeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every id, class and the storage key before any element is
    /// touched. `classList` throws on empty or whitespace-containing tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ChromeError> {
        if self.storage_key.is_empty() {
            return Err(ChromeError::InvalidConfig("storage_key is empty".into()));
        }
        for part in Part::ALL {
            if let Some(id) = self.ids.for_part(part)
                && id.trim().is_empty()
            {
                return Err(ChromeError::InvalidConfig(format!("{part} id is empty")));
            }
        }
        let classes = [
            ("hidden", &self.classes.hidden),
            ("dark", &self.classes.dark),
            ("transparent", &self.classes.transparent),
        ];
        for (field, class) in classes {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(ChromeError::InvalidConfig(format!("{field} class {class:?} is not a single token")));
            }
        }
        Ok(())
    }

    /// Read the inline config block from the page, falling back to defaults
    /// when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Config`] if the block exists but is malformed.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, ChromeError> {
        let Some(el) = document.get_element_by_id(consts::CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        let raw = el.text_content().unwrap_or_default();
        let config = Self::from_json(&raw)?;
        log::debug!("chrome config loaded from #{}", consts::CONFIG_ELEMENT_ID);
        Ok(config)
    }
}
