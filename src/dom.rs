//! Browser surface: resolves every [`Part`] to a live element up front.
//!
//! Resolution fails on the first missing id, so a page with a broken
//! template never gets a half-wired controller.

use std::collections::HashMap;

use web_sys::{Document, Element};

use crate::config::ElementIds;
use crate::error::ChromeError;
use crate::surface::{self, Part, Surface};

/// Element handles for every part of the chrome.
pub struct DomSurface {
    elements: HashMap<Part, Element>,
}

impl DomSurface {
    /// Look up every configured id in `document`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::MissingElement`] naming the first absent id, or
    /// [`ChromeError::NoDocument`] if the document has no root element.
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, ChromeError> {
        let elements = surface::resolve_parts(ids, || document.document_element(), |id| document.get_element_by_id(id))?;
        Ok(Self { elements })
    }

    /// Handle for `part`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Unresolved`] if `part` has no handle.
    pub fn element(&self, part: Part) -> Result<&Element, ChromeError> {
        self.elements.get(&part).ok_or(ChromeError::Unresolved(part))
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, part: Part, class: &str, present: bool) -> Result<(), ChromeError> {
        self.element(part)?
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| ChromeError::Dom(format!("{part} .{class}: {e:?}")))
    }

    fn has_class(&self, part: Part, class: &str) -> bool {
        self.elements
            .get(&part)
            .is_some_and(|el| el.class_list().contains(class))
    }
}
