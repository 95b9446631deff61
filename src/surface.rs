//! Abstract view of the page elements the controller writes to.
//!
//! The controller only ever adds or removes classes, so a surface is a map
//! from [`Part`] to a class list. [`MemorySurface`] backs the tests; the
//! browser implementation lives in [`crate::dom`].

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::config::ElementIds;
use crate::error::ChromeError;

/// Role of an element in the chrome's DOM contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// The `<html>` element.
    Root,
    ThemeToggle,
    SunIcon,
    MoonIcon,
    MenuOpen,
    MenuClose,
    MenuPanel,
    MenuOverlay,
}

impl Part {
    pub const ALL: [Part; 8] = [
        Part::Root,
        Part::ThemeToggle,
        Part::SunIcon,
        Part::MoonIcon,
        Part::MenuOpen,
        Part::MenuClose,
        Part::MenuPanel,
        Part::MenuOverlay,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Part::Root => "root",
            Part::ThemeToggle => "theme toggle",
            Part::SunIcon => "sun icon",
            Part::MoonIcon => "moon icon",
            Part::MenuOpen => "menu open",
            Part::MenuClose => "menu close",
            Part::MenuPanel => "menu panel",
            Part::MenuOverlay => "menu overlay",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Look up a handle for every [`Part`]: the root through `root`, the rest
/// through `by_id` with their configured ids.
///
/// # Errors
///
/// Returns [`ChromeError::MissingElement`] naming the first id `by_id` cannot
/// find, or [`ChromeError::NoDocument`] if `root` yields nothing.
pub fn resolve_parts<E>(
    ids: &ElementIds,
    mut root: impl FnMut() -> Option<E>,
    by_id: impl Fn(&str) -> Option<E>,
) -> Result<HashMap<Part, E>, ChromeError> {
    let mut handles = HashMap::with_capacity(Part::ALL.len());
    for part in Part::ALL {
        let handle = match ids.for_part(part) {
            None => root().ok_or(ChromeError::NoDocument)?,
            Some(id) => by_id(id).ok_or_else(|| ChromeError::MissingElement { part, id: id.to_owned() })?,
        };
        handles.insert(part, handle);
    }
    Ok(handles)
}

/// Something whose parts carry toggleable classes.
pub trait Surface {
    /// Ensure `class` is present on `part` iff `present`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the underlying element rejects the
    /// mutation.
    fn set_class(&mut self, part: Part, class: &str, present: bool) -> Result<(), ChromeError>;

    /// Whether `part` currently carries `class`.
    fn has_class(&self, part: Part, class: &str) -> bool;
}

/// In-memory surface that records class lists per part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    classes: HashMap<Part, BTreeSet<String>>,
    writes: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `part` with `classes`, as a template would render it.
    #[must_use]
    pub fn with_classes(mut self, part: Part, classes: &[&str]) -> Self {
        let entry = self.classes.entry(part).or_default();
        entry.extend(classes.iter().map(|c| (*c).to_owned()));
        self
    }

    /// Sorted class list of `part`.
    #[must_use]
    pub fn classes(&self, part: Part) -> Vec<&str> {
        self.classes
            .get(&part)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of `set_class` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Surface for MemorySurface {
    fn set_class(&mut self, part: Part, class: &str, present: bool) -> Result<(), ChromeError> {
        self.writes += 1;
        let entry = self.classes.entry(part).or_default();
        if present {
            entry.insert(class.to_owned());
        } else {
            entry.remove(class);
        }
        Ok(())
    }

    fn has_class(&self, part: Part, class: &str) -> bool {
        self.classes.get(&part).is_some_and(|set| set.contains(class))
    }
}
