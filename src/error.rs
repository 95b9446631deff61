//! Error taxonomy for mounting and driving the site chrome.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::surface::Part;

/// Error returned by controller, storage and DOM operations.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// A required element is not in the document.
    #[error("missing {part} element (#{id})")]
    MissingElement { part: Part, id: String },
    /// A part was queried that the surface never resolved.
    #[error("{0} element was never resolved")]
    Unresolved(Part),
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// `localStorage` is disabled or blocked.
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// A storage read or write threw.
    #[error("storage error: {0}")]
    Storage(String),
    /// A DOM mutation threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// The inline config block is not valid JSON for [`crate::config::ChromeConfig`].
    #[error("invalid chrome config: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but names an unusable id, class or key.
    #[error("invalid chrome config value: {0}")]
    InvalidConfig(String),
}
