//! # folio-chrome
//!
//! Client-side chrome for the blog/portfolio site: the day/night theme toggle
//! and the mobile navigation menu. Compiled to WebAssembly with the `hydrate`
//! feature and loaded by every page template; the markup it drives is
//! rendered by the static site pipeline.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ControllerCore`]: both state machines, event in, action out |
//! | [`theme`] | Day/night state and its class projection |
//! | [`menu`] | Open/closed menu state, overlay fade phases |
//! | [`storage`] | Preference persistence (`localStorage` or in-memory) |
//! | [`surface`] | Element roles and the class-toggling surface trait |
//! | [`config`] | Element ids, class names, storage key |
//! | [`consts`] | Defaults for the config |
//! | [`error`] | [`error::ChromeError`] |
//! | `dom` | Live-element surface (hydrate only) |
//! | `boot` | WASM start hook and click wiring (hydrate only) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod menu;
pub mod storage;
pub mod surface;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;
