//! Internationalization (i18n) module for multi-language page rendering.
//!
//! All language-related logic lives here: the supported culture set, the
//! per-request culture resolver, and the localized string bundles.
//!
//! # Architecture
//!
//! - `culture`: the supported tags and the process default, built once at
//!   startup and injected wherever a culture decision is made
//! - `resolver`: per-request resolution (override, then cookie, then default)
//!   plus the middleware that attaches the result to the request
//! - `strings`: static per-culture string bundles for the rendered pages
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{resolve_culture, CultureSet};
//!
//! let cultures = CultureSet::default();
//! let active = resolve_culture(&cultures, None, Some("de"));
//! assert_eq!(active, "de");
//! ```

mod culture;
mod resolver;
pub mod strings;

pub use culture::CultureSet;
pub use resolver::{culture_middleware, resolve_culture, ActiveCulture};
