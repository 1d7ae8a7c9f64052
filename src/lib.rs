//! Jadoo Travel: a server-rendered travel marketing site with cookie-based
//! localization.
//!
//! The engineering core is the localization pipeline: every request resolves
//! one active culture (query override, then cookie, then default) and the
//! language endpoints persist the visitor's choice for a year.

pub mod config;
pub mod i18n;
pub mod language;
pub mod pages;
pub mod server;
