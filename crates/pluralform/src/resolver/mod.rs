//! Catalog resolution engine.
//!
//! This module provides the [`MessageCatalog`] that loads per-locale
//! documents, validates them, and resolves (key, locale, quantity,
//! extra arguments) into rendered strings.

mod catalog;
mod error;
mod plural;
mod registry;
mod render;

pub use catalog::MessageCatalog;
pub use error::{CatalogWarning, LoadError, ResolveError, compute_suggestions};
pub use plural::{is_supported_language, plural_category};
pub use registry::MessageRegistry;
