//! Command implementations.

/// Target language listing.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Usage text shown when no text is given.
pub mod usage;
