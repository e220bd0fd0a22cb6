//!
//! Utility helpers shared across the dpc crates: command argument formatting,
//! case conversion for script names, and label shortening for logs.
//!

pub mod case;
pub mod format;
