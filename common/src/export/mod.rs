//! Export core modules shared across CLI and Web wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;
