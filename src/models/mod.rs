//! Model metadata, downloads, and memoized loading.

pub mod catalog;
#[cfg(feature = "model-download")]
pub mod download;
pub mod loader;
pub mod translation_catalog;

pub use loader::ModelCache;
