//! Manifest loading: file access and YAML deserialization

pub mod loader;

pub use loader::ManifestLoader;
