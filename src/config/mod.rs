//! Configuration for the OEE engine.
//!
//! This module provides the engine configuration types and the loader
//! for reading them from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
