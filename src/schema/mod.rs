// mod.rs - Schema registry module

pub mod loader;
pub mod option_spec;
pub mod registry;

// Re-export main types for convenience
pub use option_spec::OptionSpec;
pub use registry::{Schema, SchemaBuilder};
