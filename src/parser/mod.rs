// mod.rs - Parser engine module root

pub mod engine;
pub mod result;
pub mod tokenize;
pub mod validation;

// Re-export main types for convenience
pub use engine::{parser, Parser};
pub use result::ParsedOptions;
pub use tokenize::{bind_tokens, is_flag, Bindings, FLAG_PREFIX};
pub use validation::validate;
