// mod.rs - Diagnostic printers module root

pub mod memory;
pub mod registry;
pub mod silent;
pub mod stream;
pub mod traits;

// Re-export main types for convenience
pub use memory::MemoryPrinter;
pub use registry::PrinterRegistry;
pub use silent::SilentPrinter;
pub use stream::{StderrPrinter, StdoutPrinter};
pub use traits::Printer;
