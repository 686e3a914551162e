// silent.rs - Printer that drops every diagnostic

use super::traits::Printer;

/// Discards diagnostics; failures are still reported through the return value
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPrinter;

impl Printer for SilentPrinter {
    fn print(&self, message: &str) {
        tracing::debug!(message, "diagnostic discarded by silent printer");
    }

    fn name(&self) -> &str {
        "silent"
    }

    fn description(&self) -> &str {
        "discard diagnostics"
    }
}
