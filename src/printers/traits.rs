// traits.rs - Printer trait for diagnostic delivery

/// Receives the human-readable diagnostic of a failed parse.
///
/// Any `Fn(&str)` closure is a printer, so callers can pass a callback
/// straight to [`Parser::printer`](crate::Parser::printer).
pub trait Printer {
    /// Deliver one diagnostic message
    fn print(&self, message: &str);

    /// Short identifier used by the printer registry
    fn name(&self) -> &str {
        "custom"
    }

    fn description(&self) -> &str {
        "caller-supplied printer"
    }
}

impl<F> Printer for F
where
    F: Fn(&str),
{
    fn print(&self, message: &str) {
        self(message)
    }
}
