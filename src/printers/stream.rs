// stream.rs - Printers writing to the standard streams

use super::traits::Printer;

/// Writes each diagnostic as a line on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrPrinter;

impl Printer for StderrPrinter {
    fn print(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn name(&self) -> &str {
        "stderr"
    }

    fn description(&self) -> &str {
        "write diagnostics to standard error"
    }
}

/// Writes each diagnostic as a line on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&self, message: &str) {
        println!("{}", message);
    }

    fn name(&self) -> &str {
        "stdout"
    }

    fn description(&self) -> &str {
        "write diagnostics to standard output"
    }
}
