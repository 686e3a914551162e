//! # Custom Printer Example
//!
//! This example shows how to plug a custom diagnostic printer into argspec
//! and how to make it selectable by name through the printer registry.
//!
//! Usage:
//! ```bash
//! cargo run --example custom_printer -- --mode turbo
//! ```

use std::rc::Rc;

use argspec::prelude::*;

/// Prefixes every diagnostic with the program name, the way many tools do
#[derive(Debug)]
pub struct PrefixedPrinter {
    program: String,
}

impl Printer for PrefixedPrinter {
    fn print(&self, message: &str) {
        eprintln!("{}: {}", self.program, message);
        eprintln!("Try '{} --mode fast input.txt'", self.program);
    }

    fn name(&self) -> &str {
        "prefixed"
    }

    fn description(&self) -> &str {
        "prefix diagnostics with the program name"
    }
}

fn main() -> Result<(), SchemaError> {
    let schema = Schema::builder()
        .option("input", OptionSpec::new().position(0).default_value("-"))
        .option("mode", OptionSpec::new().choices(["fast", "safe"]).required())
        .build()?;

    // Register the printer next to the built-in ones
    let mut registry = PrinterRegistry::new();
    registry.register_printer(
        "prefixed",
        Rc::new(PrefixedPrinter {
            program: "custom_printer".to_string(),
        }),
    );

    println!("Available printers:");
    for (name, description) in registry.list_printers() {
        println!("  - {}: {}", name, description);
    }

    let parser = argspec::parser().options(schema);
    let parser = match registry.get_printer("prefixed") {
        Some(printer) => parser.shared_printer(printer),
        None => parser,
    };

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    match parser.parse(&tokens) {
        Some(options) => {
            for (name, value) in options.iter() {
                println!("{} = {}", name, value);
            }
        }
        None => std::process::exit(2),
    }

    // Swap in a recording printer to inspect diagnostics from code
    let memory = MemoryPrinter::new();
    let quiet = parser.printer(memory.clone());
    quiet.parse(&["--mode", "turbo"]);
    println!("Recorded diagnostics: {:?}", memory.messages());

    Ok(())
}
