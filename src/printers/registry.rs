// registry.rs - Registry of named printers

use std::collections::HashMap;
use std::rc::Rc;

use super::traits::Printer;
use super::{SilentPrinter, StderrPrinter, StdoutPrinter};

/// Named printers selectable at runtime (e.g. from the command line)
pub struct PrinterRegistry {
    printers: HashMap<String, Rc<dyn Printer>>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            printers: HashMap::new(),
        };

        // Register built-in printers
        registry.register_printer("stderr", Rc::new(StderrPrinter));
        registry.register_printer("stdout", Rc::new(StdoutPrinter));
        registry.register_printer("silent", Rc::new(SilentPrinter));

        registry
    }

    /// Register a printer under a name, replacing any previous one
    pub fn register_printer(&mut self, name: &str, printer: Rc<dyn Printer>) {
        self.printers.insert(name.to_string(), printer);
    }

    /// Get a shared handle to a printer by name
    pub fn get_printer(&self, name: &str) -> Option<Rc<dyn Printer>> {
        self.printers.get(name).cloned()
    }

    pub fn has_printer(&self, name: &str) -> bool {
        self.printers.contains_key(name)
    }

    /// List all available printers as (name, description), sorted by name
    pub fn list_printers(&self) -> Vec<(&str, &str)> {
        let mut printers: Vec<(&str, &str)> = self
            .printers
            .iter()
            .map(|(name, p)| (name.as_str(), p.description()))
            .collect();
        printers.sort();
        printers
    }

    /// Get all printer names, sorted
    pub fn get_printer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.printers.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for PrinterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printers::MemoryPrinter;

    #[test]
    fn test_registry() {
        let registry = PrinterRegistry::new();

        assert!(registry.has_printer("stderr"));
        assert!(registry.has_printer("stdout"));
        assert!(registry.has_printer("silent"));
        assert!(!registry.has_printer("nonexistent"));

        assert_eq!(registry.get_printer_names(), vec!["silent", "stderr", "stdout"]);
        assert_eq!(registry.list_printers().len(), 3);
    }

    #[test]
    fn test_register_custom_printer() {
        let mut registry = PrinterRegistry::new();
        let memory = MemoryPrinter::new();
        registry.register_printer("memory", Rc::new(memory.clone()));

        let printer = registry.get_printer("memory").unwrap();
        printer.print("color must be one of: green, blue");
        assert_eq!(memory.count(), 1);
        assert_eq!(printer.name(), "memory");
    }
}
