// memory.rs - Printer that records diagnostics for later inspection

use std::cell::RefCell;
use std::rc::Rc;

use super::traits::Printer;

/// Keeps every diagnostic it receives.
///
/// Clones share the same buffer, so one clone can be handed to a parser
/// while another is kept to read the messages back.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrinter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Printer for MemoryPrinter {
    fn print(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn description(&self) -> &str {
        "record diagnostics in memory"
    }
}
