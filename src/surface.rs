//! The root element attribute the stylesheet is keyed on.

use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub trait ThemeSurface {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;
}

impl<D: ThemeSurface + ?Sized> ThemeSurface for &D {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        (**self).set_attribute(name, value)
    }
}

/// Stand-in root element for native builds and tests. Counts writes so callers
/// can tell a no-op from a rewrite of the same value.
#[derive(Debug, Default)]
pub struct MemorySurface {
    attributes: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeSurface for MemorySurface {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
