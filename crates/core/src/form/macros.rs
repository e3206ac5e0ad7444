//! Field macros: application-defined field types.
//!
//! A registry is assembled once at startup with [`MacroRegistryBuilder`] and
//! shared (behind an `Arc`) by every form built afterwards. It is never
//! mutated after `build`.

use super::Form;
use crate::error::FormError;
use formwork_types::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Arguments passed to a macro when a form resolves it by name.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArgs {
    pub slug: String,
    pub value: Value,
    pub properties: Value,
}

pub type FieldMacro = Arc<dyn Fn(&mut Form, FieldArgs) -> Result<(), FormError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct MacroRegistry {
    macros: HashMap<String, FieldMacro>,
}

impl fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.macros.keys().collect();
        names.sort();
        f.debug_struct("MacroRegistry").field("macros", &names).finish()
    }
}

impl MacroRegistry {
    pub fn builder() -> MacroRegistryBuilder {
        MacroRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldMacro> {
        self.macros.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

#[derive(Default)]
pub struct MacroRegistryBuilder {
    macros: HashMap<String, FieldMacro>,
}

impl MacroRegistryBuilder {
    /// Registers `name`. A later registration under the same name wins.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&mut Form, FieldArgs) -> Result<(), FormError> + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("Registering field macro '{}'", name);
        self.macros.insert(name, Arc::new(factory));
        self
    }

    pub fn build(self) -> MacroRegistry {
        MacroRegistry { macros: self.macros }
    }
}
