//! The condition registry.
//!
//! Built once at startup from explicit module contributions, read-only
//! afterwards. The compiler resolves token names against it; help output
//! iterates it.

use std::collections::HashMap;

use crate::descriptor::ConditionDescriptor;

/// Immutable catalog of registered conditions.
///
/// Name collisions resolve to **first registration wins**: a later
/// descriptor claiming an already-registered command name (primary or
/// inverse) is dropped with a warning. This is an explicit policy choice;
/// it keeps the startup-ordered base library authoritative over late
/// contributions.
#[derive(Debug, Default)]
pub struct ConditionRegistry {
    descriptors: Vec<ConditionDescriptor>,
    /// Lowercased command name -> (descriptor index, inverted).
    names: HashMap<String, (usize, bool)>,
}

impl ConditionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from module contributions, in order.
    ///
    /// Each module is a pure function's output: its descriptor list.
    #[must_use]
    pub fn with_modules(
        modules: impl IntoIterator<Item = Vec<ConditionDescriptor>>,
    ) -> Self {
        let mut registry = Self::new();
        for module in modules {
            for descriptor in module {
                registry.register(descriptor);
            }
        }
        registry
    }

    /// Registers one descriptor.
    ///
    /// If the primary command name is already claimed the whole descriptor
    /// is dropped. If only the inverse name collides, the descriptor is
    /// kept but the colliding inverse is not resolvable. Both cases warn.
    pub fn register(&mut self, descriptor: ConditionDescriptor) {
        let primary = descriptor.command.to_lowercase();
        if self.names.contains_key(&primary) {
            tracing::warn!(
                command = %descriptor.command,
                "multiple conditions registered under the same command; ignoring subsequent entry"
            );
            return;
        }

        let index = self.descriptors.len();
        self.names.insert(primary, (index, false));

        if let Some(invert) = &descriptor.invert_command {
            let invert_key = invert.to_lowercase();
            if self.names.contains_key(&invert_key) {
                tracing::warn!(
                    command = %invert,
                    "inverse command name already registered; ignoring it for {}",
                    descriptor.command
                );
            } else {
                self.names.insert(invert_key, (index, true));
            }
        }

        self.descriptors.push(descriptor);
    }

    /// Resolves a token against all registered names, case-insensitively.
    ///
    /// Returns the descriptor and whether the token matched its inverse
    /// name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(&ConditionDescriptor, bool)> {
        let (index, inverted) = *self.names.get(&name.to_lowercase())?;
        Some((&self.descriptors[index], inverted))
    }

    /// True when `name` is any registered command name.
    ///
    /// The compiler uses this to decide whether a lookahead token is a
    /// parameter or the next command.
    #[must_use]
    pub fn is_command(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_lowercase())
    }

    /// Looks up a descriptor by its primary command name only.
    #[must_use]
    pub fn get(&self, command: &str) -> Option<&ConditionDescriptor> {
        match self.lookup(command) {
            Some((descriptor, false)) => Some(descriptor),
            _ => None,
        }
    }

    /// All descriptors in registration order, for help output.
    pub fn descriptors(&self) -> impl Iterator<Item = &ConditionDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
