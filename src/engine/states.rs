//! Named-state registry: register state factories by name and start them fresh.

use std::collections::HashMap;

type Factory<S> = Box<dyn Fn() -> S>;

/// Registry of named state factories.
///
/// Starting a state always builds a brand-new instance, so nothing carries
/// over from the previous run of the same state.
pub struct StateRegistry<S> {
    factories: HashMap<String, Factory<S>>,
}

impl<S> StateRegistry<S> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `name`.
    pub fn add<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> S + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Build a fresh instance of `name`, or `None` if nothing is registered under it.
    pub fn start(&self, name: &str) -> Option<S> {
        self.factories.get(name).map(|factory| factory())
    }
}

impl<S> Default for StateRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
