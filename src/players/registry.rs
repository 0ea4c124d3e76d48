use super::*;
use crate::Error;
use crate::Result;
use std::collections::BTreeMap;

/// Builds a fresh strategy instance.
pub type Factory = fn() -> Box<dyn Strategy>;

/// Strategy constructors keyed by name.
///
/// Every match needs fresh instances, since strategies keep per-match state
/// (label, generator), so the registry hands out constructors rather than
/// shared objects.
#[derive(Debug, Clone)]
pub struct Registry {
    factories: BTreeMap<&'static str, Factory>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self {
            factories: BTreeMap::new(),
        };
        registry.register("first-foreign", || Box::new(FirstForeign::default()));
        registry.register("random-foreign", || Box::new(RandomForeign::default()));
        registry.register("hub", || Box::new(Hub::default()));
        registry.register("idle", || Box::new(Idle));
        #[cfg(feature = "cli")]
        registry.register("human", || Box::new(Human::default()));
        registry
    }
}

impl Registry {
    /// Name of the strategy that fills seats nobody asked for.
    pub const FALLBACK: &'static str = "first-foreign";

    pub fn register(&mut self, name: &'static str, factory: Factory) {
        self.factories.insert(name, factory);
    }
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
    pub fn create(&self, name: &str) -> Result<Box<dyn Strategy>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| {
                Error::parameter(format!(
                    "unknown strategy {} (known: {})",
                    name,
                    self.names().collect::<Vec<_>>().join(", ")
                ))
            })
    }
    /// One instance per name, in seat order.
    pub fn roster<S>(&self, names: &[S]) -> Result<Vec<Box<dyn Strategy>>>
    where
        S: AsRef<str>,
    {
        names.iter().map(|name| self.create(name.as_ref())).collect()
    }
}
