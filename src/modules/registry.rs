use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ResolveError;
use crate::modules::{IngestModule, ReportModule, TransformModule};
use crate::traits::StepModule;

/// Factory producing a step module instance, or `None` when the registered
/// unit has no runnable entry point.
pub type ModuleFactory = Box<dyn Fn() -> Option<Arc<dyn StepModule>> + Send + Sync>;

/// Resolves module identifiers into runtime step instances.
///
/// The set of known modules is fixed at registration time; resolution is a
/// pure lookup by identifier followed by a fresh factory call. Nothing is
/// cached between resolutions, so resolving the same identifier twice is
/// independent and yields equivalently behaving instances both times.
pub struct ModuleRegistry {
    factories: HashMap<String, ModuleFactory>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry populated with the compiled-in step modules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("ingest", || Some(Arc::new(IngestModule::new())));
        registry.register("transform", || Some(Arc::new(TransformModule::new())));
        registry.register("report", || Some(Arc::new(ReportModule::new())));
        registry
    }

    /// Register a factory under a module identifier.
    ///
    /// A later registration under the same identifier replaces the earlier
    /// one.
    pub fn register<F>(&mut self, module: &str, factory: F)
    where
        F: Fn() -> Option<Arc<dyn StepModule>> + Send + Sync + 'static,
    {
        self.factories.insert(module.to_string(), Box::new(factory));
    }

    /// Resolve a module identifier to a step instance.
    ///
    /// The factory is invoked on every call; failures are deterministic and
    /// repeatable for a given registry.
    pub fn resolve(&self, module: &str) -> Result<Arc<dyn StepModule>, ResolveError> {
        let factory = self
            .factories
            .get(module)
            .ok_or_else(|| ResolveError::ModuleNotFound {
                module: module.to_string(),
            })?;

        factory().ok_or_else(|| ResolveError::EntryPointMissing {
            module: module.to_string(),
        })
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, module: &str) -> bool {
        self.factories.contains_key(module)
    }

    /// All registered module identifiers.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.factories.keys()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("module_count", &self.factories.len())
            .field("modules", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
