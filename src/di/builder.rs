use crate::di::Container;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// Use this to register infrastructure that has no DI dependencies of its own
/// (configuration, template engine, message catalog) before modules are
/// registered on top of it.
///
/// # Example
/// ```
/// use pokeleague::ContainerBuilder;
/// use pokeleague::config::ConfigService;
///
/// let container = ContainerBuilder::new()
///     .register(ConfigService::default())
///     .build();
/// assert!(container.contains::<ConfigService>());
/// ```
#[derive(Default)]
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}
