use crate::error::{LeagueError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

type Instance = Arc<dyn Any + Send + Sync>;

/// Turns the registered implementation into an `Arc<Arc<dyn Trait>>`, erased
/// again as an [`Instance`]. `None` when the instance is not the bound type.
type Caster = Arc<dyn Fn(Instance) -> Option<Instance> + Send + Sync>;

/// `dyn Trait => Impl` binding.
#[derive(Clone)]
struct Binding {
    implementation: TypeId,
    caster: Caster,
}

/// Thread-safe dependency injection container.
///
/// Concrete services are keyed by their type. Trait objects are resolved
/// through a binding to a concrete service, so the binding can be declared
/// before the implementation is registered.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, Instance>,
    bindings: DashMap<TypeId, Binding>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    /// Register an instance that is already shared elsewhere.
    pub fn register_arc<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        tracing::trace!(service = type_name::<T>(), "registering service");
        self.services.insert(TypeId::of::<T>(), instance);
        self
    }

    /// Make `Arc<Trait>` resolvable from the registered `Impl`.
    pub fn register_trait<Trait, Impl, F>(&mut self, cast: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        tracing::trace!(
            binding = type_name::<Trait>(),
            implementation = type_name::<Impl>(),
            "binding trait"
        );
        let caster: Caster = Arc::new(move |instance: Instance| {
            let concrete = instance.downcast::<Impl>().ok()?;
            Some(Arc::new(cast(concrete)) as Instance)
        });
        self.bindings.insert(
            TypeId::of::<Trait>(),
            Binding {
                implementation: TypeId::of::<Impl>(),
                caster,
            },
        );
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(not_found::<T>)?;
        instance.downcast::<T>().map_err(|_| downcast_failed::<T>())
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let binding = self
            .bindings
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(not_found::<T>)?;

        let instance = self
            .services
            .get(&binding.implementation)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LeagueError::DependencyNotFound {
                type_name: format!("implementation bound to {}", type_name::<T>()),
            })?;

        let wrapped = (binding.caster)(instance)
            .ok_or_else(downcast_failed::<T>)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed::<T>())?;
        Ok(Arc::clone(wrapped.as_ref()))
    }

    /// Whether `T` is registered, or bound when `T` is a trait object.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.bindings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

fn not_found<T: ?Sized>() -> LeagueError {
    LeagueError::DependencyNotFound {
        type_name: type_name::<T>().to_string(),
    }
}

fn downcast_failed<T: ?Sized>() -> LeagueError {
    LeagueError::DowncastFailed {
        type_name: type_name::<T>().to_string(),
    }
}
