//! Dependency resolution
//!
//! A [`DependencyResolver`] builds instances for runtime type tokens. The
//! factory uses it to construct providers and `Settings` uses it to
//! construct a configured data parser.
//!
//! A process-wide resolver is available through [`current`] and
//! [`set_resolver`]. It should be set once at start-up, before providers are
//! created; factories and settings can also take an explicit resolver.

use std::any::Any;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use crate::value_objects::TypeRef;

/// Construction strategy for types known only at runtime
pub trait DependencyResolver: Send + Sync {
    /// Build an instance of `type_ref`, or `None` if this resolver cannot
    fn resolve(&self, type_ref: &TypeRef) -> Option<Box<dyn Any>>;

    /// Release resources held by this resolver.
    ///
    /// Called when the resolver is replaced as the process-wide resolver.
    fn dispose(&self) {}
}

/// Typed helpers over [`DependencyResolver`]
pub trait DependencyResolverExt: DependencyResolver {
    /// Resolve `T` and downcast the result
    fn resolve_as<T: Default + 'static>(&self) -> Option<T> {
        self.resolve(&TypeRef::constructible::<T>())
            .and_then(|instance| instance.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }
}

impl<R: DependencyResolver + ?Sized> DependencyResolverExt for R {}

/// Default resolver: parameterless construction through the type's
/// registered constructor
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivatorResolver;

impl DependencyResolver for ActivatorResolver {
    fn resolve(&self, type_ref: &TypeRef) -> Option<Box<dyn Any>> {
        let constructor = type_ref.constructor();
        if constructor.is_none() {
            debug!(type_name = type_ref.name(), "No parameterless constructor registered");
        }
        constructor.map(|construct| construct())
    }
}

static RESOLVER: LazyLock<ArcSwap<Arc<dyn DependencyResolver>>> =
    LazyLock::new(|| ArcSwap::from_pointee(Arc::new(ActivatorResolver)));

/// The process-wide resolver
pub fn current() -> Arc<dyn DependencyResolver> {
    RESOLVER.load_full().as_ref().clone()
}

/// Replace the process-wide resolver, disposing the previous one
pub fn set_resolver(resolver: Arc<dyn DependencyResolver>) {
    let previous = RESOLVER.swap(Arc::new(resolver));
    warn!("Process-wide dependency resolver replaced");
    previous.dispose();
}

/// Restore the activator resolver as the process-wide resolver
pub fn reset_resolver() {
    set_resolver(Arc::new(ActivatorResolver));
}
